use keymorph_bind::{FamilySeed, PolymorphicFamily, PresentProperty};
use pretty_assertions::assert_eq;
use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sms {
    sms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Email {
    email: String,
    subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Channel {
    Sms(Sms),
    Email(Email),
}

impl From<Sms> for Channel {
    fn from(value: Sms) -> Self {
        Self::Sms(value)
    }
}

impl From<Email> for Channel {
    fn from(value: Email) -> Self {
        Self::Email(value)
    }
}

// Hand-written counterpart of what present_property_family! generates.
impl PresentProperty for Channel {
    fn family() -> &'static PolymorphicFamily<Channel> {
        static FAMILY: LazyLock<PolymorphicFamily<Channel>> = LazyLock::new(|| {
            PolymorphicFamily::builder("Channel")
                .variant::<Sms>("sms")
                .variant_auto::<Email>()
                .build()
        });
        &FAMILY
    }
}

// ── FamilySeed ───────────────────────────────────────────────────

#[test]
fn seed_resolves_through_a_json_deserializer() {
    let seed = FamilySeed::new(Channel::family());

    let actual = seed.deserialize(json!({"sms": "hi"})).unwrap();
    assert_eq!(
        actual,
        Channel::Sms(Sms {
            sms: "hi".to_string()
        })
    );
}

#[test]
fn seed_uses_auto_derived_property_names() {
    let seed = FamilySeed::new(Channel::family());

    let actual = seed
        .deserialize(json!({"email": "a@b.c", "subject": "hello"}))
        .unwrap();
    assert_eq!(
        actual,
        Channel::Email(Email {
            email: "a@b.c".to_string(),
            subject: Some("hello".to_string()),
        })
    );
}

#[test]
fn seed_is_reusable_across_calls() {
    let seed = FamilySeed::new(Channel::family());

    let first = seed.deserialize(json!({"sms": "one"})).unwrap();
    let second = seed.deserialize(json!({"sms": "two"})).unwrap();
    assert_eq!(
        (first, second),
        (
            Channel::Sms(Sms {
                sms: "one".to_string()
            }),
            Channel::Sms(Sms {
                sms: "two".to_string()
            }),
        )
    );
}

#[test]
fn seed_maps_resolver_errors_into_the_deserializer_error() {
    let seed = FamilySeed::new(Channel::family());

    let err = seed.deserialize(json!("not an object")).unwrap_err();
    assert!(err.to_string().contains("JSON object"));

    let err = seed.deserialize(json!({"pigeon": "coo"})).unwrap_err();
    assert!(err.to_string().contains("no registered property"));
}

// ── deserialize_with fields ──────────────────────────────────────

#[derive(Debug, PartialEq, Deserialize)]
struct Notification {
    id: u32,
    #[serde(deserialize_with = "keymorph_bind::deserialize")]
    channel: Channel,
}

#[test]
fn deserialize_with_dispatches_a_nested_field() {
    let actual: Notification =
        serde_json::from_str(r#"{"id": 7, "channel": {"sms": "ping"}}"#).unwrap();
    assert_eq!(
        actual,
        Notification {
            id: 7,
            channel: Channel::Sms(Sms {
                sms: "ping".to_string()
            }),
        }
    );
}

#[test]
fn deserialize_with_propagates_no_match() {
    let err = serde_json::from_str::<Notification>(r#"{"id": 7, "channel": {}}"#).unwrap_err();
    assert!(err.to_string().contains("no registered property"));
}
