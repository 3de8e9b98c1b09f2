//! Declarative family definition.

/// Wires a polymorphic enum up for present-property dispatch: generates the
/// `From` conversions for its concrete types, a
/// [`PresentProperty`](crate::PresentProperty) impl whose family is built
/// once in a `LazyLock` static, and a `Deserialize` impl that dispatches on
/// which property is present.
///
/// Entries are declared in resolution order; serialization stays with serde
/// (derive `Serialize` with `#[serde(untagged)]` on the enum).
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct RoadBike {
///     #[serde(rename = "roadBike")]
///     road_bike: String,
/// }
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Bmx {
///     bmx: String,
/// }
///
/// #[derive(Debug, Clone, PartialEq, Serialize)]
/// #[serde(untagged)]
/// enum Bike {
///     Road(RoadBike),
///     Bmx(Bmx),
/// }
///
/// keymorph_bind::present_property_family! {
///     Bike {
///         "roadBike" => Road(RoadBike),
///         "bmx" => Bmx(Bmx),
///     }
/// }
///
/// let bike: Bike = keymorph_bind::from_str(r#"{"roadBike":"carbon"}"#).unwrap();
/// assert_eq!(bike, Bike::Road(RoadBike { road_bike: "carbon".into() }));
/// ```
#[macro_export]
macro_rules! present_property_family {
    (
        $family:ty {
            $( $property:literal => $variant:ident($concrete:ty) ),+ $(,)?
        }
    ) => {
        $(
            impl ::core::convert::From<$concrete> for $family {
                fn from(value: $concrete) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl $crate::PresentProperty for $family {
            fn family() -> &'static $crate::PolymorphicFamily<Self> {
                static FAMILY: ::std::sync::LazyLock<$crate::PolymorphicFamily<$family>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::PolymorphicFamily::builder(::core::stringify!($family))
                            $( .variant::<$concrete>($property) )+
                            .build()
                    });
                &FAMILY
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $family {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::deserialize(deserializer)
            }
        }
    };
}
