//! Adapters between polymorphic families and serde deserializers.

use crate::present::PresentProperty;
use keymorph_model::PolymorphicFamily;
use serde::Deserialize;
use serde::de::{self, DeserializeSeed, Deserializer};
use serde_json::Value;
use std::fmt;

/// Deserializes a [`PresentProperty`] type through any serde deserializer.
///
/// Buffers the input into a JSON tree, resolves the concrete type, and
/// delegates. Suitable both for hand-written `Deserialize` impls and for
/// `#[serde(deserialize_with = "keymorph_bind::deserialize")]` fields.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: PresentProperty,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::family()
        .deserialize_value(value)
        .map_err(de::Error::custom)
}

/// A [`DeserializeSeed`] that resolves against an explicitly supplied family
/// rather than a [`PresentProperty`] static. Useful when families are built
/// at runtime.
pub struct FamilySeed<'a, T> {
    family: &'a PolymorphicFamily<T>,
}

impl<'a, T> FamilySeed<'a, T> {
    /// Creates a seed for one deserialization call.
    #[must_use]
    pub fn new(family: &'a PolymorphicFamily<T>) -> Self {
        Self { family }
    }
}

impl<T> Clone for FamilySeed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FamilySeed<'_, T> {}

impl<T> fmt::Debug for FamilySeed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilySeed")
            .field("family", &self.family)
            .finish()
    }
}

impl<'de, T> DeserializeSeed<'de> for FamilySeed<'_, T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        self.family
            .deserialize_value(value)
            .map_err(de::Error::custom)
    }
}
