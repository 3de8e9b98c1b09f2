//! The trait tying an abstract type to its polymorphic family.

use keymorph_model::{PolymorphicFamily, ResolveResult};
use serde_json::Value;

/// An abstract type whose concrete representation is chosen by which JSON
/// property is present.
///
/// Implementations are usually generated by
/// [`present_property_family!`](crate::present_property_family); hand-written
/// impls must build the family once and return the same reference on every
/// call.
pub trait PresentProperty: Sized + 'static {
    /// The family describing this type's concrete representations.
    fn family() -> &'static PolymorphicFamily<Self>;
}

/// Deserializes `T` from an already-parsed JSON tree.
pub fn from_value<T: PresentProperty>(value: Value) -> ResolveResult<T> {
    T::family().deserialize_value(value)
}

/// Deserializes `T` from a JSON string.
pub fn from_str<T: PresentProperty>(json: &str) -> ResolveResult<T> {
    from_value(serde_json::from_str(json)?)
}

/// Deserializes `T` from JSON bytes.
pub fn from_slice<T: PresentProperty>(bytes: &[u8]) -> ResolveResult<T> {
    from_value(serde_json::from_slice(bytes)?)
}
