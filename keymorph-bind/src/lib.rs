//! serde data binding for keymorph polymorphic families.
//!
//! Where `keymorph-model` decides *which* concrete type a JSON object maps
//! to, this crate wires that decision into serde:
//! - [`PresentProperty`] — associates an abstract type with its family
//! - [`from_value`] / [`from_str`] / [`from_slice`] — serde_json-style entry points
//! - [`deserialize`] — for hand-written `Deserialize` impls and
//!   `#[serde(deserialize_with = "...")]` fields
//! - [`FamilySeed`] — a `DeserializeSeed` carrying an explicit family
//! - [`present_property_family!`] — declarative family and impl generation
//!
//! The model crate's public surface is re-exported so downstream code only
//! needs one dependency.

mod de;
mod macros;
mod present;

pub use de::{FamilySeed, deserialize};
pub use present::{PresentProperty, from_slice, from_str, from_value};

pub use keymorph_model::{
    FamilyBuilder, FamilyEntry, JsonKind, PolymorphicFamily, ResolveError, ResolveResult,
};
