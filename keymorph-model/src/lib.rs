//! Polymorphic family registry and present-property resolver.
//!
//! Defines the types that keymorph data binding is built on:
//! - [`PolymorphicFamily`] — an ordered registry of concrete types, each
//!   keyed by the JSON property whose presence identifies it
//! - [`FamilyEntry`] — one registered (property, concrete type) pair
//! - [`JsonKind`] — the JSON value kinds, for diagnostics
//! - [`ResolveError`] — resolution and delegation failures
//!
//! Resolution is structural: the first registered entry whose property is a
//! key of the input object wins, regardless of the key's value. Field-level
//! construction stays with serde — this crate only decides *which* concrete
//! type the node is handed to.

mod entry;
mod error;
mod family;
mod kind;

pub use entry::FamilyEntry;
pub use error::{ResolveError, ResolveResult};
pub use family::{FamilyBuilder, PolymorphicFamily};
pub use kind::JsonKind;
