//! A single registered (property, concrete type) pair.

use crate::error::ResolveResult;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

type Factory<T> = Box<dyn Fn(Value) -> Result<T, serde_json::Error> + Send + Sync>;

/// One entry of a [`PolymorphicFamily`]: the discriminating JSON property
/// and the factory that materializes the concrete type it identifies.
///
/// [`PolymorphicFamily`]: crate::PolymorphicFamily
pub struct FamilyEntry<T> {
    property: String,
    type_name: &'static str,
    factory: Factory<T>,
}

impl<T> FamilyEntry<T> {
    /// Creates an entry that materializes `V` through its serde
    /// implementation and converts it into the family's abstract type.
    pub(crate) fn new<V>(property: String) -> Self
    where
        V: DeserializeOwned + Into<T> + 'static,
    {
        Self {
            property,
            type_name: short_type_name::<V>(),
            factory: Box::new(|value| serde_json::from_value::<V>(value).map(Into::into)),
        }
    }

    /// The JSON property whose presence selects this entry.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The unqualified name of the concrete type this entry produces.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Materializes the concrete type from the full JSON node.
    ///
    /// The node is handed to serde unchanged; the discriminating property is
    /// an ordinary field of the concrete type.
    pub fn instantiate(&self, node: Value) -> ResolveResult<T> {
        Ok((self.factory)(node)?)
    }
}

impl<T> fmt::Debug for FamilyEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyEntry")
            .field("property", &self.property)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Unqualified name of `V`: module path and generic arguments stripped.
pub(crate) fn short_type_name<V>() -> &'static str {
    let full = std::any::type_name::<V>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
