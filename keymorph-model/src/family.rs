//! The ordered family registry and the present-property resolver.

use crate::entry::{FamilyEntry, short_type_name};
use crate::error::{ResolveError, ResolveResult};
use crate::kind::JsonKind;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{trace, warn};

/// A closed set of concrete types unified under one abstract type, each
/// identified by the presence of a distinct JSON object property.
///
/// Entries are kept in registration order; when an input object carries more
/// than one registered property, the earliest-registered entry wins. A family
/// is immutable after [`FamilyBuilder::build`] and can be shared freely
/// across threads.
pub struct PolymorphicFamily<T> {
    name: &'static str,
    entries: Vec<FamilyEntry<T>>,
}

impl<T> PolymorphicFamily<T> {
    /// Starts building a family for the abstract type called `name`.
    #[must_use]
    pub fn builder(name: &'static str) -> FamilyBuilder<T> {
        FamilyBuilder {
            name,
            entries: Vec::new(),
        }
    }

    /// The abstract type's name, as given to [`PolymorphicFamily::builder`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[FamilyEntry<T>] {
        &self.entries
    }

    /// Resolves which registered entry the input object selects.
    ///
    /// Matching is on key membership alone: a property mapped to `null` or
    /// `""` still counts as present. Entries are tested in registration
    /// order, so the earliest registration wins on ambiguous input.
    pub fn resolve(&self, node: &Value) -> ResolveResult<&FamilyEntry<T>> {
        let Some(object) = node.as_object() else {
            return Err(ResolveError::NotAnObject {
                family: self.name,
                found: JsonKind::of(node),
            });
        };

        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| object.contains_key(entry.property()))
        else {
            return Err(ResolveError::NoMatch {
                family: self.name,
                candidates: self.candidate_list(),
            });
        };

        trace!(
            family = self.name,
            property = %entry.property(),
            concrete = entry.type_name(),
            "Resolved present property"
        );
        Ok(entry)
    }

    /// Resolves the concrete type, then delegates materialization of the
    /// whole node to it.
    pub fn deserialize_value(&self, node: Value) -> ResolveResult<T> {
        let entry = self.resolve(&node)?;
        entry.instantiate(node)
    }

    fn candidate_list(&self) -> String {
        let names: Vec<&str> = self.entries.iter().map(FamilyEntry::property).collect();
        names.join(", ")
    }
}

impl<T> fmt::Debug for PolymorphicFamily<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolymorphicFamily")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Builder for [`PolymorphicFamily`]. Registration order is semantic: it is
/// the order entries are tested in during resolution.
pub struct FamilyBuilder<T> {
    name: &'static str,
    entries: Vec<FamilyEntry<T>>,
}

impl<T> FamilyBuilder<T> {
    /// Registers `V` under an explicit discriminating property name.
    #[must_use]
    pub fn variant<V>(mut self, property: &str) -> Self
    where
        V: DeserializeOwned + Into<T> + 'static,
    {
        if self.entries.iter().any(|e| e.property() == property) {
            warn!(
                family = self.name,
                property = %property,
                "Duplicate property registration, first registration wins"
            );
        }
        self.entries.push(FamilyEntry::new::<V>(property.to_owned()));
        self
    }

    /// Registers `V` under its own name in lowerCamelCase
    /// (`RoadBike` → `"roadBike"`).
    #[must_use]
    pub fn variant_auto<V>(self) -> Self
    where
        V: DeserializeOwned + Into<T> + 'static,
    {
        let property = lower_camel(short_type_name::<V>());
        self.variant::<V>(&property)
    }

    /// Finalizes the family. The entry order is fixed from here on.
    #[must_use]
    pub fn build(self) -> PolymorphicFamily<T> {
        PolymorphicFamily {
            name: self.name,
            entries: self.entries,
        }
    }
}

impl<T> fmt::Debug for FamilyBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyBuilder")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .finish()
    }
}

fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
