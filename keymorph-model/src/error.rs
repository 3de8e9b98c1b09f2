//! Error types for family resolution.

use crate::kind::JsonKind;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur when resolving or materializing a polymorphic value.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// None of the family's registered properties is present in the object.
    #[error("no registered property of '{family}' is present (expected one of: {candidates})")]
    NoMatch {
        family: &'static str,
        candidates: String,
    },

    /// The input node is not a JSON object.
    #[error("'{family}' can only be resolved from a JSON object, got {found}")]
    NotAnObject {
        family: &'static str,
        found: JsonKind,
    },

    /// Delegated materialization of the resolved concrete type failed.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}
