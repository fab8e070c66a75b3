//! Error types for gsimql.
//!
//! The query contract itself surfaces no errors: a missing id and a dangling
//! reference are both modeled as absence (null payloads, empty collections).
//! The types here cover the two places a real fault can occur: loading the
//! embedded dataset, and a request whose selection names a field that does
//! not exist on the entity kind.

use thiserror::Error;

use crate::kind::EntityKind;

/// Errors raised while loading and validating the catalog dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The embedded dataset is not valid JSON for the expected shape.
    #[error("malformed catalog dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id {id} in catalog dataset")]
    DuplicateId {
        /// The collection containing the duplicate.
        kind: EntityKind,
        /// The offending id value.
        id: u32,
    },
}

/// Errors raised while dispatching a query request.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A selection named a field that is not a relationship of the kind.
    #[error("unknown relationship field `{field}` on {kind}")]
    UnknownField {
        /// The entity kind the selection was applied to.
        kind: EntityKind,
        /// The unrecognized field name.
        field: String,
    },
}

/// Top-level error type for gsimql.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset load/validation failure.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Query dispatch failure.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Invariant violation that should not occur in practice.
    #[error("internal error: {message}")]
    Internal {
        /// Human-readable description.
        message: String,
    },
}

impl CatalogError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Returns true if this is a query error.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Result type alias for gsimql operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
