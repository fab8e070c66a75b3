//! Represented variables: a variable paired with a concrete value-domain
//! definition.
//!
//! The stored reference field is named `takesMeaningFrom` in the source data;
//! the query contract exposes it as the `variable` relationship.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variable::VariableId;

/// Identifier of a [`RepresentedVariable`], unique within its collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RepresentedVariableId(u32);

impl RepresentedVariableId {
    /// Creates an id from its integer value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RepresentedVariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RepresentedVariableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<RepresentedVariableId> for u32 {
    fn from(id: RepresentedVariableId) -> Self {
        id.0
    }
}

/// A variable paired with a concrete value-domain definition, derived from
/// ("takes meaning from") a [`Variable`](crate::Variable).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentedVariable {
    /// Unique identifier within the represented variable collection.
    pub id: RepresentedVariableId,

    /// Primary name.
    pub name: String,

    /// Prose definition.
    pub description: String,

    /// Optional short name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Whether values of this variable are typically sensitive data.
    #[serde(default)]
    pub is_typically_sensitive: bool,

    /// The variable this represented variable takes meaning from. Required.
    #[serde(deserialize_with = "crate::dataset::id")]
    pub takes_meaning_from: VariableId,
}

impl PartialEq for RepresentedVariable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RepresentedVariable {}
