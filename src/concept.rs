//! Concepts: the abstract statistical notions the rest of the catalog is
//! grounded in.
//!
//! Unit types are based on concepts, and variables measure them. A concept is
//! the most upstream record in the catalog; it references nothing outside its
//! own kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Concept`], unique within the concept collection.
///
/// Id 0 is the catalog's placeholder record and resolves like any other id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConceptId(u32);

impl ConceptId {
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

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ConceptId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ConceptId> for u32 {
    fn from(id: ConceptId) -> Self {
        id.0
    }
}

/// An abstract statistical notion (e.g. "Person") that grounds a unit type
/// or variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Unique identifier within the concept collection.
    pub id: ConceptId,

    /// Primary name.
    pub name: String,

    /// Prose definition.
    pub description: String,

    /// Alternative labels for the concept.
    #[serde(default)]
    pub concept_label: Vec<String>,

    /// Whether the concept is a characteristic of a unit rather than a unit
    /// in its own right.
    #[serde(default)]
    pub is_characteristic: bool,

    /// Concepts this concept can be compared to.
    #[serde(
        default,
        deserialize_with = "crate::dataset::id_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub is_comparable_to: Vec<ConceptId>,

    /// Concepts this concept qualifies.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub is_qualification_of: Vec<ConceptId>,
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Concept {}
