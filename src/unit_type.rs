//! Unit types: the kinds of real-world unit data is collected about.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::concept::ConceptId;

/// Identifier of a [`UnitType`], unique within the unit type collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnitTypeId(u32);

impl UnitTypeId {
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

impl fmt::Display for UnitTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UnitTypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<UnitTypeId> for u32 {
    fn from(id: UnitTypeId) -> Self {
        id.0
    }
}

/// The kind of real-world unit (person, household, business) data is
/// collected about.
///
/// `is_based_on` is a required reference set; the shipped data stores one
/// concept per unit type, and two of them (Business, Social Episode) point at
/// a concept id that does not exist in the catalog. Those references resolve
/// to an empty list, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    /// Unique identifier within the unit type collection.
    pub id: UnitTypeId,

    /// Primary name.
    pub name: String,

    /// Prose definition.
    pub description: String,

    /// Other unit types this one refers to.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub references: Vec<UnitTypeId>,

    /// The concepts this unit type is based on.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub is_based_on: Vec<ConceptId>,
}

impl PartialEq for UnitType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UnitType {}
