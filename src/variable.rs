//! Variables: measurable characteristics tied to a unit type and a concept.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::concept::ConceptId;
use crate::unit_type::UnitTypeId;

/// Identifier of a [`Variable`], unique within the variable collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VariableId(u32);

impl VariableId {
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

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<VariableId> for u32 {
    fn from(id: VariableId) -> Self {
        id.0
    }
}

/// A measurable characteristic tied to a unit type and a concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Unique identifier within the variable collection.
    pub id: VariableId,

    /// Primary name.
    pub name: String,

    /// Prose definition.
    pub description: String,

    /// Variables this variable can be compared to.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub is_comparable_to: Vec<VariableId>,

    /// The unit type the variable is collected about. Required.
    #[serde(deserialize_with = "crate::dataset::id")]
    pub unit_type_id: UnitTypeId,

    /// The concept the variable measures. Required.
    #[serde(deserialize_with = "crate::dataset::id")]
    pub measures: ConceptId,
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_deserializes() {
        let variable: Variable = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Victimisation of Person",
                "description": "Whether a person has had physical force or violence used against them",
                "unitTypeId": 1,
                "measures": 0
            }"#,
        )
        .unwrap();
        assert_eq!(variable.unit_type_id, UnitTypeId::new(1));
        assert_eq!(variable.measures, ConceptId::new(0));
        assert!(variable.is_comparable_to.is_empty());
    }

    #[test]
    fn test_variable_requires_unit_type() {
        let result: Result<Variable, _> =
            serde_json::from_str(r#"{"id": 1, "name": "x", "description": "y", "measures": 0}"#);
        assert!(result.is_err());
    }
}
