//! Entity kind tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six kinds of record the catalog holds.
///
/// `EntityKind` is a dispatch and diagnostics tag; records themselves are
/// strongly typed per kind. The serialized form uses the wire names of the
/// query contract (`unitType`, `representedVariable`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// An abstract statistical notion grounding unit types and variables.
    Concept,
    /// The kind of real-world unit data is collected about.
    UnitType,
    /// A measurable characteristic tied to a unit type and a concept.
    Variable,
    /// A variable paired with a concrete value-domain definition.
    RepresentedVariable,
    /// A single instrument question.
    Question,
    /// An ordered grouping of questions forming a module.
    QuestionBlock,
}

impl EntityKind {
    /// All kinds, in catalog declaration order.
    pub const ALL: [Self; 6] = [
        Self::Concept,
        Self::UnitType,
        Self::Variable,
        Self::RepresentedVariable,
        Self::Question,
        Self::QuestionBlock,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concept => write!(f, "concept"),
            Self::UnitType => write!(f, "unit type"),
            Self::Variable => write!(f, "variable"),
            Self::RepresentedVariable => write!(f, "represented variable"),
            Self::Question => write!(f, "question"),
            Self::QuestionBlock => write!(f, "question block"),
        }
    }
}
