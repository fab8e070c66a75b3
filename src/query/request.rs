//! Query request definitions.
//!
//! A request names one of the twelve root operations (six collection reads,
//! six by-id lookups) and carries a [`Selection`] describing which
//! relationship fields to resolve in the result tree. Requests are wrapped
//! in a [`CatalogRequest`] envelope for versioning and correlation.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::EntityKind;

/// The set of relationship fields to resolve on an entity, recursively.
///
/// An empty selection resolves no relationships: the caller gets the
/// entity's stored attributes only. Each selected field carries its own
/// sub-selection applied to the resolved target(s), so only the fields a
/// caller actually asks for are ever resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Selection>);

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relationship field with its sub-selection.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, select: Selection) -> Self {
        self.0.insert(name.into(), select);
        self
    }

    /// Returns true if no relationship fields are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the selected fields and their sub-selections.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Selection> {
        self.0.iter()
    }
}

/// The twelve root operations of the query contract.
///
/// Serialized with `op`/`args` tagging; `args` may be `{}` for the
/// collection operations (the selection defaults to empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "camelCase")]
pub enum Operation {
    /// Full concept collection.
    AllConcepts {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// Full unit type collection.
    AllUnitTypes {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// Full variable collection.
    AllVariables {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// Full represented variable collection.
    AllRepresentedVariables {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// Full question collection.
    AllQuestions {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// Full question block collection.
    AllQuestionBlocks {
        /// Relationship fields to resolve per result.
        #[serde(default)]
        select: Selection,
    },

    /// One concept by id, or null.
    Concept {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },

    /// One unit type by id, or null.
    UnitType {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },

    /// One variable by id, or null.
    Variable {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },

    /// One represented variable by id, or null.
    RepresentedVariable {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },

    /// One question by id, or null.
    Question {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },

    /// One question block by id, or null.
    QuestionBlock {
        /// The id to look up.
        id: u32,
        /// Relationship fields to resolve.
        #[serde(default)]
        select: Selection,
    },
}

impl Operation {
    /// The entity kind the operation targets.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::AllConcepts { .. } | Self::Concept { .. } => EntityKind::Concept,
            Self::AllUnitTypes { .. } | Self::UnitType { .. } => EntityKind::UnitType,
            Self::AllVariables { .. } | Self::Variable { .. } => EntityKind::Variable,
            Self::AllRepresentedVariables { .. } | Self::RepresentedVariable { .. } => {
                EntityKind::RepresentedVariable
            }
            Self::AllQuestions { .. } | Self::Question { .. } => EntityKind::Question,
            Self::AllQuestionBlocks { .. } | Self::QuestionBlock { .. } => {
                EntityKind::QuestionBlock
            }
        }
    }

    /// The wire name of the operation, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AllConcepts { .. } => "allConcepts",
            Self::AllUnitTypes { .. } => "allUnitTypes",
            Self::AllVariables { .. } => "allVariables",
            Self::AllRepresentedVariables { .. } => "allRepresentedVariables",
            Self::AllQuestions { .. } => "allQuestions",
            Self::AllQuestionBlocks { .. } => "allQuestionBlocks",
            Self::Concept { .. } => "concept",
            Self::UnitType { .. } => "unitType",
            Self::Variable { .. } => "variable",
            Self::RepresentedVariable { .. } => "representedVariable",
            Self::Question { .. } => "question",
            Self::QuestionBlock { .. } => "questionBlock",
        }
    }
}

/// The envelope wrapping every query operation.
///
/// Provides protocol versioning, a correlation id echoed in the response,
/// and a creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRequest {
    /// Protocol version (e.g. "1.0").
    pub version: String,

    /// Unique identifier for this request.
    pub request_id: Uuid,

    /// When the request was created.
    pub timestamp: DateTime<Utc>,

    /// The operation to execute.
    pub operation: Operation,
}

impl CatalogRequest {
    /// Current protocol version.
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Creates a new request for the given operation.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
        }
    }

    /// Sets a custom request id (useful for correlation).
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }
}
