//! Question blocks: ordered groupings of questions forming a module.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::question::QuestionId;

/// Identifier of a [`QuestionBlock`], unique within its collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionBlockId(u32);

impl QuestionBlockId {
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

impl fmt::Display for QuestionBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionBlockId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<QuestionBlockId> for u32 {
    fn from(id: QuestionBlockId) -> Self {
        id.0
    }
}

/// An ordered grouping of questions forming an instrument module.
///
/// The `questions` sequence preserves declaration order; it is the one
/// relationship in the catalog with an ordering guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBlock {
    /// Unique identifier within the question block collection.
    pub id: QuestionBlockId,

    /// Primary name.
    pub name: String,

    /// Prose description of the module.
    pub description: String,

    /// The questions in this block, in presentation order.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub questions: Vec<QuestionId>,
}

impl PartialEq for QuestionBlock {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QuestionBlock {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_block_preserves_order() {
        let block: QuestionBlock = serde_json::from_str(
            r#"{"id": 1, "name": "Victimisation", "description": "d", "questions": [3, 1, 2]}"#,
        )
        .unwrap();
        let ids: Vec<u32> = block.questions.iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_question_block_default_empty() {
        let block: QuestionBlock =
            serde_json::from_str(r#"{"id": 0, "name": "x", "description": "y"}"#).unwrap();
        assert!(block.questions.is_empty());
    }
}
