//! Questions: single instrument questions tied to a represented variable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::represented_variable::RepresentedVariableId;

/// Identifier of a [`Question`], unique within the question collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
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

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<QuestionId> for u32 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

/// A single instrument question tied to one represented variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier within the question collection.
    pub id: QuestionId,

    /// Primary name.
    pub name: String,

    /// What the question collects and how it is asked.
    pub description: String,

    /// Optional statement of the question's purpose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_purpose: Option<String>,

    /// Optional display text shown to the respondent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,

    /// Other questions this question refers to.
    #[serde(default, deserialize_with = "crate::dataset::id_vec")]
    pub references: Vec<QuestionId>,

    /// The represented variable this question collects. Required.
    #[serde(deserialize_with = "crate::dataset::id")]
    pub represented_variable_id: RepresentedVariableId,
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}
