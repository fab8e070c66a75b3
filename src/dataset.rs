//! Catalog dataset loading.
//!
//! The catalog ships with a fixed embedded dataset describing one survey
//! instrument (a victimisation module). This module parses that dataset and
//! normalizes the loose reference typing observed in the source data: a
//! foreign-key field may arrive as an integer, a numeric string, or (for
//! set-valued fields) a bare scalar where a list is expected. All of these
//! normalize to integer ids at load time; a coerced or dropped value is a
//! data-validation warning, never an error.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use tracing::warn;

use crate::concept::Concept;
use crate::error::LoadError;
use crate::question::Question;
use crate::question_block::QuestionBlock;
use crate::represented_variable::RepresentedVariable;
use crate::unit_type::UnitType;
use crate::variable::Variable;

/// The embedded catalog dataset, verbatim.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// The six raw collections of the catalog, as parsed from the dataset.
///
/// A `Dataset` is an intermediate product: it has been shape-checked and
/// reference-normalized, but id uniqueness is only enforced when the dataset
/// is turned into a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Concept records, in declaration order.
    #[serde(default)]
    pub concepts: Vec<Concept>,

    /// Unit type records, in declaration order.
    #[serde(default)]
    pub unit_types: Vec<UnitType>,

    /// Variable records, in declaration order.
    #[serde(default)]
    pub variables: Vec<Variable>,

    /// Represented variable records, in declaration order.
    #[serde(default)]
    pub represented_variables: Vec<RepresentedVariable>,

    /// Question records, in declaration order.
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Question block records, in declaration order.
    #[serde(default)]
    pub question_blocks: Vec<QuestionBlock>,
}

impl Dataset {
    /// Parses the embedded catalog dataset.
    ///
    /// # Errors
    /// Returns [`LoadError::Malformed`] if the embedded JSON does not match
    /// the expected shape. With the shipped dataset this cannot happen, but
    /// the parse is still checked rather than unwrapped.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parses a dataset from a JSON document.
    ///
    /// # Errors
    /// Returns [`LoadError::Malformed`] on any shape mismatch.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A reference id as it appears on the wire: integer or numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(u32),
    Text(String),
}

impl RawId {
    /// Normalizes to an integer id, warning when coercion was needed.
    fn normalize(self) -> Option<u32> {
        match self {
            Self::Num(n) => Some(n),
            Self::Text(s) => match s.trim().parse::<u32>() {
                Ok(n) => {
                    warn!(raw = %s, "reference id stored as string; coerced to integer");
                    Some(n)
                }
                Err(_) => {
                    warn!(raw = %s, "reference id is not numeric; dropped");
                    None
                }
            },
        }
    }
}

/// Deserializes a required single-valued reference id leniently.
pub(crate) fn id<'de, D, I>(deserializer: D) -> Result<I, D::Error>
where
    D: Deserializer<'de>,
    I: From<u32>,
{
    let raw = RawId::deserialize(deserializer)?;
    raw.normalize()
        .map(I::from)
        .ok_or_else(|| de::Error::custom("required reference id is not numeric"))
}

/// A set-valued reference field: a list of ids, or a bare scalar standing in
/// for a one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawIdList {
    One(RawId),
    Many(Vec<RawId>),
}

/// Deserializes a multi-valued reference field leniently, preserving order.
///
/// Unparseable entries are dropped with a warning rather than failing the
/// load; dangling (but numeric) ids are kept and resolve to absence later.
pub(crate) fn id_vec<'de, D, I>(deserializer: D) -> Result<Vec<I>, D::Error>
where
    D: Deserializer<'de>,
    I: From<u32>,
{
    let raw = RawIdList::deserialize(deserializer)?;
    let items = match raw {
        RawIdList::One(one) => vec![one],
        RawIdList::Many(many) => many,
    };
    Ok(items
        .into_iter()
        .filter_map(RawId::normalize)
        .map(I::from)
        .collect())
}
