//! The catalog entity store.
//!
//! Six ordered collections of typed records, indexed by id and immutable
//! after construction. The catalog exclusively owns every record; the
//! resolver and the query executor only ever borrow from it, so any number
//! of lookups may run concurrently without synchronization.

use std::collections::HashMap;
use std::hash::Hash;

use crate::concept::{Concept, ConceptId};
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::kind::EntityKind;
use crate::question::{Question, QuestionId};
use crate::question_block::{QuestionBlock, QuestionBlockId};
use crate::represented_variable::{RepresentedVariable, RepresentedVariableId};
use crate::unit_type::{UnitType, UnitTypeId};
use crate::variable::{Variable, VariableId};

/// The read-only entity store over the six catalog collections.
///
/// Collections keep dataset declaration order; by-id access goes through an
/// index map, so lookups do not depend on ids being dense or sorted. An
/// absent id yields `None`, never an error, and id 0 (the dataset's
/// placeholder records) resolves like any other id.
#[derive(Debug)]
pub struct Catalog {
    concepts: Vec<Concept>,
    unit_types: Vec<UnitType>,
    variables: Vec<Variable>,
    represented_variables: Vec<RepresentedVariable>,
    questions: Vec<Question>,
    question_blocks: Vec<QuestionBlock>,

    concept_index: HashMap<ConceptId, usize>,
    unit_type_index: HashMap<UnitTypeId, usize>,
    variable_index: HashMap<VariableId, usize>,
    represented_variable_index: HashMap<RepresentedVariableId, usize>,
    question_index: HashMap<QuestionId, usize>,
    question_block_index: HashMap<QuestionBlockId, usize>,
}

fn index_by_id<T, I>(
    records: &[T],
    kind: EntityKind,
    id_of: impl Fn(&T) -> I,
) -> Result<HashMap<I, usize>, LoadError>
where
    I: Copy + Eq + Hash,
    u32: From<I>,
{
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let id = id_of(record);
        if index.insert(id, position).is_some() {
            return Err(LoadError::DuplicateId {
                kind,
                id: u32::from(id),
            });
        }
    }
    Ok(index)
}

impl Catalog {
    /// Builds a catalog from a parsed dataset, validating id uniqueness.
    ///
    /// # Errors
    /// Returns [`LoadError::DuplicateId`] if any collection contains two
    /// records with the same id.
    pub fn new(dataset: Dataset) -> Result<Self, LoadError> {
        let concept_index = index_by_id(&dataset.concepts, EntityKind::Concept, |c| c.id)?;
        let unit_type_index = index_by_id(&dataset.unit_types, EntityKind::UnitType, |u| u.id)?;
        let variable_index = index_by_id(&dataset.variables, EntityKind::Variable, |v| v.id)?;
        let represented_variable_index = index_by_id(
            &dataset.represented_variables,
            EntityKind::RepresentedVariable,
            |rv| rv.id,
        )?;
        let question_index = index_by_id(&dataset.questions, EntityKind::Question, |q| q.id)?;
        let question_block_index =
            index_by_id(&dataset.question_blocks, EntityKind::QuestionBlock, |b| b.id)?;

        Ok(Self {
            concepts: dataset.concepts,
            unit_types: dataset.unit_types,
            variables: dataset.variables,
            represented_variables: dataset.represented_variables,
            questions: dataset.questions,
            question_blocks: dataset.question_blocks,
            concept_index,
            unit_type_index,
            variable_index,
            represented_variable_index,
            question_index,
            question_block_index,
        })
    }

    /// Builds a catalog from the embedded dataset.
    ///
    /// # Errors
    /// Returns a [`LoadError`] if the embedded dataset fails to parse or
    /// validate; with the shipped data this cannot happen.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::new(Dataset::embedded()?)
    }

    /// All concepts, in store order.
    #[must_use]
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// All unit types, in store order.
    #[must_use]
    pub fn unit_types(&self) -> &[UnitType] {
        &self.unit_types
    }

    /// All variables, in store order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// All represented variables, in store order.
    #[must_use]
    pub fn represented_variables(&self) -> &[RepresentedVariable] {
        &self.represented_variables
    }

    /// All questions, in store order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All question blocks, in store order.
    #[must_use]
    pub fn question_blocks(&self) -> &[QuestionBlock] {
        &self.question_blocks
    }

    /// Looks up a concept by exact id.
    #[must_use]
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concept_index.get(&id).map(|&i| &self.concepts[i])
    }

    /// Looks up a unit type by exact id.
    #[must_use]
    pub fn unit_type(&self, id: UnitTypeId) -> Option<&UnitType> {
        self.unit_type_index.get(&id).map(|&i| &self.unit_types[i])
    }

    /// Looks up a variable by exact id.
    #[must_use]
    pub fn variable(&self, id: VariableId) -> Option<&Variable> {
        self.variable_index.get(&id).map(|&i| &self.variables[i])
    }

    /// Looks up a represented variable by exact id.
    #[must_use]
    pub fn represented_variable(&self, id: RepresentedVariableId) -> Option<&RepresentedVariable> {
        self.represented_variable_index
            .get(&id)
            .map(|&i| &self.represented_variables[i])
    }

    /// Looks up a question by exact id.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.question_index.get(&id).map(|&i| &self.questions[i])
    }

    /// Looks up a question block by exact id.
    #[must_use]
    pub fn question_block(&self, id: QuestionBlockId) -> Option<&QuestionBlock> {
        self.question_block_index
            .get(&id)
            .map(|&i| &self.question_blocks[i])
    }

    /// Number of records held for a kind.
    #[must_use]
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Concept => self.concepts.len(),
            EntityKind::UnitType => self.unit_types.len(),
            EntityKind::Variable => self.variables.len(),
            EntityKind::RepresentedVariable => self.represented_variables.len(),
            EntityKind::Question => self.questions.len(),
            EntityKind::QuestionBlock => self.question_blocks.len(),
        }
    }

    /// Returns true if a kind holds no records.
    #[must_use]
    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }
}
