//! Relationship resolution between catalog entities.
//!
//! Each method follows one foreign-key-style reference from a source record
//! to its target record(s) by re-querying the catalog. Resolution is purely
//! functional over the catalog snapshot: nothing is copied, cached, or
//! mutated, and a dangling reference yields absence (`None` or a shorter
//! list), never an error. Absence at one position does not affect sibling
//! resolution.

use crate::catalog::Catalog;
use crate::concept::Concept;
use crate::question::Question;
use crate::question_block::QuestionBlock;
use crate::represented_variable::RepresentedVariable;
use crate::unit_type::UnitType;
use crate::variable::Variable;

/// Resolves relationships over a borrowed catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Concepts the given concept is comparable to.
    #[must_use]
    pub fn comparable_concepts(&self, concept: &Concept) -> Vec<&'a Concept> {
        concept
            .is_comparable_to
            .iter()
            .filter_map(|&id| self.catalog.concept(id))
            .collect()
    }

    /// Concepts the given concept is a qualification of.
    #[must_use]
    pub fn qualified_concepts(&self, concept: &Concept) -> Vec<&'a Concept> {
        concept
            .is_qualification_of
            .iter()
            .filter_map(|&id| self.catalog.concept(id))
            .collect()
    }

    /// Unit types the given unit type references.
    #[must_use]
    pub fn referenced_unit_types(&self, unit_type: &UnitType) -> Vec<&'a UnitType> {
        unit_type
            .references
            .iter()
            .filter_map(|&id| self.catalog.unit_type(id))
            .collect()
    }

    /// Concepts the given unit type is based on.
    ///
    /// A required reference set in the schema, but the shipped data carries
    /// dangling entries (Business and Social Episode point at a concept that
    /// does not exist); those resolve to absence.
    #[must_use]
    pub fn base_concepts(&self, unit_type: &UnitType) -> Vec<&'a Concept> {
        unit_type
            .is_based_on
            .iter()
            .filter_map(|&id| self.catalog.concept(id))
            .collect()
    }

    /// Variables the given variable is comparable to.
    #[must_use]
    pub fn comparable_variables(&self, variable: &Variable) -> Vec<&'a Variable> {
        variable
            .is_comparable_to
            .iter()
            .filter_map(|&id| self.catalog.variable(id))
            .collect()
    }

    /// The unit type the given variable is collected about.
    #[must_use]
    pub fn unit_type_of(&self, variable: &Variable) -> Option<&'a UnitType> {
        self.catalog.unit_type(variable.unit_type_id)
    }

    /// The concept the given variable measures.
    #[must_use]
    pub fn measured_concept(&self, variable: &Variable) -> Option<&'a Concept> {
        self.catalog.concept(variable.measures)
    }

    /// Every represented variable that takes meaning from the given variable.
    ///
    /// The match compares each record's stored reference against the
    /// variable's id value, not against the record's own id.
    #[must_use]
    pub fn represented_variables_of(&self, variable: &Variable) -> Vec<&'a RepresentedVariable> {
        self.catalog
            .represented_variables()
            .iter()
            .filter(|rv| rv.takes_meaning_from == variable.id)
            .collect()
    }

    /// The variable the given represented variable takes meaning from.
    ///
    /// Required in the schema, but a dangling reference still resolves to
    /// `None` rather than raising.
    #[must_use]
    pub fn underlying_variable(&self, rv: &RepresentedVariable) -> Option<&'a Variable> {
        self.catalog.variable(rv.takes_meaning_from)
    }

    /// Questions the given question references.
    #[must_use]
    pub fn referenced_questions(&self, question: &Question) -> Vec<&'a Question> {
        question
            .references
            .iter()
            .filter_map(|&id| self.catalog.question(id))
            .collect()
    }

    /// The represented variable the given question collects.
    #[must_use]
    pub fn represented_variable_of(&self, question: &Question) -> Option<&'a RepresentedVariable> {
        self.catalog.represented_variable(question.represented_variable_id)
    }

    /// The questions of a block, in the block's stored order.
    ///
    /// Ids with no matching question are omitted; the resolved list keeps
    /// the relative order of the ids that do resolve.
    #[must_use]
    pub fn block_questions(&self, block: &QuestionBlock) -> Vec<&'a Question> {
        block
            .questions
            .iter()
            .filter_map(|&id| self.catalog.question(id))
            .collect()
    }
}
