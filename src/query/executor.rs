//! Query dispatch and result-tree composition.
//!
//! The executor maps each root operation to the matching typed catalog
//! accessor, serializes the located record(s), and resolves the selected
//! relationship fields recursively. A missing root id produces a
//! well-formed response with a null payload; a dangling reference inside a
//! nested field yields null/empty at that position without disturbing
//! sibling fields.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::concept::{Concept, ConceptId};
use crate::error::{CatalogError, CatalogResult, QueryError};
use crate::kind::EntityKind;
use crate::query::request::{CatalogRequest, Operation, Selection};
use crate::question::{Question, QuestionId};
use crate::question_block::{QuestionBlock, QuestionBlockId};
use crate::represented_variable::{RepresentedVariable, RepresentedVariableId};
use crate::resolver::Resolver;
use crate::unit_type::{UnitType, UnitTypeId};
use crate::variable::{Variable, VariableId};

/// The response to a [`CatalogRequest`].
///
/// Always well-formed: a lookup that found nothing carries `data: null`
/// rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The request id this response answers.
    pub request_id: Uuid,

    /// The composed result tree.
    pub data: Value,
}

/// Executes catalog query requests.
///
/// Holds the catalog behind an `Arc`; clones share it, and since the
/// catalog is immutable any number of executors may run concurrently.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    catalog: Arc<Catalog>,
}

impl QueryExecutor {
    /// Creates an executor over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this executor reads from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes a request, composing the result tree the selection asks for.
    ///
    /// # Errors
    /// Returns [`QueryError::UnknownField`] (wrapped) when a selection names
    /// a field that is not a relationship of the entity kind it is applied
    /// to. Absence of data is never an error.
    pub fn execute(&self, request: &CatalogRequest) -> CatalogResult<CatalogResponse> {
        debug!(
            op = request.operation.name(),
            request_id = %request.request_id,
            "executing catalog query"
        );

        let resolver = Resolver::new(&self.catalog);
        let projector = Projector { resolver };

        let data = match &request.operation {
            Operation::AllConcepts { select } => {
                collect(self.catalog.concepts(), |c| projector.concept(c, select))?
            }
            Operation::AllUnitTypes { select } => {
                collect(self.catalog.unit_types(), |u| projector.unit_type(u, select))?
            }
            Operation::AllVariables { select } => {
                collect(self.catalog.variables(), |v| projector.variable(v, select))?
            }
            Operation::AllRepresentedVariables { select } => {
                collect(self.catalog.represented_variables(), |rv| {
                    projector.represented_variable(rv, select)
                })?
            }
            Operation::AllQuestions { select } => {
                collect(self.catalog.questions(), |q| projector.question(q, select))?
            }
            Operation::AllQuestionBlocks { select } => {
                collect(self.catalog.question_blocks(), |b| {
                    projector.question_block(b, select)
                })?
            }
            Operation::Concept { id, select } => opt(
                self.catalog.concept(ConceptId::new(*id)),
                |c| projector.concept(c, select),
            )?,
            Operation::UnitType { id, select } => opt(
                self.catalog.unit_type(UnitTypeId::new(*id)),
                |u| projector.unit_type(u, select),
            )?,
            Operation::Variable { id, select } => opt(
                self.catalog.variable(VariableId::new(*id)),
                |v| projector.variable(v, select),
            )?,
            Operation::RepresentedVariable { id, select } => opt(
                self.catalog
                    .represented_variable(RepresentedVariableId::new(*id)),
                |rv| projector.represented_variable(rv, select),
            )?,
            Operation::Question { id, select } => opt(
                self.catalog.question(QuestionId::new(*id)),
                |q| projector.question(q, select),
            )?,
            Operation::QuestionBlock { id, select } => opt(
                self.catalog.question_block(QuestionBlockId::new(*id)),
                |b| projector.question_block(b, select),
            )?,
        };

        Ok(CatalogResponse {
            request_id: request.request_id,
            data,
        })
    }
}

fn collect<T>(records: &[T], mut project: impl FnMut(&T) -> CatalogResult<Value>) -> CatalogResult<Value> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        out.push(project(record)?);
    }
    Ok(Value::Array(out))
}

fn opt<T>(record: Option<&T>, project: impl FnOnce(&T) -> CatalogResult<Value>) -> CatalogResult<Value> {
    match record {
        Some(record) => project(record),
        None => Ok(Value::Null),
    }
}

fn unknown_field(kind: EntityKind, field: &str) -> CatalogError {
    QueryError::UnknownField {
        kind,
        field: field.to_string(),
    }
    .into()
}

fn base_object<T: Serialize>(entity: &T) -> CatalogResult<Map<String, Value>> {
    let value = serde_json::to_value(entity)
        .map_err(|e| CatalogError::internal(format!("entity serialization failed: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogError::internal(
            "entity did not serialize to an object",
        )),
    }
}

/// Projects entities into JSON trees, resolving selected relationships.
#[derive(Clone, Copy)]
struct Projector<'a> {
    resolver: Resolver<'a>,
}

impl Projector<'_> {
    fn concept(&self, concept: &Concept, select: &Selection) -> CatalogResult<Value> {
        let mut obj = base_object(concept)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "isComparableTo" => self.concepts(self.resolver.comparable_concepts(concept), sub)?,
                "isQualificationOf" => {
                    self.concepts(self.resolver.qualified_concepts(concept), sub)?
                }
                other => return Err(unknown_field(EntityKind::Concept, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn unit_type(&self, unit_type: &UnitType, select: &Selection) -> CatalogResult<Value> {
        let mut obj = base_object(unit_type)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "references" => {
                    self.unit_types(self.resolver.referenced_unit_types(unit_type), sub)?
                }
                "isBasedOn" => self.concepts(self.resolver.base_concepts(unit_type), sub)?,
                other => return Err(unknown_field(EntityKind::UnitType, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn variable(&self, variable: &Variable, select: &Selection) -> CatalogResult<Value> {
        let mut obj = base_object(variable)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "isComparableTo" => {
                    self.variables(self.resolver.comparable_variables(variable), sub)?
                }
                // The relationship shares its name with the stored scalar;
                // selecting it replaces the raw id with the resolved record.
                "unitTypeId" => match self.resolver.unit_type_of(variable) {
                    Some(unit_type) => self.unit_type(unit_type, sub)?,
                    None => Value::Null,
                },
                "measures" => match self.resolver.measured_concept(variable) {
                    Some(concept) => self.concept(concept, sub)?,
                    None => Value::Null,
                },
                "representedVariable" => self.represented_variables(
                    self.resolver.represented_variables_of(variable),
                    sub,
                )?,
                other => return Err(unknown_field(EntityKind::Variable, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn represented_variable(
        &self,
        rv: &RepresentedVariable,
        select: &Selection,
    ) -> CatalogResult<Value> {
        let mut obj = base_object(rv)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "variable" => match self.resolver.underlying_variable(rv) {
                    Some(variable) => self.variable(variable, sub)?,
                    None => Value::Null,
                },
                other => return Err(unknown_field(EntityKind::RepresentedVariable, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn question(&self, question: &Question, select: &Selection) -> CatalogResult<Value> {
        let mut obj = base_object(question)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "references" => self.questions(self.resolver.referenced_questions(question), sub)?,
                "representedVariable" => match self.resolver.represented_variable_of(question) {
                    Some(rv) => self.represented_variable(rv, sub)?,
                    None => Value::Null,
                },
                other => return Err(unknown_field(EntityKind::Question, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn question_block(&self, block: &QuestionBlock, select: &Selection) -> CatalogResult<Value> {
        let mut obj = base_object(block)?;
        for (field, sub) in select.iter() {
            let resolved = match field.as_str() {
                "questions" => self.questions(self.resolver.block_questions(block), sub)?,
                other => return Err(unknown_field(EntityKind::QuestionBlock, other)),
            };
            obj.insert(field.clone(), resolved);
        }
        Ok(Value::Object(obj))
    }

    fn concepts(&self, records: Vec<&Concept>, select: &Selection) -> CatalogResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.concept(record, select)?);
        }
        Ok(Value::Array(out))
    }

    fn unit_types(&self, records: Vec<&UnitType>, select: &Selection) -> CatalogResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.unit_type(record, select)?);
        }
        Ok(Value::Array(out))
    }

    fn variables(&self, records: Vec<&Variable>, select: &Selection) -> CatalogResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.variable(record, select)?);
        }
        Ok(Value::Array(out))
    }

    fn represented_variables(
        &self,
        records: Vec<&RepresentedVariable>,
        select: &Selection,
    ) -> CatalogResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.represented_variable(record, select)?);
        }
        Ok(Value::Array(out))
    }

    fn questions(&self, records: Vec<&Question>, select: &Selection) -> CatalogResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.question(record, select)?);
        }
        Ok(Value::Array(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> QueryExecutor {
        QueryExecutor::new(Arc::new(Catalog::embedded().unwrap()))
    }

    #[test]
    fn test_all_concepts_without_selection() {
        let executor = executor();
        let request = CatalogRequest::new(Operation::AllConcepts {
            select: Selection::new(),
        });
        let response = executor.execute(&request).unwrap();

        let items = response.data.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["name"], "Person");
        // No relationship selected, so none resolved.
        assert!(items[1].get("isComparableTo").is_none());
    }

    #[test]
    fn test_missing_id_yields_null_data() {
        let executor = executor();
        let request = CatalogRequest::new(Operation::Variable {
            id: 99,
            select: Selection::new(),
        });
        let response = executor.execute(&request).unwrap();
        assert!(response.data.is_null());
        assert_eq!(response.request_id, request.request_id);
    }

    #[test]
    fn test_selected_relationship_replaces_raw_id() {
        let executor = executor();
        let request = CatalogRequest::new(Operation::Variable {
            id: 1,
            select: Selection::new().field("unitTypeId", Selection::new()),
        });
        let response = executor.execute(&request).unwrap();
        assert_eq!(response.data["unitTypeId"]["name"], "Person");
    }

    #[test]
    fn test_unknown_selection_field_is_rejected() {
        let executor = executor();
        let request = CatalogRequest::new(Operation::Concept {
            id: 1,
            select: Selection::new().field("questions", Selection::new()),
        });
        let err = executor.execute(&request).unwrap_err();
        assert!(err.is_query());
    }

    #[test]
    fn test_dangling_nested_reference_yields_empty_without_aborting_siblings() {
        let executor = executor();
        // Unit type 3 (Business) has a dangling isBasedOn; selecting both
        // relationships must still resolve references alongside it.
        let request = CatalogRequest::new(Operation::UnitType {
            id: 3,
            select: Selection::new()
                .field("isBasedOn", Selection::new())
                .field("references", Selection::new()),
        });
        let response = executor.execute(&request).unwrap();
        assert_eq!(response.data["isBasedOn"], serde_json::json!([]));
        assert_eq!(response.data["references"], serde_json::json!([]));
        assert_eq!(response.data["name"], "Business");
    }

    #[test]
    fn test_executor_clones_share_catalog() {
        let executor = executor();
        let clone = executor.clone();
        let request = CatalogRequest::new(Operation::AllQuestions {
            select: Selection::new(),
        });
        let a = executor.execute(&request).unwrap();
        let b = clone.execute(&request).unwrap();
        assert_eq!(a.data, b.data);
    }
}
