//! # gsimql - Typed queries over a survey instrument metadata catalog
//!
//! gsimql exposes a typed query interface over a small interlinked catalog of
//! survey instrument metadata: concepts, unit types, variables, represented
//! variables, questions, and question blocks. Clients fetch entities by id or
//! in bulk, and resolve the relationships between them (which variable a
//! represented variable takes meaning from, which questions belong to a
//! block, and so on).
//!
//! ## Core Concepts
//!
//! - **Catalog**: the read-only entity store, populated once from the embedded
//!   dataset and shared for the life of the process
//! - **Resolver**: follows foreign-key references between catalog entities;
//!   absence is structural (`None` / empty), never an error
//! - **Operation**: one of the twelve root query operations (six `all*`
//!   collection reads, six by-id lookups)
//! - **Selection**: the set of relationship fields a caller wants resolved,
//!   recursively; unselected relationships are never touched
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gsimql::{Catalog, CatalogRequest, Operation, QueryExecutor, Selection};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::embedded()?);
//! let executor = QueryExecutor::new(catalog);
//!
//! // Question 9, with its represented variable and underlying variable.
//! let select = Selection::new()
//!     .field("representedVariable", Selection::new().field("variable", Selection::new()));
//! let request = CatalogRequest::new(Operation::Question { id: 9, select });
//! let response = executor.execute(&request)?;
//! println!("{}", response.data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod concept;
pub mod dataset;
pub mod error;
pub mod kind;
pub mod query;
pub mod question;
pub mod question_block;
pub mod represented_variable;
pub mod resolver;
pub mod unit_type;
pub mod variable;

// Re-export primary types at crate root for convenience
pub use catalog::Catalog;
pub use concept::{Concept, ConceptId};
pub use dataset::Dataset;
pub use error::{CatalogError, CatalogResult, LoadError, QueryError};
pub use kind::EntityKind;
pub use query::{CatalogRequest, CatalogResponse, Operation, QueryExecutor, Selection};
pub use question::{Question, QuestionId};
pub use question_block::{QuestionBlock, QuestionBlockId};
pub use represented_variable::{RepresentedVariable, RepresentedVariableId};
pub use resolver::Resolver;
pub use unit_type::{UnitType, UnitTypeId};
pub use variable::{Variable, VariableId};
