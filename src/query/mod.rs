//! The typed query contract: request shapes and the dispatching executor.

mod executor;
mod request;

pub use executor::{CatalogResponse, QueryExecutor};
pub use request::{CatalogRequest, Operation, Selection};
