//! Jewelry inventory domain: the `inventario` row, the recognized query
//! parameter shapes, and the de-duplication rule.
//!
//! This crate contains pure domain logic (no IO, no HTTP, no storage).

pub mod joya;
pub mod query;

pub use joya::{dedupe_por_nombre, Joya};
pub use query::{
    JoyaFilter, OrderBy, Pagination, QueryError, SortDirection, SortField, DEFAULT_LIMIT,
    MAX_LIMIT,
};
