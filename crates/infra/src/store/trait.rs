use std::sync::Arc;

use thiserror::Error;

use joyeria_catalog::{Joya, JoyaFilter, OrderBy, Pagination};

/// Storage operation error.
///
/// The service distinguishes only one kind of storage failure: the query did
/// not complete. Connectivity problems, malformed SQL, and driver errors all
/// collapse into it; the HTTP layer answers every one with the same opaque
/// 500. Client-input validation errors never reach this type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed in {operation}: {message}")]
    Query { operation: String, message: String },
}

impl StoreError {
    pub fn query(operation: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Query {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Read-only view over the `inventario` table.
///
/// Both operations apply the de-duplication rule: at most one row per
/// distinct `nombre`, the one with the lowest `id` among the rows the query
/// considered. For `list` that is the whole table; for `filter` it is the
/// rows matching the criteria (the filter applies before de-duplication).
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// De-duplicated listing, ordered by the requested column (default
    /// `id ASC`), sliced to the requested page.
    async fn list(
        &self,
        order: Option<&OrderBy>,
        page: &Pagination,
    ) -> Result<Vec<Joya>, StoreError>;

    /// De-duplicated rows satisfying every supplied criterion, ordered by
    /// `nombre, id`. Not paginated: an empty filter returns the full
    /// de-duplicated inventory.
    async fn filter(&self, filter: &JoyaFilter) -> Result<Vec<Joya>, StoreError>;
}

#[async_trait::async_trait]
impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    async fn list(
        &self,
        order: Option<&OrderBy>,
        page: &Pagination,
    ) -> Result<Vec<Joya>, StoreError> {
        (**self).list(order, page).await
    }

    async fn filter(&self, filter: &JoyaFilter) -> Result<Vec<Joya>, StoreError> {
        (**self).filter(filter).await
    }
}
