use std::sync::RwLock;

use joyeria_catalog::{dedupe_por_nombre, Joya, JoyaFilter, OrderBy, Pagination};

use super::r#trait::{InventoryStore, StoreError};

/// In-memory inventory store.
///
/// Intended for tests/dev. Computes the same observable semantics as the
/// Postgres store: filter, then de-duplicate (lowest `id` per `nombre`),
/// then order, then slice.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    rows: RwLock<Vec<Joya>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(rows: Vec<Joya>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    fn snapshot(&self, operation: &str) -> Result<Vec<Joya>, StoreError> {
        self.rows
            .read()
            .map(|rows| rows.clone())
            .map_err(|_| StoreError::query(operation, "lock poisoned"))
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn list(
        &self,
        order: Option<&OrderBy>,
        page: &Pagination,
    ) -> Result<Vec<Joya>, StoreError> {
        let mut unique = dedupe_por_nombre(self.snapshot("list")?);

        match order {
            Some(o) => unique.sort_by(|a, b| o.compare(a, b)),
            None => unique.sort_by_key(|j| j.id),
        }

        let start = (page.offset as usize).min(unique.len());
        let end = start.saturating_add(page.limit as usize).min(unique.len());
        Ok(unique[start..end].to_vec())
    }

    async fn filter(&self, filter: &JoyaFilter) -> Result<Vec<Joya>, StoreError> {
        let matching = self
            .snapshot("filter")?
            .into_iter()
            .filter(|j| filter.matches(j))
            .collect();

        // dedupe_por_nombre already leaves the rows in (nombre, id) order.
        Ok(dedupe_por_nombre(matching))
    }
}
