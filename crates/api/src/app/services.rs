use std::sync::Arc;

use sqlx::PgPool;

use joyeria_infra::{InMemoryInventoryStore, InventoryStore, PgInventoryStore};

/// Shared handler state: the inventory store behind its trait.
///
/// Handlers receive the store by injection, so tests can substitute an
/// in-memory or failing implementation for the Postgres one.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
}

impl AppServices {
    pub fn with_store(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn InventoryStore> {
        &self.store
    }
}

/// Select the store from the environment.
///
/// `DATABASE_URL` set: connect a Postgres pool and serve from it.
/// Unset: warn and fall back to an empty in-memory store (dev/test).
pub async fn build_services() -> AppServices {
    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPool::connect(&database_url)
                .await
                .expect("failed to connect to Postgres");
            tracing::info!("serving inventory from Postgres");
            AppServices::with_store(Arc::new(PgInventoryStore::new(pool)))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, falling back to empty in-memory store");
            AppServices::with_store(Arc::new(InMemoryInventoryStore::new()))
        }
    }
}
