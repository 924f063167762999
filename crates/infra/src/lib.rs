//! Infrastructure layer: the storage boundary for the inventory table.

pub mod store;

pub use store::{InMemoryInventoryStore, InventoryStore, PgInventoryStore, StoreError};
