//! Read-only storage boundary over the `inventario` table.
//!
//! The trait makes no storage assumptions: the Postgres implementation backs
//! production, the in-memory one backs tests and dev, and both agree on the
//! observable semantics (de-duplication, ordering, slicing).

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use postgres::PgInventoryStore;
pub use r#trait::{InventoryStore, StoreError};
