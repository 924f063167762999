use serde::{Deserialize, Serialize};

/// One row of the `inventario` table.
///
/// Rows are owned entirely by the external store; this service only projects
/// and aggregates them, it never creates, mutates, or deletes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joya {
    pub id: i64,
    pub nombre: String,
    pub stock: i64,
    pub precio: i64,
    pub categoria: String,
    pub metal: String,
}

/// Keep exactly one row per distinct `nombre`: the one with the lowest `id`.
///
/// Output is ordered by `(nombre, id)` ascending — the same candidate set
/// `SELECT DISTINCT ON (nombre) ... ORDER BY nombre, id ASC` produces, so the
/// in-memory store and the Postgres store agree on what survives.
pub fn dedupe_por_nombre(mut rows: Vec<Joya>) -> Vec<Joya> {
    rows.sort_by(|a, b| a.nombre.cmp(&b.nombre).then_with(|| a.id.cmp(&b.id)));
    // dedup_by keeps the first of each run, which after the sort is the
    // lowest-id row for that nombre.
    rows.dedup_by(|next, kept| next.nombre == kept.nombre);
    rows
}
