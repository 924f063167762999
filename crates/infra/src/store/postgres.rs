//! Postgres-backed inventory store.
//!
//! ## De-duplication in SQL
//!
//! Both queries express the "one row per `nombre`, lowest `id` wins" rule as
//! `SELECT DISTINCT ON (nombre) ... ORDER BY nombre, id ASC`. The listing
//! wraps that candidate set in a subquery so the caller-requested ordering
//! applies after de-duplication.
//!
//! ## SQL text and parameters
//!
//! User input never reaches SQL text. Order columns and directions come from
//! the `SortField`/`SortDirection` enums, and every value (price bounds,
//! category, metal, limit, offset) is bound as a positional parameter.
//! Placeholders for the optional filter clauses are numbered in lockstep with
//! the clauses actually present, so `$n` always refers to the n-th bound
//! value.

use std::sync::Arc;

use sqlx::{PgPool, Row};
use tracing::instrument;

use joyeria_catalog::{Joya, JoyaFilter, OrderBy, Pagination};

use super::r#trait::{InventoryStore, StoreError};

/// Inventory store over a shared sqlx connection pool.
///
/// The pool is safe for concurrent use by many simultaneous requests; each
/// operation runs a single query and holds no state across calls.
#[derive(Debug, Clone)]
pub struct PgInventoryStore {
    pool: Arc<PgPool>,
}

impl PgInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait::async_trait]
impl InventoryStore for PgInventoryStore {
    #[instrument(skip(self), err)]
    async fn list(
        &self,
        order: Option<&OrderBy>,
        page: &Pagination,
    ) -> Result<Vec<Joya>, StoreError> {
        let (column, direction) = match order {
            Some(o) => (o.field.column(), o.direction.sql()),
            None => ("id", "ASC"),
        };

        let sql = format!(
            "SELECT id, nombre, stock, precio, categoria, metal \
             FROM (SELECT DISTINCT ON (nombre) id, nombre, stock, precio, categoria, metal \
                   FROM inventario ORDER BY nombre, id ASC) AS joyas_unicas \
             ORDER BY {column} {direction} LIMIT $1 OFFSET $2"
        );

        let rows = sqlx::query(&sql)
            .bind(i64::from(page.limit))
            .bind(i64::from(page.offset))
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list", e))?;

        decode_rows("list", rows)
    }

    #[instrument(skip(self), err)]
    async fn filter(&self, filter: &JoyaFilter) -> Result<Vec<Joya>, StoreError> {
        let (sql, binds) = build_filter_query(filter);

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = match bind {
                FilterBind::Int(v) => query.bind(v),
                FilterBind::Text(v) => query.bind(v),
            };
        }

        let rows = query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("filter", e))?;

        decode_rows("filter", rows)
    }
}

/// A value bound to one positional placeholder of the filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterBind {
    Int(i64),
    Text(String),
}

/// Build the filter SQL and its bind list.
///
/// Clauses and binds grow together, so the i-th clause always carries
/// placeholder `$i` and the i-th bind is its value. An empty filter produces
/// no WHERE clause at all.
pub(crate) fn build_filter_query(filter: &JoyaFilter) -> (String, Vec<FilterBind>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut binds: Vec<FilterBind> = Vec::new();

    if let Some(min) = filter.precio_min {
        binds.push(FilterBind::Int(min));
        clauses.push(format!("precio >= ${}", binds.len()));
    }
    if let Some(max) = filter.precio_max {
        binds.push(FilterBind::Int(max));
        clauses.push(format!("precio <= ${}", binds.len()));
    }
    if let Some(categoria) = &filter.categoria {
        binds.push(FilterBind::Text(categoria.clone()));
        clauses.push(format!("categoria = ${}", binds.len()));
    }
    if let Some(metal) = &filter.metal {
        binds.push(FilterBind::Text(metal.clone()));
        clauses.push(format!("metal = ${}", binds.len()));
    }

    let mut sql = String::from(
        "SELECT DISTINCT ON (nombre) id, nombre, stock, precio, categoria, metal FROM inventario",
    );
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY nombre, id ASC");

    (sql, binds)
}

fn decode_rows(
    operation: &str,
    rows: Vec<sqlx::postgres::PgRow>,
) -> Result<Vec<Joya>, StoreError> {
    let mut joyas = Vec::with_capacity(rows.len());
    for row in rows {
        let decoded = JoyaRow::from_row(&row)
            .map_err(|e| StoreError::query(operation, format!("failed to decode row: {e}")))?;
        joyas.push(decoded.into());
    }
    Ok(joyas)
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            StoreError::query(operation, format!("database error: {}", db_err.message()))
        }
        sqlx::Error::PoolClosed => StoreError::query(operation, "connection pool closed"),
        other => StoreError::query(operation, other.to_string()),
    }
}

// SQLx row type

#[derive(Debug)]
struct JoyaRow {
    id: i64,
    nombre: String,
    stock: i64,
    precio: i64,
    categoria: String,
    metal: String,
}

impl JoyaRow {
    fn from_row(row: &sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(JoyaRow {
            id: row.try_get("id")?,
            nombre: row.try_get("nombre")?,
            stock: row.try_get("stock")?,
            precio: row.try_get("precio")?,
            categoria: row.try_get("categoria")?,
            metal: row.try_get("metal")?,
        })
    }
}

impl From<JoyaRow> for Joya {
    fn from(row: JoyaRow) -> Self {
        Joya {
            id: row.id,
            nombre: row.nombre,
            stock: row.stock,
            precio: row.precio,
            categoria: row.categoria,
            metal: row.metal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        precio_min: Option<i64>,
        precio_max: Option<i64>,
        categoria: Option<&str>,
        metal: Option<&str>,
    ) -> JoyaFilter {
        JoyaFilter {
            precio_min,
            precio_max,
            categoria: categoria.map(str::to_string),
            metal: metal.map(str::to_string),
        }
    }

    #[test]
    fn empty_filter_has_no_where_clause() {
        let (sql, binds) = build_filter_query(&JoyaFilter::default());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY nombre, id ASC"));
        assert!(binds.is_empty());
    }

    #[test]
    fn full_filter_numbers_all_four_placeholders() {
        let (sql, binds) = build_filter_query(&filter(
            Some(100),
            Some(500),
            Some("Anillos"),
            Some("Oro"),
        ));

        assert!(sql.contains(
            "WHERE precio >= $1 AND precio <= $2 AND categoria = $3 AND metal = $4"
        ));
        assert_eq!(
            binds,
            vec![
                FilterBind::Int(100),
                FilterBind::Int(500),
                FilterBind::Text("Anillos".to_string()),
                FilterBind::Text("Oro".to_string()),
            ]
        );
    }

    #[test]
    fn partial_filter_renumbers_from_one() {
        // precio_min absent: the remaining clauses must start at $1, not $2.
        let (sql, binds) = build_filter_query(&filter(None, None, Some("Collares"), Some("Plata")));

        assert!(sql.contains("WHERE categoria = $1 AND metal = $2"));
        assert_eq!(
            binds,
            vec![
                FilterBind::Text("Collares".to_string()),
                FilterBind::Text("Plata".to_string()),
            ]
        );
    }

    #[test]
    fn placeholders_stay_in_lockstep_for_every_subset() {
        // All 16 subsets of the four optional criteria.
        for mask in 0u8..16 {
            let f = filter(
                (mask & 1 != 0).then_some(10),
                (mask & 2 != 0).then_some(20),
                (mask & 4 != 0).then(|| "Anillos"),
                (mask & 8 != 0).then(|| "Oro"),
            );

            let (sql, binds) = build_filter_query(&f);

            let clause_count = mask.count_ones();
            assert_eq!(binds.len() as u32, clause_count, "mask {mask:#06b}");
            assert_eq!(sql.contains("WHERE"), clause_count > 0, "mask {mask:#06b}");

            // Each placeholder $1..$n appears exactly once and none beyond.
            for i in 1..=binds.len() {
                assert_eq!(
                    sql.matches(&format!("${i}")).count(),
                    1,
                    "mask {mask:#06b} placeholder ${i}"
                );
            }
            assert!(!sql.contains(&format!("${}", binds.len() + 1)));
        }
    }

    #[test]
    fn filter_clauses_and_with_supplied_order() {
        let (sql, binds) = build_filter_query(&filter(Some(50), None, None, Some("Oro")));

        assert!(sql.contains("WHERE precio >= $1 AND metal = $2"));
        assert_eq!(
            binds,
            vec![FilterBind::Int(50), FilterBind::Text("Oro".to_string())]
        );
    }
}
