//! Recognized query parameter shapes for the two endpoints.
//!
//! Order columns come from an enumerated allow-list mapped to safe column
//! references; unrecognized values are rejected with a typed error, never
//! silently defaulted.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::joya::Joya;

/// Page size used when `limits` is not supplied.
pub const DEFAULT_LIMIT: u32 = 6;

/// Hard cap on `limits`; larger requests are clamped, not rejected.
pub const MAX_LIMIT: u32 = 100;

/// Validation error for request-supplied query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid order_by: {0}")]
    InvalidOrderBy(String),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
}

/// Columns of `inventario` a listing may be ordered by.
///
/// Only these enum values ever reach an `ORDER BY` clause, which keeps user
/// input out of SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Nombre,
    Stock,
    Precio,
    Categoria,
    Metal,
}

impl SortField {
    /// Safe column reference for SQL `ORDER BY`.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Nombre => "nombre",
            SortField::Stock => "stock",
            SortField::Precio => "precio",
            SortField::Categoria => "categoria",
            SortField::Metal => "metal",
        }
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "nombre" => Ok(SortField::Nombre),
            "stock" => Ok(SortField::Stock),
            "precio" => Ok(SortField::Precio),
            "categoria" => Ok(SortField::Categoria),
            "metal" => Ok(SortField::Metal),
            other => Err(QueryError::InvalidOrderBy(format!(
                "unknown field '{other}'; expected one of: id, nombre, stock, precio, categoria, metal"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(QueryError::InvalidOrderBy(format!(
                "unknown direction '{other}'; expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// Requested ordering, parsed from the `<field>_<direction>` query form
/// (e.g. `precio_desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: SortField,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Order two rows under this ordering (ties compare equal).
    pub fn compare(&self, a: &Joya, b: &Joya) -> Ordering {
        let ord = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Nombre => a.nombre.cmp(&b.nombre),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::Precio => a.precio.cmp(&b.precio),
            SortField::Categoria => a.categoria.cmp(&b.categoria),
            SortField::Metal => a.metal.cmp(&b.metal),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl FromStr for OrderBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.rsplit_once('_').ok_or_else(|| {
            QueryError::InvalidOrderBy(format!(
                "expected '<field>_<direction>' (e.g. 'precio_desc'), got '{s}'"
            ))
        })?;

        Ok(OrderBy {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// LIMIT/OFFSET window computed from the `limits`/`page` query values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Build from the optional `limits` / `page` query values.
    ///
    /// `limits` defaults to 6 and is clamped to [`MAX_LIMIT`]; `page`
    /// defaults to 1. Zero for either is rejected.
    pub fn from_query(limits: Option<u32>, page: Option<u32>) -> Result<Self, QueryError> {
        let limit = limits.unwrap_or(DEFAULT_LIMIT);
        let page = page.unwrap_or(1);

        if limit == 0 {
            return Err(QueryError::InvalidPagination(
                "limits must be at least 1".to_string(),
            ));
        }
        if page == 0 {
            return Err(QueryError::InvalidPagination(
                "page must be at least 1".to_string(),
            ));
        }

        let limit = limit.min(MAX_LIMIT);
        let offset = u32::try_from(u64::from(page - 1) * u64::from(limit)).unwrap_or(u32::MAX);

        Ok(Self { limit, offset })
    }
}

/// Filter criteria for the multi-criteria search.
///
/// Absent fields impose no constraint; present fields AND together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoyaFilter {
    pub precio_min: Option<i64>,
    pub precio_max: Option<i64>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

impl JoyaFilter {
    /// True when no criterion is set (the query carries no WHERE clause).
    pub fn is_empty(&self) -> bool {
        self.precio_min.is_none()
            && self.precio_max.is_none()
            && self.categoria.is_none()
            && self.metal.is_none()
    }

    /// Whether `joya` satisfies every supplied criterion. Price bounds are
    /// inclusive; `categoria`/`metal` match exactly.
    pub fn matches(&self, joya: &Joya) -> bool {
        self.precio_min.is_none_or(|min| joya.precio >= min)
            && self.precio_max.is_none_or(|max| joya.precio <= max)
            && self.categoria.as_deref().is_none_or(|c| joya.categoria == c)
            && self.metal.as_deref().is_none_or(|m| joya.metal == m)
    }
}
