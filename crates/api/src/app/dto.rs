use serde::{Deserialize, Serialize};

use joyeria_catalog::{Joya, JoyaFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /joyas`.
///
/// Typed fields make axum reject non-numeric `limits`/`page` with a 400
/// instead of coercing them.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub limits: Option<u32>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
}

/// Query string of `GET /joyas/filtros`.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub precio_min: Option<i64>,
    pub precio_max: Option<i64>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

impl From<FilterParams> for JoyaFilter {
    fn from(params: FilterParams) -> Self {
        JoyaFilter {
            precio_min: params.precio_min,
            precio_max: params.precio_max,
            categoria: params.categoria,
            metal: params.metal,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// One listing entry: the name plus a link to the detail resource, not the
/// detail payload itself.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JoyaLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    #[serde(rename = "TotalJoyas")]
    pub total_joyas: usize,
    #[serde(rename = "stockTotal")]
    pub stock_total: i64,
    pub results: Vec<JoyaLink>,
}

impl ListingResponse {
    /// Shape one page of rows.
    ///
    /// `stockTotal` sums the stock of exactly these rows, not the whole
    /// de-duplicated inventory.
    pub fn from_page(rows: Vec<Joya>) -> Self {
        Self {
            total_joyas: rows.len(),
            stock_total: rows.iter().map(|j| j.stock).sum(),
            results: rows
                .into_iter()
                .map(|j| JoyaLink {
                    href: format!("/joyas/joya/{}", j.id),
                    name: j.nombre,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    #[serde(rename = "TotalJoyasFiltradas")]
    pub total_joyas_filtradas: usize,
    #[serde(rename = "joyasFiltradas")]
    pub joyas_filtradas: Vec<Joya>,
}

impl FilterResponse {
    pub fn from_rows(rows: Vec<Joya>) -> Self {
        Self {
            total_joyas_filtradas: rows.len(),
            joyas_filtradas: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joya(id: i64, nombre: &str, stock: i64) -> Joya {
        Joya {
            id,
            nombre: nombre.to_string(),
            stock,
            precio: 100,
            categoria: "Anillos".to_string(),
            metal: "Oro".to_string(),
        }
    }

    #[test]
    fn listing_sums_stock_over_the_page_only() {
        let response =
            ListingResponse::from_page(vec![joya(1, "Anillo A", 3), joya(3, "Collar B", 2)]);

        assert_eq!(response.total_joyas, 2);
        assert_eq!(response.stock_total, 5);
        assert_eq!(
            response.results,
            vec![
                JoyaLink {
                    name: "Anillo A".to_string(),
                    href: "/joyas/joya/1".to_string(),
                },
                JoyaLink {
                    name: "Collar B".to_string(),
                    href: "/joyas/joya/3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn listing_response_uses_the_original_key_names() {
        let response = ListingResponse::from_page(vec![joya(1, "Anillo A", 3)]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["TotalJoyas"], 1);
        assert_eq!(json["stockTotal"], 3);
        assert_eq!(json["results"][0]["name"], "Anillo A");
        assert_eq!(json["results"][0]["href"], "/joyas/joya/1");
    }

    #[test]
    fn filter_response_carries_full_rows() {
        let response = FilterResponse::from_rows(vec![joya(7, "Pulsera", 4)]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["TotalJoyasFiltradas"], 1);
        assert_eq!(json["joyasFiltradas"][0]["id"], 7);
        assert_eq!(json["joyasFiltradas"][0]["nombre"], "Pulsera");
        assert_eq!(json["joyasFiltradas"][0]["stock"], 4);
        assert_eq!(json["joyasFiltradas"][0]["precio"], 100);
        assert_eq!(json["joyasFiltradas"][0]["categoria"], "Anillos");
        assert_eq!(json["joyasFiltradas"][0]["metal"], "Oro");
    }
}
