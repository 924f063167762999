use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use joyeria_catalog::{OrderBy, Pagination};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `GET /joyas`: de-duplicated, ordered, paginated listing.
pub async fn listar(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListingParams>,
) -> axum::response::Response {
    let page = match Pagination::from_query(params.limits, params.page) {
        Ok(p) => p,
        Err(e) => return errors::query_error_to_response(e),
    };

    let order: Option<OrderBy> = match params.order_by.as_deref().map(str::parse) {
        Some(Ok(o)) => Some(o),
        Some(Err(e)) => return errors::query_error_to_response(e),
        None => None,
    };

    match services.store().list(order.as_ref(), &page).await {
        Ok(rows) => Json(dto::ListingResponse::from_page(rows)).into_response(),
        Err(e) => errors::internal_error(e),
    }
}

/// `GET /joyas/filtros`: de-duplicated rows matching every supplied
/// criterion. Not paginated: the whole filtered set comes back.
pub async fn filtrar(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::FilterParams>,
) -> axum::response::Response {
    match services.store().filter(&params.into()).await {
        Ok(rows) => Json(dto::FilterResponse::from_rows(rows)).into_response(),
        Err(e) => errors::internal_error(e),
    }
}
