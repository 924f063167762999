use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use joyeria_catalog::QueryError;
use joyeria_infra::StoreError;

/// Opaque body returned for every storage failure.
pub const INTERNAL_ERROR_BODY: &str = "Error interno del servidor";

pub fn query_error_to_response(err: QueryError) -> axum::response::Response {
    let code = match &err {
        QueryError::InvalidOrderBy(_) => "invalid_order_by",
        QueryError::InvalidPagination(_) => "invalid_pagination",
    };
    json_error(StatusCode::BAD_REQUEST, code, err.to_string())
}

/// Log the failure detail server-side and answer with the generic 500.
pub fn internal_error(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "unhandled store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
