use axum::{middleware::Next, response::Response};
use uuid::Uuid;

/// Log every request before dispatch and its status after completion.
///
/// Each request gets a v7 UUID so the two records (and any handler logs in
/// between) can be correlated.
pub async fn request_log(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::info!(%request_id, %method, %path, "request received");

    let response = next.run(req).await;

    tracing::info!(
        %request_id,
        %method,
        %path,
        status = %response.status(),
        "request completed"
    );

    response
}
