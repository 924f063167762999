use axum::{routing::get, Router};

pub mod joyas;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/joyas", get(joyas::listar))
        .route("/joyas/filtros", get(joyas::filtrar))
}
