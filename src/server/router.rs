//! Router for the proxy server

use crate::server::handlers::{AppState, gerar_recibo};
use axum::Router;
use axum::routing::post;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router:
/// - POST /api/gerar-recibo - validate and proxy a receipt request
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/gerar-recibo", post(gerar_recibo))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
