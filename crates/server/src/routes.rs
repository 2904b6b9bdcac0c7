pub mod auth;
pub mod reviews;
pub mod services;

use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;

pub use auth::ServerState;

async fn liveness() -> &'static str {
    "carryYou running on server"
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. The bearer guard is installed as a
/// request-level layer and decides internally which routes it enforces.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/limitedServices", get(services::list_recent))
        .route("/services", get(services::list).post(services::create))
        .route("/services/:id", get(services::get_by_id))
        .route("/reviews", get(reviews::list).post(reviews::create))
        .route("/reviews/:id", get(reviews::list_for_service))
        .route(
            "/review/:id",
            get(reviews::get_by_id)
                .put(reviews::update_message)
                .delete(reviews::delete_by_id),
        )
        .route("/jwt", post(auth::issue_token))
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
