// src/routes/mod.rs
pub mod api;
pub mod chat;
pub mod home;

use crate::state::SharedState;
use api::{health_handler, models_handler, test_handler};
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use home::landing_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/test", get(test_handler))
        .route("/models", get(models_handler))
        .route("/chat", post(chat_handler));

    Router::new()
        .route("/", get(landing_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::very_permissive())
}
