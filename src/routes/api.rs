use axum::{Json, extract::State};

use crate::{
    message::{EndpointList, HealthStatus, ModelList},
    state::SharedState,
};

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthStatus> {
    Json(state.health.clone())
}

// Lists the routes this server answers, not a live route table.
pub async fn test_handler(State(state): State<SharedState>) -> Json<EndpointList> {
    Json(state.endpoints.clone())
}

pub async fn models_handler(State(state): State<SharedState>) -> Json<ModelList> {
    Json(state.models.clone())
}
