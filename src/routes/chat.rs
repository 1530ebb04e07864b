use axum::{Json, extract::State};
use tracing::debug;

use crate::{message::ChatAck, state::SharedState};

/// Acknowledges any chat request. The body is never read, so empty or
/// malformed payloads get the same answer as valid ones.
pub async fn chat_handler(State(state): State<SharedState>) -> Json<ChatAck> {
    debug!("chat request acknowledged without a model backend");
    Json(state.chat_ack.clone())
}
