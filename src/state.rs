// src/state.rs
use std::sync::Arc;

use crate::message::{ChatAck, EndpointInfo, EndpointList, HealthStatus, ModelInfo, ModelList};

pub type SharedState = Arc<AppState>;

/// Every response payload, built once at startup and only read afterwards.
#[derive(Debug)]
pub struct AppState {
    pub health: HealthStatus,
    pub endpoints: EndpointList,
    pub models: ModelList,
    pub chat_ack: ChatAck,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            health: HealthStatus {
                status: "online".to_string(),
                service: "Sofi AI".to_string(),
                version: "1.0".to_string(),
                user: "Edward".to_string(),
                hosting: "Render.com".to_string(),
                message: "¡Backend funcionando correctamente!".to_string(),
            },
            endpoints: EndpointList {
                success: true,
                endpoints: vec![
                    EndpointInfo::new("GET", "/", "Página principal"),
                    EndpointInfo::new("GET", "/health", "Estado del servidor"),
                    EndpointInfo::new("GET", "/api/test", "Esta página"),
                    EndpointInfo::new("GET", "/api/models", "Lista de modelos"),
                    EndpointInfo::new("POST", "/api/chat", "Chat con IA"),
                ],
            },
            models: ModelList {
                models: vec![
                    ModelInfo::new("Qwen Coder", "Programación"),
                    ModelInfo::new("DeepSeek", "Razonamiento"),
                    ModelInfo::new("Amazon Nova", "Conversación"),
                    ModelInfo::new("Mistral", "Respuestas rápidas"),
                    ModelInfo::new("Gemini", "Creatividad"),
                ],
            },
            chat_ack: ChatAck {
                success: true,
                message: "Endpoint de chat listo".to_string(),
                note: "Configura tus API Keys en Render Dashboard".to_string(),
            },
        }
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }
}
