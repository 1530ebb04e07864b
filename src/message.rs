// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub user: String,
    pub hosting: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    pub fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointList {
    pub success: bool,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// What the model is meant to be used for. Serialized as `for`.
    #[serde(rename = "for")]
    pub purpose: String,
}

impl ModelInfo {
    pub fn new(name: &str, purpose: &str) -> Self {
        Self {
            name: name.to_string(),
            purpose: purpose.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelList {
    pub models: Vec<ModelInfo>,
}

/// Fixed reply of the chat endpoint. No model is called.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatAck {
    pub success: bool,
    pub message: String,
    pub note: String,
}
