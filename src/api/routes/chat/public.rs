//! Public types for the chat API
use serde::{Deserialize, Serialize};

pub const NO_MESSAGE_ERROR: &str = "No message provided";

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
