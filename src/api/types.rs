use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SermonPrepRequest {
    #[serde(default)]
    pub passage: Option<String>,
    /// Echoed back as sent; only the string `"quick"` changes the prompt.
    #[serde(default)]
    pub mode: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SermonPrepResponse {
    pub output: String,
    pub passage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
