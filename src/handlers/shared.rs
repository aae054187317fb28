use serde::{Deserialize, Serialize};

/// Body for acknowledgements and rejections: `{"message": ...}` for client
/// errors and plain acknowledgements, `{"error": ...}` for server failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn error(error: &str) -> Self {
        Self {
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// Returned by every create endpoint that does not echo the stored row.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: i64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

/// A payload plus a human-readable message, flattened into one JSON object.
#[derive(Debug, Serialize)]
pub struct WithMessage<T: Serialize> {
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> WithMessage<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}
