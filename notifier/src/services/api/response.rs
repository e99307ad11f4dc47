//! # Normalized Responses

use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Result};

/// Successful response after normalization.
///
/// - `Empty`: status 204, or a body of zero length
/// - `Json`: body parsed because the content type contained `application/json`
/// - `Text`: any other content type, body returned verbatim
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty)
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Collapse into a single JSON value: `Empty` is `null`, `Text` a JSON string.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            ApiResponse::Empty => serde_json::Value::Null,
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => serde_json::Value::String(text),
        }
    }

    /// Decode a JSON payload into `T`. `what` names the payload in errors.
    pub fn decode<T: DeserializeOwned>(self, what: &str) -> Result<T> {
        match self {
            ApiResponse::Json(value) => serde_json::from_value(value)
                .map_err(|e| AppError::UnexpectedResponse(format!("{}: {}", what, e))),
            ApiResponse::Empty => Err(AppError::UnexpectedResponse(format!(
                "{}: empty response",
                what
            ))),
            ApiResponse::Text(_) => Err(AppError::UnexpectedResponse(format!(
                "{}: expected JSON, got text",
                what
            ))),
        }
    }

    /// Decode a list payload. Anything that is not a JSON array yields an empty list.
    pub fn decode_list<T: DeserializeOwned>(self, what: &str) -> Result<Vec<T>> {
        match self {
            ApiResponse::Json(value @ serde_json::Value::Array(_)) => serde_json::from_value(value)
                .map_err(|e| AppError::UnexpectedResponse(format!("{}: {}", what, e))),
            other => {
                tracing::debug!(what, response = ?other, "Non-array list payload treated as empty");
                Ok(Vec::new())
            }
        }
    }
}
