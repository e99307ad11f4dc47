//! # Request Options
//!
//! What a caller can ask of [`ApiClient::request`](super::client::ApiClient::request):
//! an HTTP method, extra headers and an optional body.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use crate::core::error::{AppError, Result};

/// Request payload.
///
/// The variant decides how the client treats the body and the
/// `Content-Type` header:
///
/// | variant     | body on the wire        | Content-Type                          |
/// |-------------|-------------------------|---------------------------------------|
/// | `Json`      | serialized once         | `application/json` unless caller set one |
/// | `Text`      | unchanged               | whatever the caller set, nothing added |
/// | `Multipart` | encoded by reqwest      | caller's value dropped, boundary set by reqwest |
#[derive(Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Text(String),
    Multipart(Form),
}

impl RequestBody {
    /// Serialize a DTO into a [`RequestBody::Json`].
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| AppError::Validation(format!("Failed to encode request body: {}", e)))
    }
}

/// Per-call configuration.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    /// Header name/value pairs; names are matched case-insensitively
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a serializable DTO as a JSON body.
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self> {
        Ok(self.body(RequestBody::json(value)?))
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.body(RequestBody::Text(text.into()))
    }

    pub fn multipart(self, form: Form) -> Self {
        self.body(RequestBody::Multipart(form))
    }

    /// True when the caller supplied a `Content-Type` header.
    pub fn has_content_type(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_lookup_ignores_case() {
        let opts = RequestOptions::post().header("content-TYPE", "text/plain");
        assert!(opts.has_content_type());
        assert!(!RequestOptions::get().header("Accept", "*/*").has_content_type());
    }

    #[test]
    fn test_json_body_from_dto() {
        let opts = RequestOptions::patch()
            .json(&shared::UpdateSettingsRequest { skip_confirm: true })
            .unwrap();
        assert_eq!(opts.method, Method::PATCH);
        match opts.body {
            Some(RequestBody::Json(v)) => assert_eq!(v, serde_json::json!({"skipConfirm": true})),
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
