//! # API Client
//!
//! The single entry point for backend communication. Every endpoint wrapper
//! in [`crate::services::api`] goes through [`ApiClient::request`], which
//! attaches the session header, prepares the body and normalizes the
//! response.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Instant;

use super::request::{RequestBody, RequestOptions};
use super::response::ApiResponse;
use crate::config::Config;
use crate::core::error::{AppError, Result};
use crate::core::session::Session;

/// Header carrying the session identifier.
pub const USER_ID_HEADER: &str = "X-Mock-User-Id";

/// HTTP client bound to one backend and, optionally, one session.
///
/// Cloning is cheap: the underlying reqwest client is reference-counted and
/// shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    /// Create a client for `config.api_url` acting as `session`.
    pub fn new(config: &Config, session: Option<Session>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Client with default settings against `base_url`, mostly for tests.
    pub fn with_base_url(base_url: impl Into<String>, session: Option<Session>) -> Self {
        let config = Config {
            api_url: base_url.into(),
            ..Default::default()
        };
        Self::new(&config, session)
    }

    /// Same backend and connection pool, different identity.
    pub fn with_session(&self, session: Option<Session>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform one request and normalize the outcome.
    ///
    /// - non-2xx: [`AppError::Http`] with the body text, or `HTTP <status>` if empty
    /// - 204 or empty body: [`ApiResponse::Empty`]
    /// - `application/json`: [`ApiResponse::Json`], or [`AppError::MalformedJson`]
    /// - anything else: [`ApiResponse::Text`]
    ///
    /// No retries, no caching.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let request_id = uuid::Uuid::new_v4();
        let method = options.method.clone();
        let url = self.url(path);
        let start = Instant::now();

        let builder = self.prepare(&url, options)?;

        tracing::debug!(%request_id, %method, path, "Sending request");

        let response = builder.send().await.map_err(|e| {
            tracing::error!(%request_id, %method, path, error = %e, "Request network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(
                %request_id,
                %method,
                path,
                status = status.as_u16(),
                duration_ms,
                "Request failed"
            );
            return Err(if text.is_empty() {
                AppError::http_status(status.as_u16())
            } else {
                AppError::Http {
                    status: status.as_u16(),
                    message: text,
                }
            });
        }

        tracing::debug!(
            %request_id,
            %method,
            path,
            status = status.as_u16(),
            duration_ms,
            "Request completed"
        );

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse::Empty);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            return Ok(ApiResponse::Empty);
        }

        if content_type.contains("application/json") {
            return serde_json::from_str(&text).map(ApiResponse::Json).map_err(|e| {
                tracing::error!(%request_id, path, error = %e, "JSON response did not parse");
                AppError::MalformedJson(format!("{} {}: {}", method, path, e))
            });
        }

        Ok(ApiResponse::Text(text))
    }

    /// Build the outgoing request: session header, caller headers, body.
    fn prepare(&self, url: &str, options: RequestOptions) -> Result<reqwest::RequestBuilder> {
        let caller_content_type = options.has_content_type();
        let RequestOptions {
            method,
            headers: extra,
            body,
        } = options;

        let mut headers = HeaderMap::new();
        if let Some(session) = &self.session {
            headers.insert(
                HeaderName::from_static("x-mock-user-id"),
                header_value(USER_ID_HEADER, &session.user_id)?,
            );
        }
        for (name, value) in &extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::Validation(format!("Invalid header name: {:?}", name)))?;
            headers.insert(header_name, header_value(name, value)?);
        }

        let builder = self.client.request(method, url);

        let builder = match body {
            None => builder.headers(headers),
            Some(RequestBody::Json(value)) => {
                if !caller_content_type {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                let text = serde_json::to_string(&value).map_err(|e| {
                    AppError::Validation(format!("Failed to encode request body: {}", e))
                })?;
                builder.headers(headers).body(text)
            }
            Some(RequestBody::Text(text)) => builder.headers(headers).body(text),
            Some(RequestBody::Multipart(form)) => {
                // reqwest writes the content type with the boundary it generated
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(form)
            }
        };

        Ok(builder)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::Validation(format!("Invalid value for header {}", name)))
}
