//! # Common Error Types
//!
//! Consolidated error handling for the notifier client.
//!
//! Every fallible operation in the crate returns [`AppError`]. The request
//! client never recovers from an error; callers decide whether to print it,
//! retry, or fall back.
//!
//! ## Error Categories
//!
//! - **Http**: the backend answered with a non-success status
//! - **Network**: the request never produced a response
//! - **MalformedJson**: a body declared as JSON did not parse
//! - **UnexpectedResponse**: a typed endpoint got a payload of the wrong shape
//! - **Validation**: user input rejected before any request is made
//! - **NotLoggedIn** / **Session**: session file problems
//! - **Config**: invalid configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use notifier::core::error::AppError;
//!
//! fn require_text(text: &str) -> Result<&str, AppError> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::Validation("Message cannot be empty".to_string()));
//!     }
//!     Ok(text.trim())
//! }
//!
//! assert!(require_text("  ").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// `Http` displays as the bare server message so it can be shown to the
/// user verbatim; every other variant carries a category prefix.
///
/// ```rust
/// use notifier::core::error::AppError;
///
/// let http = AppError::Http { status: 404, message: "no such friend".to_string() };
/// assert_eq!(http.to_string(), "no such friend");
/// assert_eq!(AppError::http_status(502).to_string(), "HTTP 502");
/// assert_eq!(
///     AppError::Validation("Pick a recipient".to_string()).to_string(),
///     "Validation error: Pick a recipient"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-success HTTP status. `message` is the response body text, or
    /// `HTTP <status>` when the body was empty or unreadable.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Connection refused, DNS failure, timeout, broken stream.
    #[error("Network error: {0}")]
    Network(String),

    /// The response declared `application/json` but its body did not parse.
    ///
    /// Kept apart from [`AppError::Http`]: this is a backend bug, not a
    /// rejection, and callers are not expected to handle it.
    #[error("Malformed JSON response: {0}")]
    MalformedJson(String),

    /// A typed endpoint wrapper received a payload it cannot decode.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Input rejected before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No session identifier is stored.
    #[error("Not logged in. Run `notifier login` first")]
    NotLoggedIn,

    /// Session file could not be read or written.
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP failure whose body carried no text.
    pub fn http_status(status: u16) -> Self {
        AppError::Http {
            status,
            message: format!("HTTP {}", status),
        }
    }

    /// Status code for [`AppError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
