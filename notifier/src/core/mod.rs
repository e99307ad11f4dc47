//! # Core Abstractions
//!
//! Error type, session context and the service trait used for dependency
//! injection.
//!
//! - **[`error`]**: [`AppError`] and the [`Result`] alias
//! - **[`session`]**: [`Session`] value and its on-disk [`SessionStore`]
//! - **[`service`]**: [`NotifyApi`], implemented by
//!   [`ApiClient`](crate::services::api::ApiClient)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use notifier::core::{NotifyApi, Session};
//! use notifier::services::api::ApiClient;
//!
//! let api: Arc<dyn NotifyApi> = Arc::new(ApiClient::with_base_url(
//!     "http://127.0.0.1:8080",
//!     Some(Session::new("1")),
//! ));
//! ```

pub mod error;
pub mod service;
pub mod session;

pub use error::{AppError, Result};
pub use service::NotifyApi;
pub use session::{Session, SessionStore};
