//! # Backend API Client Module
//!
//! HTTP client for the notification backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs            - Module exports and documentation
//! ├── client.rs         - ApiClient and the request/response normalization
//! ├── request.rs        - RequestOptions / RequestBody
//! ├── response.rs       - ApiResponse and typed decoding
//! ├── users.rs          - User directory, profile, settings, profile image
//! ├── friends.rs        - Friend list endpoints
//! └── notifications.rs  - Send, inbox, sent, check, toggle
//! ```

pub mod client;
pub mod friends;
pub mod notifications;
pub mod request;
pub mod response;
pub mod users;

pub use client::{ApiClient, USER_ID_HEADER};
pub use request::{RequestBody, RequestOptions};
pub use response::ApiResponse;
