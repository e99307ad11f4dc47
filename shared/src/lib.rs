//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the notifier client and the
//! notification backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::users`]**: Users, the current profile and user settings
//!   - **[`dto::friends`]**: Friend list entries and the add-friend request
//!   - **[`dto::notifications`]**: SIMPLE and MULTI notifications, checklist items
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`:
//! - Unknown fields are ignored on deserialization
//! - Optional fields default to `None` when missing and are omitted from
//!   serialized request bodies
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::notifications::SendSimpleRequest;
//!
//! let body = SendSimpleRequest { to_user_id: 2, message: "check the oven".to_string() };
//! let json = serde_json::to_value(&body).unwrap();
//! assert_eq!(json["toUserId"], 2);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
