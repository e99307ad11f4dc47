//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the notification backend over its REST API.
//!
//! ## Module Organization
//!
//! - [`users`] - User directory entries, the current profile, settings
//! - [`friends`] - Friend list entries and add-friend requests
//! - [`notifications`] - Notifications, checklist items and send requests
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/notifications/multi
//! Content-Type: application/json
//! X-Mock-User-Id: 1
//!
//! {
//!   "toUserId": 2,
//!   "title": "Before you leave",
//!   "items": [
//!     { "text": "lock the door", "checked": false },
//!     { "text": "water the plants", "checked": false }
//!   ]
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "id": 17,
//!   "fromUserId": 1,
//!   "toUserId": 2,
//!   "kind": "MULTI",
//!   "title": "Before you leave",
//!   "createdAt": "2025-01-01T09:00:00Z",
//!   "checkedAt": null,
//!   "items": [
//!     { "id": 40, "text": "lock the door", "checkedAt": null },
//!     { "id": 41, "text": "water the plants", "checkedAt": null }
//!   ]
//! }
//! ```

pub mod friends;
pub mod notifications;
pub mod users;

pub use friends::*;
pub use notifications::*;
pub use users::*;
