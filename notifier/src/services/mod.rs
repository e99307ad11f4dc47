//! # Services Module
//!
//! External service integrations. The notification backend is the only one.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              notifier (this crate)          │
//! │                                             │
//! │   app::* stores ──▶ core::NotifyApi         │
//! │                         │                   │
//! │                         ▼                   │
//! │                 services::api::ApiClient    │
//! └─────────────────────────┼───────────────────┘
//!                           │ HTTP/JSON + X-Mock-User-Id
//!                           ▼
//! ┌─────────────────────────────────────────────┐
//! │  Notification backend                       │
//! │  /api/users/*  /api/friends/*               │
//! │  /api/notifications/*                       │
//! └─────────────────────────────────────────────┘
//! ```

pub mod api;
