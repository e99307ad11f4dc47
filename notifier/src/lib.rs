//! # Notifier - Library Root
//!
//! Client side of a small friend-to-friend notification service. Users pick
//! an identity from the backend's user directory, keep a friend list, and
//! send each other SIMPLE messages or MULTI checklists that the recipient
//! checks off.
//!
//! This library crate holds everything the `notifier` binary (`main.rs`) uses.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              notifier (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  cli / commands  - clap front end, text or JSON output │
//! │  app             - AuthGate + one store per view       │
//! │  core            - AppError, Session, NotifyApi trait  │
//! │  services::api   - reqwest request client + endpoints  │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP + X-Mock-User-Id
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: session gate and the inbox, friends, composer, sent and
//!   profile stores. Stores talk to the backend only through [`NotifyApi`].
//! - **services**: the HTTP request client and typed endpoint wrappers
//! - **core**: error type, session persistence, service trait
//! - **config** / **logging**: environment-driven setup
//! - **utils**: input validation
//!
//! ## Example
//!
//! ```no_run
//! use notifier::{ApiClient, Config, Session};
//!
//! # async fn demo() -> notifier::Result<()> {
//! let config = Config::from_env()?;
//! let client = ApiClient::new(&config, Some(Session::new("1")));
//! let inbox = client.inbox().await?;
//! println!("{} notification(s)", inbox.len());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

pub use app::App;
pub use config::Config;
pub use core::{AppError, NotifyApi, Result, Session, SessionStore};
pub use services::api::ApiClient;
