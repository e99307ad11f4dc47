//! # Application Layer
//!
//! One store per screen of the notification app. Stores own the data they
//! show, talk to the backend through [`NotifyApi`], and reload their whole
//! list with an explicit `refresh()` after every mutation.
//!
//! ```text
//! app/
//! ├── auth.rs      - AuthGate: mock login, logout, the session file
//! ├── inbox.rs     - Inbox: pending/checked notifications, check, toggle items
//! ├── friends.rs   - Friends: friend list, add/remove, recipient picker
//! ├── composer.rs  - Composer: SIMPLE / MULTI drafts, validation, send
//! ├── sent.rs      - SentHistory: what the session user has sent
//! └── profile.rs   - Profile: display name, avatar, confirmation preference
//! ```
//!
//! ## Flow
//!
//! ```text
//! AuthGate ──(Session)──▶ App ──▶ Inbox / Friends / Composer / SentHistory / Profile
//!                                         │
//!                                         ▼
//!                                   Arc<dyn NotifyApi>
//! ```

pub mod auth;
pub mod composer;
pub mod friends;
pub mod inbox;
pub mod profile;
pub mod sent;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;

use crate::core::service::NotifyApi;
use crate::core::session::Session;

pub use auth::AuthGate;
pub use composer::{Composer, Draft, Outgoing};
pub use friends::{Friends, Recipient};
pub use inbox::Inbox;
pub use profile::Profile;
pub use sent::SentHistory;

/// Logged-in application context: the session plus the backend handle every
/// store shares.
#[derive(Clone)]
pub struct App {
    session: Session,
    api: Arc<dyn NotifyApi>,
}

impl App {
    pub fn new(session: Session, api: Arc<dyn NotifyApi>) -> Self {
        Self { session, api }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> Arc<dyn NotifyApi> {
        Arc::clone(&self.api)
    }

    pub fn inbox(&self) -> Inbox {
        Inbox::new(self.api())
    }

    pub fn friends(&self) -> Friends {
        Friends::new(self.api(), self.session.clone())
    }

    pub fn composer(&self) -> Composer {
        Composer::new(self.api())
    }

    pub fn sent(&self) -> SentHistory {
        SentHistory::new(self.api())
    }

    pub fn profile(&self) -> Profile {
        Profile::new(self.api())
    }
}
