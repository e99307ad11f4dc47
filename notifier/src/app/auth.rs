//! # Authentication Boundary
//!
//! The mock login: the user picks an identity from the backend's user
//! directory and the chosen id is remembered in the session file. Nothing
//! else in the crate reads or writes that file.

use shared::User;

use crate::core::error::{AppError, Result};
use crate::core::session::{Session, SessionStore};
use crate::services::api::ApiClient;

pub struct AuthGate {
    store: SessionStore,
    /// Anonymous client: the directory listing needs no identity
    client: ApiClient,
}

impl AuthGate {
    pub fn new(store: SessionStore, client: ApiClient) -> Self {
        Self {
            store,
            client: client.with_session(None),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The stored session, if any.
    pub fn current(&self) -> Result<Option<Session>> {
        self.store.load()
    }

    /// The stored session, or [`AppError::NotLoggedIn`].
    pub fn require(&self) -> Result<Session> {
        self.current()?.ok_or(AppError::NotLoggedIn)
    }

    /// Identities offered at login.
    pub async fn available_users(&self) -> Result<Vec<User>> {
        self.client.list_users().await
    }

    /// Log in as `user_id`, which must exist in the directory.
    #[tracing::instrument(skip(self))]
    pub async fn login(&self, user_id: &str) -> Result<Session> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AppError::Validation("Pick a user to log in as".to_string()));
        }

        let users = self.available_users().await?;
        let picked = users
            .iter()
            .find(|u| u.id.to_string() == user_id)
            .ok_or_else(|| AppError::Validation(format!("No user with id {}", user_id)))?;

        let mut session = Session::new(user_id);
        if let Some(name) = picked.name.as_ref().or(picked.display_name.as_ref()) {
            session = session.with_name(name.clone());
        }

        self.store.save(&session)?;
        tracing::info!(user_id, "Logged in");
        Ok(session)
    }

    /// Forget the session. Returns whether one was stored.
    pub fn logout(&self) -> Result<bool> {
        let had_session = self.current()?.is_some();
        self.store.clear()?;
        if had_session {
            tracing::info!("Logged out");
        }
        Ok(had_session)
    }

    /// Client acting as `session`, sharing this gate's connection pool.
    pub fn client_for(&self, session: &Session) -> ApiClient {
        self.client.with_session(Some(session.clone()))
    }
}
