//! # Session Context
//!
//! The logged-in identity is a plain value handed to the API client and the
//! stores at construction. Only [`SessionStore`] touches the session file,
//! and only the authentication boundary ([`crate::app::auth::AuthGate`])
//! touches the store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier sent as `X-Mock-User-Id`
    #[serde(rename = "mock_user_id")]
    pub user_id: String,
    /// Name shown at login time, cached for display only
    #[serde(rename = "mock_user_name", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Numeric form of the identifier, when the backend uses numeric ids.
    pub fn numeric_id(&self) -> Option<i64> {
        self.user_id.trim().parse().ok()
    }
}

/// JSON file holding the persisted [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session. A missing file or a blank identifier is `None`.
    pub fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Session(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let session: Session = serde_json::from_str(&raw).map_err(|e| {
            AppError::Session(format!("Corrupt session file {}: {}", self.path.display(), e))
        })?;

        if session.user_id.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Persist `session`, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Session(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let body = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::Session(format!("Failed to encode session: {}", e)))?;
        fs::write(&self.path, body).map_err(|e| {
            AppError::Session(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), user_id = %session.user_id, "Session saved");
        Ok(())
    }

    /// Delete the session file. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Session(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
