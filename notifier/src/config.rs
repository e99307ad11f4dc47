//! Client configuration from environment variables.
//!
//! | variable                | default                                   |
//! |-------------------------|-------------------------------------------|
//! | `NOTIFIER_API_URL`      | `http://127.0.0.1:8080`                   |
//! | `NOTIFIER_SESSION_FILE` | `<config dir>/notifier/session.json`      |
//! | `NOTIFIER_TIMEOUT_SECS` | unset (no timeout)                        |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct Config {
    /// Backend origin; request paths are appended to it
    pub api_url: String,
    pub session_file: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("NOTIFIER_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let session_file = lookup("NOTIFIER_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        let timeout = match lookup("NOTIFIER_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(
                        "NOTIFIER_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                    )
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_url,
            session_file,
            timeout,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https:// (got {:?})",
                self.api_url
            )));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(AppError::Config("Timeout must be greater than 0 seconds".to_string()));
        }

        Ok(())
    }
}

/// `<config dir>/notifier/session.json`, or `./.notifier-session.json` when
/// the platform has no config directory.
pub fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("notifier").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".notifier-session.json"))
}
