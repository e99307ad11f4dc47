//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_FILTER: &str = "notifier=warn";

/// Logging system configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive (e.g., "notifier=debug,warn")
    pub log_level: String,
    /// Directory for the daily-rolled log file; stderr only when `None`
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from `RUST_LOG` and `NOTIFIER_LOG_DIR`
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            log_dir: std::env::var("NOTIFIER_LOG_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Raise the crate's own level for `-v` (debug) and `-vv` (trace).
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.log_level = format!("{},notifier=debug", self.log_level),
            _ => self.log_level = format!("{},notifier=trace", self.log_level),
        }
        self
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
