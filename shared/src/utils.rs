//! # Shared Utility Functions
//!
//! Display helpers for values that arrive from the backend as plain strings.
//!
//! - [`format_time`] - Render an ISO-8601 timestamp in local time
//! - [`truncate_text`] - Shorten a message preview with an ellipsis
//!
//! ```rust
//! use shared::utils::{format_time, truncate_text};
//!
//! assert_eq!(format_time(""), "");
//! assert_eq!(format_time("yesterday"), "yesterday");
//! assert_eq!(truncate_text("lock the door", 8), "lock the...");
//! ```

use chrono::{DateTime, Local, NaiveDateTime};

/// Format a backend timestamp for display.
///
/// RFC 3339 values (with offset) are converted to local time; offset-less
/// `LocalDateTime` values (as produced by Java backends) are shown as-is in
/// the same layout. Anything unparseable is returned unchanged.
pub fn format_time(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    iso.to_string()
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text never splits mid-codepoint.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
