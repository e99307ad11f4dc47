//! Validation utilities for user input
//!
//! Everything here runs before a request is issued; a failed check never
//! reaches the backend.

use std::path::Path;

use crate::core::error::AppError;

/// Longest display name the settings screen accepts
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into `Result`, mapping a failure to [`AppError::Validation`].
    pub fn into_result(self) -> Result<(), AppError> {
        match (self.is_valid, self.error) {
            (true, _) => Ok(()),
            (false, message) => Err(AppError::Validation(
                message.unwrap_or_else(|| "Invalid input".to_string()),
            )),
        }
    }
}

/// Validate a friend id typed by the user: required, digits only, not `me`.
pub fn validate_friend_id(input: &str, me: Option<&str>) -> ValidationResult {
    let id = input.trim();
    if id.is_empty() {
        return ValidationResult::err("Friend ID is required");
    }

    if !id.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Friend ID must contain digits only");
    }

    if id.parse::<i64>().is_err() {
        return ValidationResult::err("Friend ID is too large");
    }

    if me.map(str::trim) == Some(id) {
        return ValidationResult::err("You cannot add yourself as a friend");
    }

    ValidationResult::ok()
}

/// Validate a required free-text field (message, title, checklist item)
pub fn validate_required_text(field: &str, text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

/// Validate a display name: required, at most [`MAX_DISPLAY_NAME_CHARS`] characters
pub fn validate_display_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::err("Display name is required");
    }

    if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return ValidationResult::err(format!(
            "Display name must be at most {} characters",
            MAX_DISPLAY_NAME_CHARS
        ));
    }

    ValidationResult::ok()
}

/// MIME type of an accepted profile image, judged by extension (png, jpeg, webp)
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_id_validation() {
        assert!(validate_friend_id("2", Some("1")).is_valid);
        assert!(validate_friend_id(" 42 ", None).is_valid);
        assert!(!validate_friend_id("", Some("1")).is_valid);
        assert!(!validate_friend_id("   ", None).is_valid);
        assert!(!validate_friend_id("2a", None).is_valid);
        assert!(!validate_friend_id("-2", None).is_valid);
        assert!(!validate_friend_id("1", Some("1")).is_valid); // self
        assert!(!validate_friend_id("99999999999999999999", None).is_valid);
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Message", "hi").is_valid);
        let result = validate_required_text("Message", " \n ");
        assert_eq!(result.error.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_display_name_validation() {
        assert!(validate_display_name("Mina").is_valid);
        assert!(!validate_display_name("  ").is_valid);
        assert!(validate_display_name(&"가".repeat(50)).is_valid);
        assert!(!validate_display_name(&"a".repeat(51)).is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        let err = ValidationResult::err("nope").into_result().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: nope");
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("me.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("a/b.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("b.jpg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("c.webp")), Some("image/webp"));
        assert_eq!(image_mime(Path::new("d.gif")), None);
        assert_eq!(image_mime(Path::new("noext")), None);
    }
}
