use serde::{Deserialize, Serialize};

/// Entry of the user directory (`GET /api/users`), also returned by `GET /api/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// Public handle other users search for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_id: Option<String>,
}

impl User {
    /// Best available human-readable name: display name, then directory name, then the id.
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("user {}", self.id))
    }
}

/// Per-user preferences (`/api/users/me/settings`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Check notifications immediately, without a confirmation step
    #[serde(default)]
    pub skip_confirm: bool,
}

/// Body of `PATCH /api/users/me/settings`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub skip_confirm: bool,
}

/// Body of `PATCH /api/users/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisplayNameRequest {
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tolerates_missing_fields() {
        let user: User =
            serde_json::from_str(r#"{"id": 3, "name": "Mina", "extra": true}"#).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name.as_deref(), Some("Mina"));
        assert!(user.display_name.is_none());
    }

    #[test]
    fn test_user_label_prefers_display_name() {
        let mut user: User = serde_json::from_str(r#"{"id": 3, "name": "Mina"}"#).unwrap();
        assert_eq!(user.label(), "Mina");
        user.display_name = Some("Minami".to_string());
        assert_eq!(user.label(), "Minami");
        user.display_name = Some("  ".to_string());
        user.name = None;
        assert_eq!(user.label(), "user 3");
    }

    #[test]
    fn test_settings_default_when_field_missing() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert!(!settings.skip_confirm);
        let body = serde_json::to_string(&UpdateSettingsRequest { skip_confirm: true }).unwrap();
        assert_eq!(body, r#"{"skipConfirm":true}"#);
    }
}
