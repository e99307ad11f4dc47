//! # User Endpoints
//!
//! Directory listing, the current profile, preferences and the profile image.

use reqwest::multipart::{Form, Part};
use shared::{UpdateDisplayNameRequest, UpdateSettingsRequest, User, UserSettings};

use super::client::ApiClient;
use super::request::RequestOptions;
use crate::core::error::{AppError, Result};

impl ApiClient {
    /// All users known to the backend (`GET /api/users`). Used by the mock
    /// login and to resolve sender names.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.request("/api/users", RequestOptions::get())
            .await?
            .decode_list("user list")
    }

    /// Profile of the session user.
    pub async fn get_me(&self) -> Result<User> {
        self.request("/api/users/me", RequestOptions::get())
            .await?
            .decode("current user")
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_display_name(&self, display_name: &str) -> Result<()> {
        let body = UpdateDisplayNameRequest {
            display_name: display_name.to_string(),
        };
        self.request("/api/users/me", RequestOptions::patch().json(&body)?)
            .await?;
        tracing::info!("Display name updated");
        Ok(())
    }

    /// Current preferences. An empty response means "all defaults".
    pub async fn get_settings(&self) -> Result<UserSettings> {
        let response = self
            .request("/api/users/me/settings", RequestOptions::get())
            .await?;
        if response.is_empty() {
            return Ok(UserSettings::default());
        }
        response.decode("user settings")
    }

    pub async fn update_settings(&self, skip_confirm: bool) -> Result<()> {
        let body = UpdateSettingsRequest { skip_confirm };
        self.request("/api/users/me/settings", RequestOptions::patch().json(&body)?)
            .await?;
        Ok(())
    }

    /// Upload a new profile image as multipart field `file`.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_profile_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::Validation(format!("Invalid image type {}: {}", mime, e)))?;
        let form = Form::new().part("file", part);

        self.request(
            "/api/users/me/profile-image",
            RequestOptions::post().multipart(form),
        )
        .await?;
        tracing::info!("Profile image uploaded");
        Ok(())
    }

    /// Go back to the default avatar.
    pub async fn reset_profile_image(&self) -> Result<()> {
        self.request("/api/users/me/profile-image", RequestOptions::delete())
            .await?;
        Ok(())
    }
}
