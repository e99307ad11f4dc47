//! # Profile and Settings
//!
//! The session user's own profile (display name, avatar, search id) and the
//! confirmation-skip preference.

use shared::{User, UserSettings};
use std::path::Path;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::service::NotifyApi;
use crate::utils::validation::{image_mime, validate_display_name};

pub struct Profile {
    api: Arc<dyn NotifyApi>,
    me: Option<User>,
    settings: UserSettings,
}

impl Profile {
    pub fn new(api: Arc<dyn NotifyApi>) -> Self {
        Self {
            api,
            me: None,
            settings: UserSettings::default(),
        }
    }

    /// Reload the profile and the settings. Settings that cannot be loaded
    /// fall back to the defaults.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.get_me().await {
            Ok(me) => self.me = Some(me),
            Err(e) => {
                self.me = None;
                return Err(e);
            }
        }
        self.settings = self.api.get_settings().await.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Settings unavailable, using defaults");
            UserSettings::default()
        });
        Ok(())
    }

    pub fn me(&self) -> Option<&User> {
        self.me.as_ref()
    }

    pub fn settings(&self) -> UserSettings {
        self.settings
    }

    /// Apply the new preference right away and roll it back if the backend refuses.
    pub async fn set_skip_confirm(&mut self, skip: bool) -> Result<()> {
        let previous = self.settings.skip_confirm;
        self.settings.skip_confirm = skip;

        if let Err(e) = self.api.update_settings(skip).await {
            self.settings.skip_confirm = previous;
            return Err(e);
        }
        Ok(())
    }

    pub async fn rename(&mut self, display_name: &str) -> Result<()> {
        validate_display_name(display_name).into_result()?;
        self.api.update_display_name(display_name.trim()).await?;
        self.reload("rename").await;
        Ok(())
    }

    /// Upload a png, jpeg or webp file as the new avatar.
    pub async fn upload_image(&mut self, path: &Path) -> Result<()> {
        let mime = image_mime(path).ok_or_else(|| {
            AppError::Validation("Profile image must be a png, jpeg or webp file".to_string())
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("profile-image")
            .to_string();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::Validation(format!("Cannot read {}: {}", path.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(AppError::Validation(format!("{} is empty", path.display())));
        }

        self.api.upload_profile_image(&file_name, mime, bytes).await?;
        self.reload("upload_image").await;
        Ok(())
    }

    /// Back to the default avatar.
    pub async fn reset_image(&mut self) -> Result<()> {
        self.api.reset_profile_image().await?;
        self.reload("reset_image").await;
        Ok(())
    }

    async fn reload(&mut self, after: &str) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(after, error = %e, "Profile reload failed after an applied change");
        }
    }
}
