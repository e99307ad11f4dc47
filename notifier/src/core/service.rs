//! # Service Traits
//!
//! The stores in [`crate::app`] talk to the backend through [`NotifyApi`]
//! so tests can swap in an in-memory implementation.

use async_trait::async_trait;
use shared::{Friend, Notification, User, UserSettings};

use super::error::Result;
use crate::services::api::ApiClient;

/// Backend operations used by the application layer.
#[async_trait]
pub trait NotifyApi: Send + Sync {
    /// User directory
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Profile of the session user
    async fn get_me(&self) -> Result<User>;

    async fn update_display_name(&self, display_name: &str) -> Result<()>;

    async fn get_settings(&self) -> Result<UserSettings>;

    async fn update_settings(&self, skip_confirm: bool) -> Result<()>;

    async fn upload_profile_image(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<()>;

    async fn reset_profile_image(&self) -> Result<()>;

    async fn list_friends(&self) -> Result<Vec<Friend>>;

    async fn add_friend(&self, friend_user_id: i64) -> Result<()>;

    async fn remove_friend(&self, friend_user_id: i64) -> Result<()>;

    async fn send_simple(&self, to_user_id: i64, message: &str) -> Result<()>;

    async fn send_multi(&self, to_user_id: i64, title: &str, items: &[String]) -> Result<()>;

    async fn inbox(&self) -> Result<Vec<Notification>>;

    async fn sent(&self) -> Result<Vec<Notification>>;

    async fn get_notification(&self, id: i64) -> Result<Notification>;

    async fn check_notification(&self, id: i64) -> Result<()>;

    /// Flip a checklist item, returning the updated notification
    async fn toggle_item(&self, id: i64, item_id: i64) -> Result<Notification>;
}

#[async_trait]
impl NotifyApi for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        ApiClient::list_users(self).await
    }

    async fn get_me(&self) -> Result<User> {
        ApiClient::get_me(self).await
    }

    async fn update_display_name(&self, display_name: &str) -> Result<()> {
        ApiClient::update_display_name(self, display_name).await
    }

    async fn get_settings(&self) -> Result<UserSettings> {
        ApiClient::get_settings(self).await
    }

    async fn update_settings(&self, skip_confirm: bool) -> Result<()> {
        ApiClient::update_settings(self, skip_confirm).await
    }

    async fn upload_profile_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        ApiClient::upload_profile_image(self, file_name, mime, bytes).await
    }

    async fn reset_profile_image(&self) -> Result<()> {
        ApiClient::reset_profile_image(self).await
    }

    async fn list_friends(&self) -> Result<Vec<Friend>> {
        ApiClient::list_friends(self).await
    }

    async fn add_friend(&self, friend_user_id: i64) -> Result<()> {
        ApiClient::add_friend(self, friend_user_id).await
    }

    async fn remove_friend(&self, friend_user_id: i64) -> Result<()> {
        ApiClient::remove_friend(self, friend_user_id).await
    }

    async fn send_simple(&self, to_user_id: i64, message: &str) -> Result<()> {
        ApiClient::send_simple(self, to_user_id, message).await
    }

    async fn send_multi(&self, to_user_id: i64, title: &str, items: &[String]) -> Result<()> {
        ApiClient::send_multi(self, to_user_id, title, items).await
    }

    async fn inbox(&self) -> Result<Vec<Notification>> {
        ApiClient::inbox(self).await
    }

    async fn sent(&self) -> Result<Vec<Notification>> {
        ApiClient::sent(self).await
    }

    async fn get_notification(&self, id: i64) -> Result<Notification> {
        ApiClient::get_notification(self, id).await
    }

    async fn check_notification(&self, id: i64) -> Result<()> {
        ApiClient::check_notification(self, id).await
    }

    async fn toggle_item(&self, id: i64, item_id: i64) -> Result<Notification> {
        ApiClient::toggle_item(self, id, item_id).await
    }
}
