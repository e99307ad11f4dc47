//! # Notification Endpoints
//!
//! Sending SIMPLE and MULTI notifications, the inbox and sent lists, and the
//! recipient-side actions (check a notification, toggle a checklist item).

use shared::{NewItem, Notification, SendMultiRequest, SendSimpleRequest};

use super::client::ApiClient;
use super::request::RequestOptions;
use crate::core::error::Result;

impl ApiClient {
    /// `POST /api/notifications`
    #[tracing::instrument(skip(self, message))]
    pub async fn send_simple(&self, to_user_id: i64, message: &str) -> Result<()> {
        let body = SendSimpleRequest {
            to_user_id,
            message: message.to_string(),
        };
        self.request("/api/notifications", RequestOptions::post().json(&body)?)
            .await?;
        tracing::info!("SIMPLE notification sent");
        Ok(())
    }

    /// `POST /api/notifications/multi`; every item starts unchecked.
    #[tracing::instrument(skip(self, title, items), fields(items = items.len()))]
    pub async fn send_multi(&self, to_user_id: i64, title: &str, items: &[String]) -> Result<()> {
        let body = SendMultiRequest {
            to_user_id,
            title: title.to_string(),
            items: items
                .iter()
                .map(|text| NewItem {
                    text: text.clone(),
                    checked: false,
                })
                .collect(),
        };
        self.request("/api/notifications/multi", RequestOptions::post().json(&body)?)
            .await?;
        tracing::info!("MULTI notification sent");
        Ok(())
    }

    /// Notifications addressed to the session user, newest first as the backend orders them.
    pub async fn inbox(&self) -> Result<Vec<Notification>> {
        self.request("/api/notifications/inbox", RequestOptions::get())
            .await?
            .decode_list("inbox")
    }

    /// Notifications the session user has sent.
    pub async fn sent(&self) -> Result<Vec<Notification>> {
        self.request("/api/notifications/sent", RequestOptions::get())
            .await?
            .decode_list("sent notifications")
    }

    /// Full notification including checklist items.
    pub async fn get_notification(&self, id: i64) -> Result<Notification> {
        self.request(&format!("/api/notifications/{}", id), RequestOptions::get())
            .await?
            .decode("notification detail")
    }

    /// Acknowledge a notification.
    pub async fn check_notification(&self, id: i64) -> Result<()> {
        self.request(
            &format!("/api/notifications/{}/check", id),
            RequestOptions::patch(),
        )
        .await?;
        tracing::info!(notification_id = id, "Notification checked");
        Ok(())
    }

    /// Flip one checklist item and return the updated notification.
    pub async fn toggle_item(&self, id: i64, item_id: i64) -> Result<Notification> {
        self.request(
            &format!("/api/notifications/{}/items/{}/toggle", id, item_id),
            RequestOptions::patch(),
        )
        .await?
        .decode("notification detail")
    }
}
