//! # Friend Management API Client
//!
//! HTTP client methods for the friend list.

use shared::{AddFriendRequest, Friend};

use super::client::ApiClient;
use super::request::RequestOptions;
use crate::core::error::Result;

impl ApiClient {
    /// Friends of the session user
    pub async fn list_friends(&self) -> Result<Vec<Friend>> {
        self.request("/api/friends", RequestOptions::get())
            .await?
            .decode_list("friend list")
    }

    /// Add `friend_user_id` to the friend list
    pub async fn add_friend(&self, friend_user_id: i64) -> Result<()> {
        let body = AddFriendRequest { friend_user_id };
        self.request("/api/friends", RequestOptions::post().json(&body)?)
            .await?;
        tracing::info!(friend_user_id, "Friend added");
        Ok(())
    }

    /// Remove a friend by *user* id (not the friendship record id)
    pub async fn remove_friend(&self, friend_user_id: i64) -> Result<()> {
        self.request(
            &format!("/api/friends/{}", friend_user_id),
            RequestOptions::delete(),
        )
        .await?;
        tracing::info!(friend_user_id, "Friend removed");
        Ok(())
    }
}
