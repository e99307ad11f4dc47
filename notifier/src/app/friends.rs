//! # Friends
//!
//! The friend list and the recipient picker built from it.

use shared::Friend;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::service::NotifyApi;
use crate::core::session::Session;
use crate::utils::validation::validate_friend_id;

/// Someone a notification can be addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub user_id: i64,
    pub label: String,
    pub is_self: bool,
}

pub struct Friends {
    api: Arc<dyn NotifyApi>,
    session: Session,
    friends: Vec<Friend>,
}

impl Friends {
    pub fn new(api: Arc<dyn NotifyApi>, session: Session) -> Self {
        Self {
            api,
            session,
            friends: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.list_friends().await {
            Ok(friends) => {
                self.friends = friends;
                Ok(())
            }
            Err(e) => {
                self.friends.clear();
                Err(e)
            }
        }
    }

    pub fn list(&self) -> &[Friend] {
        &self.friends
    }

    /// Add a friend from raw user input, then reload. Returns the parsed id.
    pub async fn add(&mut self, input: &str) -> Result<i64> {
        validate_friend_id(input, Some(&self.session.user_id)).into_result()?;
        let friend_user_id = input
            .trim()
            .parse::<i64>()
            .map_err(|e| AppError::Validation(format!("Invalid friend ID: {}", e)))?;

        self.api.add_friend(friend_user_id).await?;
        self.reload("add").await;
        Ok(friend_user_id)
    }

    pub async fn remove(&mut self, friend_user_id: i64) -> Result<()> {
        self.api.remove_friend(friend_user_id).await?;
        self.reload("remove").await;
        Ok(())
    }

    /// Refresh after a change the backend accepted; failure is only logged.
    async fn reload(&mut self, after: &str) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(after, error = %e, "Friend list reload failed after an applied change");
        }
    }

    /// The session user first (sending to yourself is allowed), then every friend.
    pub async fn recipients(&mut self) -> Result<Vec<Recipient>> {
        self.refresh().await?;
        let me = self.api.get_me().await?;

        let mut recipients = Vec::with_capacity(self.friends.len() + 1);
        recipients.push(Recipient {
            user_id: me.id,
            label: format!("{} (me)", me.label()),
            is_self: true,
        });
        recipients.extend(self.friends.iter().map(|f| Recipient {
            user_id: f.friend_user_id,
            label: f.label(),
            is_self: false,
        }));
        Ok(recipients)
    }
}
