//! # Sent History

use shared::Notification;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::service::NotifyApi;

pub struct SentHistory {
    api: Arc<dyn NotifyApi>,
    entries: Vec<Notification>,
}

impl SentHistory {
    pub fn new(api: Arc<dyn NotifyApi>) -> Self {
        Self {
            api,
            entries: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.sent().await {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(e) => {
                self.entries.clear();
                Err(e)
            }
        }
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Whether the recipient has checked `entry`, when the backend says so.
    ///
    /// `None` means the backend reported neither `checked` nor `checkedAt`.
    pub fn delivery_state(entry: &Notification) -> Option<bool> {
        entry.checked.or(entry.checked_at.as_ref().map(|_| true))
    }
}
