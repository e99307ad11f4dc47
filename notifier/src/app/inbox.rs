//! # Inbox
//!
//! Notifications addressed to the session user: the pending list, the
//! checked history, acknowledging a notification and toggling checklist
//! items. Every mutation is followed by a full [`Inbox::refresh`].

use shared::{Notification, User};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::service::NotifyApi;

pub struct Inbox {
    api: Arc<dyn NotifyApi>,
    items: Vec<Notification>,
    /// `fromUserId` -> directory entry
    senders: HashMap<i64, User>,
    skip_confirm: bool,
}

impl Inbox {
    pub fn new(api: Arc<dyn NotifyApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            senders: HashMap::new(),
            skip_confirm: false,
        }
    }

    /// Reload the inbox, then the sender names it refers to.
    ///
    /// A failing inbox load clears the list and returns the error; a failing
    /// sender lookup is only logged.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.api.inbox().await {
            Ok(items) => self.items = items,
            Err(e) => {
                self.items.clear();
                return Err(e);
            }
        }

        let wanted: BTreeSet<i64> = self.items.iter().filter_map(|n| n.from_user_id).collect();
        if wanted.is_empty() {
            return Ok(());
        }

        match self.api.list_users().await {
            Ok(users) => {
                self.senders = users
                    .into_iter()
                    .filter(|u| wanted.contains(&u.id))
                    .map(|u| (u.id, u))
                    .collect();
            }
            Err(e) => tracing::warn!(error = %e, "Sender lookup failed, showing raw ids"),
        }
        Ok(())
    }

    /// Load the confirmation-skip preference. Failure means "ask for confirmation".
    pub async fn load_preferences(&mut self) {
        self.skip_confirm = match self.api.get_settings().await {
            Ok(settings) => settings.skip_confirm,
            Err(e) => {
                tracing::debug!(error = %e, "Settings unavailable, confirmation stays on");
                false
            }
        };
    }

    /// Persist the confirmation-skip preference; the cached value only
    /// changes once the backend accepted it.
    pub async fn set_skip_confirm(&mut self, skip: bool) -> Result<()> {
        self.api.update_settings(skip).await?;
        self.skip_confirm = skip;
        Ok(())
    }

    pub fn needs_confirmation(&self) -> bool {
        !self.skip_confirm
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Not yet checked, in backend order
    pub fn pending(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.is_checked()).collect()
    }

    /// Already checked, in backend order
    pub fn history(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.is_checked()).collect()
    }

    pub fn find(&self, id: i64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn sender(&self, notification: &Notification) -> Option<&User> {
        notification.from_user_id.and_then(|id| self.senders.get(&id))
    }

    /// Display name of the sender, falling back to the raw id.
    pub fn sender_name(&self, notification: &Notification) -> String {
        match (self.sender(notification), notification.from_user_id) {
            (Some(user), _) => user.label(),
            (None, Some(id)) => format!("user {}", id),
            (None, None) => "unknown".to_string(),
        }
    }

    /// Acknowledge a notification and reload.
    ///
    /// Only the check itself decides the result; a failed reload leaves the
    /// list empty and is logged.
    pub async fn check(&mut self, id: i64) -> Result<()> {
        self.api.check_notification(id).await?;
        self.reload("check").await;
        Ok(())
    }

    /// Full notification with its checklist.
    pub async fn detail(&self, id: i64) -> Result<Notification> {
        self.api.get_notification(id).await
    }

    /// Flip a checklist item and reload; returns the updated notification.
    pub async fn toggle_item(&mut self, id: i64, item_id: i64) -> Result<Notification> {
        let detail = self.api.toggle_item(id, item_id).await?;
        self.reload("toggle").await;
        Ok(detail)
    }

    async fn reload(&mut self, after: &str) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(after, error = %e, "Inbox reload failed after an applied change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fake::{multi, simple, FakeApi};

    fn inbox_with(api: &FakeApi) -> Inbox {
        {
            let mut state = api.state();
            state.inbox = vec![
                simple(10, 2, "call me"),
                multi(11, 3, "Groceries", &[(1, "milk"), (2, "eggs")]),
                simple(12, 9, "from a stranger"),
            ];
        }
        Inbox::new(Arc::new(api.clone()))
    }

    #[tokio::test]
    async fn test_refresh_splits_pending_and_history() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();
        assert_eq!(inbox.pending().len(), 3);
        assert!(inbox.history().is_empty());

        inbox.check(10).await.unwrap();
        assert_eq!(inbox.pending().len(), 2);
        assert_eq!(inbox.history()[0].id, 10);
        assert_eq!(
            api.calls(),
            vec!["inbox", "list_users", "check_notification", "inbox", "list_users"]
        );
    }

    #[tokio::test]
    async fn test_sender_names() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();
        assert_eq!(inbox.sender_name(inbox.find(10).unwrap()), "Mina");
        assert_eq!(inbox.sender_name(inbox.find(12).unwrap()), "user 9");
    }

    #[tokio::test]
    async fn test_sender_lookup_failure_is_ignored() {
        let api = FakeApi::new();
        api.state().fail_users = true;
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();
        assert_eq!(inbox.items().len(), 3);
        assert_eq!(inbox.sender_name(inbox.find(10).unwrap()), "user 2");
    }

    #[tokio::test]
    async fn test_empty_inbox_skips_directory() {
        let api = FakeApi::new();
        let mut inbox = Inbox::new(Arc::new(api.clone()));
        inbox.refresh().await.unwrap();
        assert_eq!(api.calls(), vec!["inbox"]);
    }

    #[tokio::test]
    async fn test_toggle_until_complete() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();

        let detail = inbox.toggle_item(11, 1).await.unwrap();
        assert_eq!(detail.progress(), (1, 2));
        assert!(inbox.find(11).unwrap().checked_at.is_none());

        let detail = inbox.toggle_item(11, 2).await.unwrap();
        assert_eq!(detail.progress(), (2, 2));
        assert!(inbox.history().iter().any(|n| n.id == 11));

        let detail = inbox.toggle_item(11, 2).await.unwrap();
        assert_eq!(detail.progress(), (1, 2));
        assert!(inbox.pending().iter().any(|n| n.id == 11));
    }

    #[tokio::test]
    async fn test_check_unknown_leaves_list_untouched() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();
        let err = inbox.check(999).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(inbox.items().len(), 3);
    }

    #[tokio::test]
    async fn test_confirmation_preference() {
        let api = FakeApi::new();
        let mut inbox = Inbox::new(Arc::new(api.clone()));

        api.state().settings.skip_confirm = true;
        inbox.load_preferences().await;
        assert!(!inbox.needs_confirmation());

        api.state().fail_settings = true;
        inbox.load_preferences().await;
        assert!(inbox.needs_confirmation());

        api.state().fail_update_settings = true;
        assert!(inbox.set_skip_confirm(true).await.is_err());
        assert!(inbox.needs_confirmation());

        api.state().fail_update_settings = false;
        inbox.set_skip_confirm(true).await.unwrap();
        assert!(!inbox.needs_confirmation());
    }

    #[tokio::test]
    async fn test_check_succeeds_when_reload_fails() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        inbox.refresh().await.unwrap();
        api.state().fail_inbox = true;

        inbox.check(10).await.unwrap();

        assert!(api.state().inbox[0].is_checked());
        assert!(inbox.items().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_keeps_detail_when_reload_fails() {
        let api = FakeApi::new();
        let mut inbox = inbox_with(&api);
        api.state().fail_inbox = true;

        let detail = inbox.toggle_item(11, 1).await.unwrap();

        assert_eq!(detail.progress(), (1, 2));
        assert!(inbox.items().is_empty());
    }
}
