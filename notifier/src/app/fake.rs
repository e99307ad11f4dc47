//! In-memory [`NotifyApi`] for store tests.

use async_trait::async_trait;
use shared::{Friend, Notification, NotificationItem, NotificationKind, User, UserSettings};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::error::{AppError, Result};
use crate::core::service::NotifyApi;

pub const CHECKED_AT: &str = "2025-01-01T10:00:00Z";

#[derive(Default)]
pub struct FakeState {
    pub me: i64,
    pub users: Vec<User>,
    pub friends: Vec<Friend>,
    pub inbox: Vec<Notification>,
    pub sent: Vec<Notification>,
    pub settings: UserSettings,
    pub uploads: Vec<(String, String, usize)>,
    /// Operation names in call order
    pub calls: Vec<String>,
    pub fail_users: bool,
    pub fail_me: bool,
    pub fail_friends: bool,
    pub fail_inbox: bool,
    pub fail_settings: bool,
    pub fail_update_settings: bool,
}

#[derive(Default, Clone)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: Some(name.to_string()),
        email: None,
        display_name: Some(name.to_string()),
        profile_image_url: None,
        search_id: None,
    }
}

pub fn simple(id: i64, from: i64, message: &str) -> Notification {
    Notification {
        id,
        from_user_id: Some(from),
        to_user_id: Some(1),
        kind: NotificationKind::Simple,
        message: Some(message.to_string()),
        title: None,
        created_at: Some("2025-01-01T09:00:00Z".to_string()),
        checked_at: None,
        items: Vec::new(),
        checked: None,
    }
}

pub fn multi(id: i64, from: i64, title: &str, items: &[(i64, &str)]) -> Notification {
    Notification {
        kind: NotificationKind::Multi,
        message: None,
        title: Some(title.to_string()),
        items: items
            .iter()
            .map(|(item_id, text)| NotificationItem {
                id: *item_id,
                text: text.to_string(),
                checked_at: None,
            })
            .collect(),
        ..simple(id, from, "")
    }
}

impl FakeApi {
    /// User 1 ("Me") logged in, user 2 ("Mina") and 3 ("Jun") in the directory.
    pub fn new() -> Self {
        let api = Self::default();
        {
            let mut state = api.state();
            state.me = 1;
            state.users = vec![user(1, "Me"), user(2, "Mina"), user(3, "Jun")];
        }
        api
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    fn record(&self, call: &str) -> MutexGuard<'_, FakeState> {
        let mut state = self.state();
        state.calls.push(call.to_string());
        state
    }

    fn not_found(what: &str) -> AppError {
        AppError::Http {
            status: 404,
            message: format!("{} not found", what),
        }
    }
}

#[async_trait]
impl NotifyApi for FakeApi {
    async fn list_users(&self) -> Result<Vec<User>> {
        let state = self.record("list_users");
        if state.fail_users {
            return Err(AppError::http_status(500));
        }
        Ok(state.users.clone())
    }

    async fn get_me(&self) -> Result<User> {
        let state = self.record("get_me");
        if state.fail_me {
            return Err(AppError::http_status(502));
        }
        let me = state.me;
        state
            .users
            .iter()
            .find(|u| u.id == me)
            .cloned()
            .ok_or_else(|| Self::not_found("user"))
    }

    async fn update_display_name(&self, display_name: &str) -> Result<()> {
        let mut state = self.record("update_display_name");
        let me = state.me;
        if let Some(u) = state.users.iter_mut().find(|u| u.id == me) {
            u.display_name = Some(display_name.to_string());
        }
        Ok(())
    }

    async fn get_settings(&self) -> Result<UserSettings> {
        let state = self.record("get_settings");
        if state.fail_settings {
            return Err(AppError::http_status(500));
        }
        Ok(state.settings)
    }

    async fn update_settings(&self, skip_confirm: bool) -> Result<()> {
        let mut state = self.record("update_settings");
        if state.fail_update_settings {
            return Err(AppError::Http {
                status: 503,
                message: "settings unavailable".to_string(),
            });
        }
        state.settings.skip_confirm = skip_confirm;
        Ok(())
    }

    async fn upload_profile_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let mut state = self.record("upload_profile_image");
        state
            .uploads
            .push((file_name.to_string(), mime.to_string(), bytes.len()));
        let me = state.me;
        if let Some(u) = state.users.iter_mut().find(|u| u.id == me) {
            u.profile_image_url = Some(format!("/uploads/{}", file_name));
        }
        Ok(())
    }

    async fn reset_profile_image(&self) -> Result<()> {
        let mut state = self.record("reset_profile_image");
        let me = state.me;
        if let Some(u) = state.users.iter_mut().find(|u| u.id == me) {
            u.profile_image_url = None;
        }
        Ok(())
    }

    async fn list_friends(&self) -> Result<Vec<Friend>> {
        let state = self.record("list_friends");
        if state.fail_friends {
            return Err(AppError::http_status(503));
        }
        Ok(state.friends.clone())
    }

    async fn add_friend(&self, friend_user_id: i64) -> Result<()> {
        let mut state = self.record("add_friend");
        if state.friends.iter().any(|f| f.friend_user_id == friend_user_id) {
            return Err(AppError::Http {
                status: 409,
                message: "already friends".to_string(),
            });
        }
        let id = state.friends.len() as i64 + 100;
        state.friends.push(Friend {
            id,
            friend_user_id,
            friend_display_name: None,
            friend_profile_image_url: None,
            created_at: None,
        });
        Ok(())
    }

    async fn remove_friend(&self, friend_user_id: i64) -> Result<()> {
        let mut state = self.record("remove_friend");
        state.friends.retain(|f| f.friend_user_id != friend_user_id);
        Ok(())
    }

    async fn send_simple(&self, to_user_id: i64, message: &str) -> Result<()> {
        let mut state = self.record("send_simple");
        let id = state.sent.len() as i64 + 1;
        let from = state.me;
        let mut n = simple(id, from, message);
        n.to_user_id = Some(to_user_id);
        state.sent.push(n);
        Ok(())
    }

    async fn send_multi(&self, to_user_id: i64, title: &str, items: &[String]) -> Result<()> {
        let mut state = self.record("send_multi");
        let id = state.sent.len() as i64 + 1;
        let from = state.me;
        let numbered: Vec<(i64, &str)> = items
            .iter()
            .enumerate()
            .map(|(i, t)| (i as i64 + 1, t.as_str()))
            .collect();
        let mut n = multi(id, from, title, &numbered);
        n.to_user_id = Some(to_user_id);
        state.sent.push(n);
        Ok(())
    }

    async fn inbox(&self) -> Result<Vec<Notification>> {
        let state = self.record("inbox");
        if state.fail_inbox {
            return Err(AppError::Http {
                status: 503,
                message: "inbox down".to_string(),
            });
        }
        Ok(state.inbox.clone())
    }

    async fn sent(&self) -> Result<Vec<Notification>> {
        Ok(self.record("sent").sent.clone())
    }

    async fn get_notification(&self, id: i64) -> Result<Notification> {
        let state = self.record("get_notification");
        state
            .inbox
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("notification"))
    }

    async fn check_notification(&self, id: i64) -> Result<()> {
        let mut state = self.record("check_notification");
        let n = state
            .inbox
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("notification"))?;
        n.checked_at = Some(CHECKED_AT.to_string());
        Ok(())
    }

    async fn toggle_item(&self, id: i64, item_id: i64) -> Result<Notification> {
        let mut state = self.record("toggle_item");
        let n = state
            .inbox
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("notification"))?;
        let item = n
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| Self::not_found("item"))?;
        item.checked_at = match item.checked_at {
            Some(_) => None,
            None => Some(CHECKED_AT.to_string()),
        };
        let all_done = n.items.iter().all(|i| i.checked_at.is_some());
        n.checked_at = all_done.then(|| CHECKED_AT.to_string());
        Ok(n.clone())
    }
}
