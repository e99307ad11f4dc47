use serde::{Deserialize, Serialize};

/// Notification flavour
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    /// Single free-text message
    #[default]
    Simple,
    /// Titled checklist; each item is toggled on its own
    Multi,
}

/// Checklist entry of a MULTI notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub checked_at: Option<String>,
}

impl NotificationItem {
    pub fn is_checked(&self) -> bool {
        self.checked_at.is_some()
    }
}

/// Notification as listed in the inbox / sent history and returned by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub from_user_id: Option<i64>,
    #[serde(default)]
    pub to_user_id: Option<i64>,
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub checked_at: Option<String>,
    #[serde(default)]
    pub items: Vec<NotificationItem>,
    /// Only some backends report this on the sent list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Notification {
    /// A notification is acknowledged once the backend has stamped `checkedAt`.
    pub fn is_checked(&self) -> bool {
        self.checked_at.is_some() || self.checked == Some(true)
    }

    /// Headline for list views: the title of a MULTI, the message of a SIMPLE.
    pub fn headline(&self) -> &str {
        let text = match self.kind {
            NotificationKind::Multi => self.title.as_deref().or(self.message.as_deref()),
            NotificationKind::Simple => self.message.as_deref().or(self.title.as_deref()),
        };
        text.unwrap_or("")
    }

    /// `(checked, total)` over the checklist items
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.is_checked()).count();
        (done, self.items.len())
    }
}

/// Body of `POST /api/notifications`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SendSimpleRequest {
    pub to_user_id: i64,
    pub message: String,
}

/// Checklist entry inside a [`SendMultiRequest`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub text: String,
    pub checked: bool,
}

/// Body of `POST /api/notifications/multi`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SendMultiRequest {
    pub to_user_id: i64,
    pub title: String,
    pub items: Vec<NewItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_notification_from_wire() {
        let n: Notification = serde_json::from_str(
            r#"{
                "id": 17, "fromUserId": 1, "toUserId": 2, "kind": "MULTI",
                "title": "Before you leave", "createdAt": "2025-01-01T09:00:00Z", "checkedAt": null,
                "items": [
                    {"id": 40, "text": "lock the door", "checkedAt": "2025-01-01T09:05:00Z"},
                    {"id": 41, "text": "water the plants", "checkedAt": null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(n.kind, NotificationKind::Multi);
        assert_eq!(n.headline(), "Before you leave");
        assert_eq!(n.progress(), (1, 2));
        assert!(!n.is_checked());
    }

    #[test]
    fn test_kind_defaults_to_simple() {
        let n: Notification =
            serde_json::from_str(r#"{"id": 1, "message": "hi", "checkedAt": "x"}"#).unwrap();
        assert_eq!(n.kind, NotificationKind::Simple);
        assert_eq!(n.headline(), "hi");
        assert!(n.is_checked());
        assert!(n.items.is_empty());
    }

    #[test]
    fn test_send_multi_wire_shape() {
        let body = SendMultiRequest {
            to_user_id: 2,
            title: "t".to_string(),
            items: vec![NewItem { text: "a".to_string(), checked: false }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"toUserId": 2, "title": "t", "items": [{"text": "a", "checked": false}]})
        );
    }
}
