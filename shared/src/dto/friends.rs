use serde::{Deserialize, Serialize};

/// Friend list entry (`GET /api/friends`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Id of the friendship record, not of the friend
    #[serde(default)]
    pub id: i64,
    pub friend_user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_profile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Friend {
    pub fn label(&self) -> String {
        match self.friend_display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("user {}", self.friend_user_id),
        }
    }
}

/// Body of `POST /api/friends`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
    pub friend_user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_wire_names() {
        let friend: Friend = serde_json::from_str(
            r#"{"id": 9, "friendUserId": 2, "createdAt": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(friend.friend_user_id, 2);
        assert_eq!(friend.label(), "user 2");

        let body = serde_json::to_string(&AddFriendRequest { friend_user_id: 2 }).unwrap();
        assert_eq!(body, r#"{"friendUserId":2}"#);
    }
}
