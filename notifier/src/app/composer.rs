//! # Composer
//!
//! Drafts for SIMPLE and MULTI notifications. A draft is validated and
//! normalized before anything is sent; an invalid draft never reaches the
//! backend.

use shared::NotificationKind;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::service::NotifyApi;
use crate::utils::validation::validate_required_text;

/// Unvalidated user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Simple {
        to: Option<i64>,
        message: String,
    },
    Multi {
        to: Option<i64>,
        title: String,
        items: Vec<String>,
    },
}

/// A draft that passed validation; all text is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Simple {
        to: i64,
        message: String,
    },
    Multi {
        to: i64,
        title: String,
        items: Vec<String>,
    },
}

impl Draft {
    pub fn simple(to: Option<i64>, message: impl Into<String>) -> Self {
        Draft::Simple {
            to,
            message: message.into(),
        }
    }

    pub fn multi(to: Option<i64>, title: impl Into<String>) -> Self {
        Draft::Multi {
            to,
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append a checklist line; ignored for SIMPLE drafts.
    pub fn item(mut self, text: impl Into<String>) -> Self {
        if let Draft::Multi { items, .. } = &mut self {
            items.push(text.into());
        }
        self
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Draft::Simple { .. } => NotificationKind::Simple,
            Draft::Multi { .. } => NotificationKind::Multi,
        }
    }

    /// Check the draft in the order the fields appear on screen: recipient,
    /// then message or title, then checklist items. Blank items are dropped.
    pub fn validate(&self) -> Result<Outgoing> {
        match self {
            Draft::Simple { to, message } => {
                let to = require_recipient(*to)?;
                validate_required_text("Message", message).into_result()?;
                Ok(Outgoing::Simple {
                    to,
                    message: message.trim().to_string(),
                })
            }
            Draft::Multi { to, title, items } => {
                let to = require_recipient(*to)?;
                validate_required_text("Title", title).into_result()?;

                let items: Vec<String> = items
                    .iter()
                    .map(|text| text.trim())
                    .filter(|text| !text.is_empty())
                    .map(str::to_string)
                    .collect();
                if items.is_empty() {
                    return Err(AppError::Validation(
                        "Add at least one checklist item".to_string(),
                    ));
                }

                Ok(Outgoing::Multi {
                    to,
                    title: title.trim().to_string(),
                    items,
                })
            }
        }
    }
}

fn require_recipient(to: Option<i64>) -> Result<i64> {
    to.ok_or_else(|| AppError::Validation("Pick a recipient".to_string()))
}

pub struct Composer {
    api: Arc<dyn NotifyApi>,
}

impl Composer {
    pub fn new(api: Arc<dyn NotifyApi>) -> Self {
        Self { api }
    }

    /// Validate and send. Returns what was actually sent.
    pub async fn send(&self, draft: &Draft) -> Result<Outgoing> {
        let outgoing = draft.validate()?;
        match &outgoing {
            Outgoing::Simple { to, message } => self.api.send_simple(*to, message).await?,
            Outgoing::Multi { to, title, items } => self.api.send_multi(*to, title, items).await?,
        }
        Ok(outgoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fake::FakeApi;

    #[test]
    fn test_simple_validation() {
        assert!(matches!(
            Draft::simple(None, "hi").validate(),
            Err(AppError::Validation(m)) if m == "Pick a recipient"
        ));
        assert!(matches!(
            Draft::simple(Some(2), "   ").validate(),
            Err(AppError::Validation(m)) if m == "Message is required"
        ));
        assert_eq!(
            Draft::simple(Some(2), "  call me  ").validate().unwrap(),
            Outgoing::Simple {
                to: 2,
                message: "call me".to_string()
            }
        );
    }

    #[test]
    fn test_multi_validation() {
        let no_title = Draft::multi(Some(2), " ").item("milk");
        assert!(matches!(
            no_title.validate(),
            Err(AppError::Validation(m)) if m == "Title is required"
        ));

        let blank_items = Draft::multi(Some(2), "Groceries").item("  ").item("");
        assert!(matches!(
            blank_items.validate(),
            Err(AppError::Validation(m)) if m == "Add at least one checklist item"
        ));

        let ok = Draft::multi(Some(2), " Groceries ")
            .item(" milk ")
            .item(" ")
            .item("eggs");
        assert_eq!(
            ok.validate().unwrap(),
            Outgoing::Multi {
                to: 2,
                title: "Groceries".to_string(),
                items: vec!["milk".to_string(), "eggs".to_string()],
            }
        );
    }

    #[test]
    fn test_item_ignored_on_simple() {
        let draft = Draft::simple(Some(1), "x").item("ignored");
        assert_eq!(draft, Draft::simple(Some(1), "x"));
        assert_eq!(draft.kind(), NotificationKind::Simple);
    }

    #[tokio::test]
    async fn test_send_routes_by_kind() {
        let api = FakeApi::new();
        let composer = Composer::new(Arc::new(api.clone()));

        composer.send(&Draft::simple(Some(2), "hello")).await.unwrap();
        composer
            .send(&Draft::multi(Some(3), "Trip").item("passport"))
            .await
            .unwrap();
        assert!(composer.send(&Draft::simple(None, "lost")).await.is_err());

        assert_eq!(api.calls(), vec!["send_simple", "send_multi"]);
        let state = api.state();
        assert_eq!(state.sent[0].message.as_deref(), Some("hello"));
        assert_eq!(state.sent[1].to_user_id, Some(3));
        assert_eq!(state.sent[1].items[0].text, "passport");
    }
}
