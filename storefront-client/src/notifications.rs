//! Toast notifications shown after cart and inquiry actions.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const ADDED_TO_CART: &str = "Added to cart";
pub const ITEM_REMOVED: &str = "Item removed";
pub const SELECTED_REMOVED: &str = "Selected items removed";
pub const INQUIRY_SENT: &str = "Inquiry sent! We’ll reach out within 24h.";
pub const INQUIRY_FAILED: &str = "Failed to send. Please try again.";
pub const CONSENT_REQUIRED: &str = "Please accept consent to proceed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn added_to_cart() -> Self {
        Self::success(ADDED_TO_CART)
    }

    pub fn item_removed() -> Self {
        Self::success(ITEM_REMOVED)
    }

    pub fn selected_removed() -> Self {
        Self::success(SELECTED_REMOVED)
    }

    pub fn inquiry_sent() -> Self {
        Self::success(INQUIRY_SENT)
    }

    pub fn inquiry_failed() -> Self {
        Self::error(INQUIRY_FAILED)
    }

    pub fn consent_required() -> Self {
        Self::error(CONSENT_REQUIRED)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(Notification::added_to_cart().message, "Added to cart");
        assert_eq!(
            Notification::inquiry_failed().level,
            NotificationLevel::Error
        );
        assert_eq!(
            Notification::inquiry_sent().to_string(),
            "[ok] Inquiry sent! We’ll reach out within 24h."
        );
    }
}
