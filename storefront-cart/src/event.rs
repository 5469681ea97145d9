//! Change notifications published after every cart save.

use storefront_core::CartSummary;

/// Published on the store's broadcast channel once a cart has been persisted.
///
/// Count badges and summary panels subscribe to this instead of the store
/// writing into presentation directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Changed(CartSummary),
}

impl CartEvent {
    pub fn summary(&self) -> &CartSummary {
        match self {
            Self::Changed(summary) => summary,
        }
    }

    /// Text for a count badge.
    pub fn badge_text(&self) -> String {
        self.summary().count.to_string()
    }
}
