//! Storefront Cart - Session Cart Store
//!
//! `CartStore` is the single source of truth for cart contents within one
//! session. All mutation paths funnel through it so the persisted cart, the
//! persisted count mirror, and every subscribed badge agree.

mod event;
mod store;

pub use event::CartEvent;
pub use store::{CartStore, CART_COUNT_KEY, CART_ITEMS_KEY};
