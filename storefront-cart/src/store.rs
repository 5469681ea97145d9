//! The session cart store.
//!
//! Every mutation is a full read-modify-write: load the persisted cart, apply
//! a pure transition from `storefront_core::Cart`, then persist the whole
//! cart again. Reads never fail; a missing or unparseable value is an empty
//! cart.

use crate::event::CartEvent;
use std::collections::HashSet;
use storefront_core::{Cart, LineItem, Product, StorefrontResult};
use storefront_storage::SessionStorage;
use tokio::sync::broadcast;

/// Storage key holding the serialized line items.
pub const CART_ITEMS_KEY: &str = "cartItems";

/// Storage key holding the derived count, for painting badges early.
pub const CART_COUNT_KEY: &str = "cartCount";

const DEFAULT_EVENT_CAPACITY: usize = 64;

pub struct CartStore<S: SessionStorage> {
    storage: S,
    events: broadcast::Sender<CartEvent>,
}

impl<S: SessionStorage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_event_capacity(storage, DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_event_capacity(storage: S, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self { storage, events }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Receive a `CartEvent` for every save made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Read the persisted cart, falling back to empty on any failure.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get_item(CART_ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Cart storage unreadable, using empty cart");
                return Cart::new();
            }
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(error = %err, "Stored cart is malformed, using empty cart");
                Cart::new()
            }
        }
    }

    /// Overwrite the persisted cart and count, then notify subscribers.
    pub fn save(&self, cart: &Cart) -> StorefrontResult<()> {
        let serialized = serde_json::to_string(cart).map_err(|e| {
            storefront_core::StorageError::WriteFailed {
                key: CART_ITEMS_KEY.to_string(),
                reason: e.to_string(),
            }
        })?;
        let summary = cart.summary();
        self.storage.set_item(CART_ITEMS_KEY, &serialized)?;
        self.storage
            .set_item(CART_COUNT_KEY, &summary.count.to_string())?;

        tracing::debug!(count = summary.count, lines = summary.lines, "Cart saved");
        // No subscribers is fine.
        let _ = self.events.send(CartEvent::Changed(summary));
        Ok(())
    }

    /// The count mirror, readable without parsing the cart. Zero if absent.
    pub fn badge_count(&self) -> u64 {
        self.storage
            .get_item(CART_COUNT_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Increment the line with `item.id` by `item.qty`, or append `item`.
    pub fn add_or_increment(&self, item: LineItem) -> StorefrontResult<Cart> {
        let mut cart = self.load();
        cart.add_or_increment(item);
        self.save(&cart)?;
        Ok(cart)
    }

    /// Add one unit of a catalog product, snapshotting its current price.
    /// Stock is not consulted here.
    pub fn add_product(&self, product: &Product) -> StorefrontResult<Cart> {
        self.add_or_increment(product.to_line_item())
    }

    /// `qty = max(1, qty + delta)`. Unknown ids leave storage untouched.
    pub fn change_qty(&self, id: &str, delta: i64) -> StorefrontResult<Cart> {
        let mut cart = self.load();
        if cart.change_qty(id, delta) {
            self.save(&cart)?;
        }
        Ok(cart)
    }

    /// `qty = max(1, qty)`. Unknown ids leave storage untouched.
    pub fn set_qty(&self, id: &str, qty: i64) -> StorefrontResult<Cart> {
        let mut cart = self.load();
        if cart.set_qty(id, qty) {
            self.save(&cart)?;
        }
        Ok(cart)
    }

    pub fn remove(&self, id: &str) -> StorefrontResult<Cart> {
        let mut cart = self.load();
        cart.remove(id);
        self.save(&cart)?;
        Ok(cart)
    }

    pub fn remove_many<I, T>(&self, ids: I) -> StorefrontResult<Cart>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let ids: HashSet<String> = ids.into_iter().map(Into::into).collect();
        let mut cart = self.load();
        cart.remove_many(&ids);
        self.save(&cart)?;
        Ok(cart)
    }

    /// Lines of `cart` whose ids are in `ids`, in cart order.
    pub fn selected_subset<T: AsRef<str>>(cart: &Cart, ids: &[T]) -> Vec<LineItem> {
        cart.selected_subset(ids)
    }
}
