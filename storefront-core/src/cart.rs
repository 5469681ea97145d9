//! Cart data model: line items and the ordered cart that holds them.
//!
//! Every transition here is pure. Persistence and change notification live in
//! `storefront-cart`; this module only guarantees the invariants:
//!
//! - no two line items share an `id`
//! - `qty` is always at least 1 (decrements clamp, they never remove)
//! - `count` and `total` are derived on demand, never stored

use crate::money::format_price;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest quantity a line item can hold.
pub const MIN_QTY: u32 = 1;

/// Clamp an arbitrary signed quantity into `[1, u32::MAX]`.
pub fn clamp_qty(qty: i64) -> u32 {
    qty.clamp(i64::from(MIN_QTY), i64::from(u32::MAX)) as u32
}

fn default_qty() -> u32 {
    MIN_QTY
}

/// One product entry in the cart, with name and price captured at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// Unit price, already resolved to the sale price where one applies.
    pub price: f64,
    #[serde(default = "default_qty")]
    pub qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<String>,
}

impl LineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: MIN_QTY,
            thumbnail: None,
            specs: Vec::new(),
        }
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = qty.max(MIN_QTY);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_specs<I, T>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specs = specs.into_iter().map(Into::into).collect();
        self
    }

    /// `price * qty` for this line.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    /// Label used in the inquiry form's selected-products box.
    pub fn selection_label(&self) -> String {
        format!("{} × {}", self.name, self.qty)
    }

    fn normalize(&mut self) {
        self.qty = self.qty.max(MIN_QTY);
        if !self.price.is_finite() || self.price < 0.0 {
            self.price = 0.0;
        }
    }
}

/// Derived cart figures pushed to count badges and summary panels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub count: u64,
    pub total: f64,
    pub lines: usize,
}

impl CartSummary {
    pub fn formatted_total(&self) -> String {
        format_price(self.total)
    }
}

/// Ordered sequence of line items keyed by `id`.
///
/// Serializes as a bare JSON array. Deserialization folds duplicate ids into
/// their first occurrence and raises out-of-range values, so a cart read back
/// from storage always satisfies the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_lines(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary items, restoring the invariants.
    pub fn from_lines(items: Vec<LineItem>) -> Self {
        let mut lines: Vec<LineItem> = Vec::with_capacity(items.len());
        for mut item in items {
            item.normalize();
            match lines.iter_mut().find(|line| line.id == item.id) {
                Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
                None => lines.push(item),
            }
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<LineItem> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sum of all quantities.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Sum of `price * qty` over all lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(LineItem::subtotal).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            count: self.count(),
            total: self.total(),
            lines: self.lines.len(),
        }
    }

    /// Increment an existing line by `item.qty`, or append `item`.
    pub fn add_or_increment(&mut self, mut item: LineItem) {
        item.normalize();
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
            None => self.lines.push(item),
        }
    }

    /// Apply a relative quantity change. Returns false if `id` is absent.
    pub fn change_qty(&mut self, id: &str, delta: i64) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.qty = clamp_qty(i64::from(line.qty).saturating_add(delta));
                true
            }
            None => false,
        }
    }

    /// Set an absolute quantity. Returns false if `id` is absent.
    pub fn set_qty(&mut self, id: &str, qty: i64) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.qty = clamp_qty(qty);
                true
            }
            None => false,
        }
    }

    /// Drop the line with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Drop every line whose id is in `ids`. Returns the number removed.
    pub fn remove_many(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !ids.contains(&line.id));
        before - self.lines.len()
    }

    /// Lines whose id appears in `ids`, in cart order.
    pub fn selected_subset<S: AsRef<str>>(&self, ids: &[S]) -> Vec<LineItem> {
        self.lines
            .iter()
            .filter(|line| ids.iter().any(|id| id.as_ref() == line.id))
            .cloned()
            .collect()
    }
}
