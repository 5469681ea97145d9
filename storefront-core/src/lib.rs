//! Storefront Core - Data Types
//!
//! Shared model for the storefront workspace:
//! - `LineItem` / `Cart`: the session cart and its pure state transitions
//! - `Product` and the static site fixtures consumed by catalog views
//! - Price formatting and the error taxonomy used across crates

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod site;

pub use cart::{clamp_qty, Cart, CartSummary, LineItem, MIN_QTY};
pub use error::{CatalogError, StorageError, StorefrontError, StorefrontResult, ValidationError};
pub use money::{format_price, CURRENCY_SYMBOL};
pub use product::{CatalogFilters, CategoryField, Product, ProductSpecs, ProductsFile};
pub use site::{
    Article, BlogFile, CategoryRef, Contact, FooterData, NamedLink, Service, ServicesFile,
    SiteData, SiteInfo,
};
