//! Storefront Catalog - Read-only Views
//!
//! Queries over the static catalog fixtures: the product listing, header and
//! tag search, the blog and services grids, the category menu, and the footer. Nothing
//! here touches session state.

pub mod browse;
pub mod footer;
pub mod listing;
pub mod menu;
pub mod pagination;
pub mod search;

pub use browse::{BlogBrowser, ServicesBrowser, ALL_CATEGORIES};
pub use footer::{Footer, FooterLink};
pub use listing::{similar_products, sort_products, ListingQuery, SortKey, SIMILAR_PRODUCTS_LIMIT};
pub use menu::{category_query, CategoryMenu, MenuEntry, MACHINERY_CATEGORY};
pub use pagination::{
    paginate, Page, PageWindow, BROWSE_PAGE_SIZE, LISTING_PAGE_SIZE, MAX_VISIBLE_PAGES,
};
pub use search::{header_search, tag_search, SearchHit, TaggedItem, TaggedKind};
