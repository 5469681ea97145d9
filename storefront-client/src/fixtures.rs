//! Loading the static JSON data files.

use serde::de::DeserializeOwned;
use std::path::Path;
use storefront_core::{
    Article, BlogFile, CatalogError, Product, ProductsFile, Service, ServicesFile, SiteData,
    StorefrontResult,
};

pub const PRODUCTS_FILE: &str = "products.json";
pub const SITE_FILE: &str = "data.json";
pub const BLOG_FILE: &str = "blog.json";
pub const SERVICES_FILE: &str = "services.json";

/// Every fixture the pages read, loaded once.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    pub products: ProductsFile,
    pub site: SiteData,
    pub blog: BlogFile,
    pub services: ServicesFile,
}

impl SiteCatalog {
    /// `products.json` is required. The other files fall back to empty with
    /// a warning, the way a page keeps rendering when one fetch fails.
    pub fn load(data_dir: &Path) -> StorefrontResult<Self> {
        let products = read_fixture::<ProductsFile>(data_dir, PRODUCTS_FILE)?;
        Ok(Self {
            products,
            site: read_optional(data_dir, SITE_FILE),
            blog: read_optional(data_dir, BLOG_FILE),
            services: read_optional(data_dir, SERVICES_FILE),
        })
    }

    pub fn product(&self, id: &str) -> StorefrontResult<&Product> {
        self.products.find(id).ok_or_else(|| {
            CatalogError::ProductNotFound { id: id.to_string() }.into()
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.blog.articles
    }

    pub fn services(&self) -> &[Service] {
        &self.services.services
    }
}

fn read_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> StorefrontResult<T> {
    let path = dir.join(file);
    let unreadable = |reason: String| CatalogError::FixtureUnreadable {
        file: path.display().to_string(),
        reason,
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| unreadable(e.to_string()))?;
    let parsed = serde_json::from_str(&raw).map_err(|e| unreadable(e.to_string()))?;
    Ok(parsed)
}

fn read_optional<T: DeserializeOwned + Default>(dir: &Path, file: &str) -> T {
    match read_fixture(dir, file) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, file, "Fixture unavailable, using empty data");
            T::default()
        }
    }
}
