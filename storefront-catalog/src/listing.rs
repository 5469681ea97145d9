//! Product listing filters and sort orders.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use storefront_core::{Product, ValidationError};

/// Similar products shown under a product detail page.
pub const SIMILAR_PRODUCTS_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Fixture order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "relevance" => Ok(Self::Relevance),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "newest" => Ok(Self::Newest),
            other => Err(ValidationError::InvalidValue {
                field: "sort".to_string(),
                reason: format!("unknown sort key '{other}'"),
            }),
        }
    }
}

/// Everything the listing and category pages let a visitor narrow by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Category from the page URL; matched case-insensitively.
    pub category: Option<String>,
    /// Category checkboxes; ignored when `category` is set.
    pub categories: Vec<String>,
    pub materials: Vec<String>,
    /// Substring of name or description, case-insensitive.
    pub search: Option<String>,
    /// Upper bound on the effective price.
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_materials<I, T>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn sort_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let page_category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        if let Some(category) = page_category {
            if !product.category.matches_ignore_case(category) {
                return false;
            }
        } else if !self.categories.is_empty() && !product.category.matches_any(&self.categories) {
            return false;
        }

        if !self.materials.is_empty() {
            match product.material.as_deref() {
                Some(material) if self.materials.iter().any(|m| m == material) => {}
                _ => return false,
            }
        }

        if let Some(term) = self
            .search
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
        {
            let in_name = product.name.to_lowercase().contains(&term);
            let in_description = product.description.to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.effective_price() > max {
                return false;
            }
        }

        true
    }

    /// Filter then sort, leaving `products` untouched.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        sort_products(&mut matched, self.sort);
        matched
    }
}

/// Stable sort by `key`; `Relevance` keeps the incoming order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    let by_price = |a: &Product, b: &Product| {
        a.effective_price()
            .partial_cmp(&b.effective_price())
            .unwrap_or(Ordering::Equal)
    };
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLow => products.sort_by(by_price),
        SortKey::PriceHigh => products.sort_by(|a, b| by_price(b, a)),
        // Undated products sort last.
        SortKey::Newest => products.sort_by(|a, b| b.added_on().cmp(&a.added_on())),
    }
}

/// Up to six other products with the same category as `current`.
///
/// When nothing shares the category, the first six other products stand in.
pub fn similar_products(products: &[Product], current: &Product) -> Vec<Product> {
    let others = || products.iter().filter(|p| p.id != current.id);
    let mut similar: Vec<Product> = others()
        .filter(|p| p.category == current.category)
        .take(SIMILAR_PRODUCTS_LIMIT)
        .cloned()
        .collect();
    if similar.is_empty() {
        similar = others().take(SIMILAR_PRODUCTS_LIMIT).cloned().collect();
    }
    similar
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_test_utils::fixtures;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let file = fixtures::products_file();
        let result = ListingQuery::new().apply(&file.products);
        assert_eq!(ids(&result), vec!["prod-1", "prod-2", "prod-3", "prod-4", "prod-5"]);
    }

    #[test]
    fn test_page_category_is_case_insensitive_and_handles_lists() {
        let file = fixtures::products_file();
        let result = ListingQuery::new()
            .in_category("wire mesh")
            .apply(&file.products);
        assert_eq!(ids(&result), vec!["prod-1", "prod-2", "prod-4"]);
    }

    #[test]
    fn test_checkbox_categories_ignored_under_page_category() {
        let file = fixtures::products_file();
        let result = ListingQuery::new()
            .in_category("Filters")
            .with_categories(["plants and Machinery"])
            .apply(&file.products);
        assert_eq!(ids(&result), vec!["prod-2"]);
    }

    #[test]
    fn test_material_and_price_filters() {
        let file = fixtures::products_file();
        let result = ListingQuery::new()
            .with_materials(["Steel"])
            .max_price(150.0)
            .apply(&file.products);
        assert_eq!(ids(&result), vec!["prod-1"]);
    }

    #[test]
    fn test_search_matches_description() {
        let file = fixtures::products_file();
        let result = ListingQuery::new().search("GRINDING").apply(&file.products);
        assert_eq!(ids(&result), vec!["prod-5"]);
    }

    #[test]
    fn test_sort_by_effective_price() {
        let file = fixtures::products_file();
        let low = ListingQuery::new()
            .sort_by(SortKey::PriceLow)
            .apply(&file.products);
        assert_eq!(ids(&low), vec!["prod-4", "prod-2", "prod-1", "prod-5", "prod-3"]);

        let high = ListingQuery::new()
            .sort_by(SortKey::PriceHigh)
            .apply(&file.products);
        assert_eq!(ids(&high), vec!["prod-3", "prod-5", "prod-1", "prod-2", "prod-4"]);
    }

    #[test]
    fn test_sort_newest_puts_undated_last() {
        let file = fixtures::products_file();
        let newest = ListingQuery::new()
            .sort_by(SortKey::Newest)
            .apply(&file.products);
        assert_eq!(ids(&newest), vec!["prod-2", "prod-5", "prod-1", "prod-3", "prod-4"]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::Relevance);
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Newest.as_str(), "newest");
    }

    #[test]
    fn test_similar_products_excludes_current() {
        let file = fixtures::products_file();
        let current = file.find("prod-1").unwrap();
        let similar = similar_products(&file.products, current);
        assert_eq!(ids(&similar), vec!["prod-4"]);
    }

    #[test]
    fn test_similar_products_falls_back_to_others() {
        let file = fixtures::products_file();
        let current = file.find("prod-2").unwrap();
        let similar = similar_products(&file.products, current);
        assert_eq!(ids(&similar), vec!["prod-1", "prod-3", "prod-4", "prod-5"]);
    }
}
