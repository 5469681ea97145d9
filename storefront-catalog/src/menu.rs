//! Header category dropdown.

use serde::Serialize;
use storefront_core::{CategoryField, Product, SiteData};

/// The one category whose dropdown entry expands into subcategories.
pub const MACHINERY_CATEGORY: &str = "plants and Machinery";

/// `category=<name>` with the name percent-encoded.
pub fn category_query(name: &str) -> String {
    format!("category={}", urlencoding::encode(name))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl MenuEntry {
    /// Query string for the category page, e.g. `category=Wire%20Mesh`.
    pub fn query(&self) -> String {
        category_query(&self.name)
    }

    pub fn subcategory_query(&self, sub: &str) -> String {
        format!("{}&subcategory={}", self.query(), urlencoding::encode(sub))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryMenu {
    pub entries: Vec<MenuEntry>,
}

impl CategoryMenu {
    /// Site categories in order; the machinery entry carries the distinct
    /// subcategories of its products in first-seen order.
    pub fn build(site: &SiteData, products: &[Product]) -> Self {
        let mut machinery_subs: Vec<String> = Vec::new();
        for product in products {
            if !matches!(&product.category, CategoryField::One(name) if name == MACHINERY_CATEGORY) {
                continue;
            }
            if let Some(sub) = product.sub_category.as_deref().filter(|s| !s.is_empty()) {
                if !machinery_subs.iter().any(|s| s == sub) {
                    machinery_subs.push(sub.to_string());
                }
            }
        }

        let entries = site
            .category_names()
            .into_iter()
            .map(|name| MenuEntry {
                name: name.to_string(),
                subcategories: if name == MACHINERY_CATEGORY {
                    machinery_subs.clone()
                } else {
                    Vec::new()
                },
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_test_utils::fixtures;

    #[test]
    fn test_menu_follows_site_categories() {
        let menu = CategoryMenu::build(&fixtures::site_data(), &fixtures::products_file().products);
        let names: Vec<&str> = menu.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Wire Mesh", "Filters", "plants and Machinery"]);
    }

    #[test]
    fn test_only_machinery_gets_subcategories() {
        let menu = CategoryMenu::build(&fixtures::site_data(), &fixtures::products_file().products);
        assert_eq!(
            menu.get(MACHINERY_CATEGORY).unwrap().subcategories,
            vec!["Sieving", "Grinding"]
        );
        assert!(menu.get("Wire Mesh").unwrap().subcategories.is_empty());
    }

    #[test]
    fn test_subcategories_are_unique() {
        let mut products = fixtures::products_file().products;
        products.push(products[2].clone());
        let menu = CategoryMenu::build(&fixtures::site_data(), &products);
        assert_eq!(menu.get(MACHINERY_CATEGORY).unwrap().subcategories.len(), 2);
    }

    #[test]
    fn test_query_strings_are_encoded() {
        let entry = MenuEntry {
            name: MACHINERY_CATEGORY.to_string(),
            subcategories: vec![],
        };
        assert_eq!(entry.query(), "category=plants%20and%20Machinery");
        assert_eq!(
            entry.subcategory_query("Sieving & Grading"),
            "category=plants%20and%20Machinery&subcategory=Sieving%20%26%20Grading"
        );
    }
}
