//! Catalog product model as shipped in `products.json`.

use crate::cart::LineItem;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A product's category: a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(String),
    Many(Vec<String>),
}

impl Default for CategoryField {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl CategoryField {
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::One(name) => vec![name.as_str()],
            Self::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn matches_ignore_case(&self, category: &str) -> bool {
        self.names()
            .iter()
            .any(|name| name.eq_ignore_ascii_case(category))
    }

    /// Exact membership test against any of `categories`.
    pub fn matches_any(&self, categories: &[String]) -> bool {
        self.names()
            .iter()
            .any(|name| categories.iter().any(|c| c == name))
    }

    pub fn primary(&self) -> &str {
        match self {
            Self::One(name) => name,
            Self::Many(names) => names.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// Free-form spec values; numeric mesh sizes appear in the fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_size: Option<serde_json::Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<serde_json::Value>,
}

fn spec_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl ProductSpecs {
    /// Display chips carried onto a cart line, e.g. `Mesh: 40`.
    pub fn chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if let Some(mesh) = self.mesh_size.as_ref().and_then(spec_text) {
            chips.push(format!("Mesh: {mesh}"));
        }
        if let Some(kind) = self.kind.as_ref().and_then(spec_text) {
            chips.push(format!("Type: {kind}"));
        }
        chips
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: CategoryField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub specs: ProductSpecs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl Product {
    /// Sale price when set and non-zero, otherwise the list price.
    pub fn effective_price(&self) -> f64 {
        let price = match self.sale_price {
            Some(sale) if sale != 0.0 && sale.is_finite() => sale,
            _ => self.price,
        };
        if price.is_finite() && price > 0.0 {
            price
        } else {
            0.0
        }
    }

    pub fn is_on_sale(&self) -> bool {
        matches!(self.sale_price, Some(sale) if sale != 0.0 && sale.is_finite())
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parsed `dateAdded`, accepting RFC 3339 timestamps or bare dates.
    pub fn added_on(&self) -> Option<NaiveDate> {
        let raw = self.date_added.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Snapshot this product as a single-quantity cart line.
    pub fn to_line_item(&self) -> LineItem {
        let line = LineItem::new(&self.id, &self.name, self.effective_price())
            .with_specs(self.specs.chips());
        match self.thumbnail() {
            Some(thumb) => line.with_thumbnail(thumb),
            None => line,
        }
    }
}

/// Filter vocabularies shipped alongside the product list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilters {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
}

/// Contents of `products.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub filters: CatalogFilters,
}

impl ProductsFile {
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json() -> &'static str {
        r#"{
            "id": "prod-3",
            "name": "Stainless Wire Mesh",
            "description": "Woven mesh",
            "price": 120.0,
            "salePrice": 99.5,
            "stock": 4,
            "category": ["Wire Mesh", "Filters"],
            "material": "Steel",
            "images": ["img/mesh.jpg", "img/mesh-2.jpg"],
            "tags": ["mesh"],
            "specs": {"meshSize": 40, "type": "Plain weave"},
            "dateAdded": "2024-03-01"
        }"#
    }

    #[test]
    fn test_product_to_line_item_snapshot() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        let line = product.to_line_item();
        assert_eq!(line.id, "prod-3");
        assert_eq!(line.qty, 1);
        assert!((line.price - 99.5).abs() < f64::EPSILON);
        assert_eq!(line.thumbnail.as_deref(), Some("img/mesh.jpg"));
        assert_eq!(line.specs, vec!["Mesh: 40", "Type: Plain weave"]);
    }

    #[test]
    fn test_effective_price_ignores_zero_sale() {
        let mut product: Product = serde_json::from_str(product_json()).unwrap();
        product.sale_price = Some(0.0);
        assert!((product.effective_price() - 120.0).abs() < f64::EPSILON);
        assert!(!product.is_on_sale());
        product.sale_price = None;
        assert!((product.effective_price() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_field_accepts_string_or_list() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        assert!(product.category.matches_ignore_case("filters"));
        assert_eq!(product.category.primary(), "Wire Mesh");

        let single: CategoryField = serde_json::from_str(r#""Tools""#).unwrap();
        assert!(single.matches_ignore_case("TOOLS"));
        assert!(single.matches_any(&["Tools".to_string()]));
    }

    #[test]
    fn test_added_on_parses_both_formats() {
        let mut product: Product = serde_json::from_str(product_json()).unwrap();
        assert_eq!(product.added_on(), NaiveDate::from_ymd_opt(2024, 3, 1));
        product.date_added = Some("2024-05-02T10:00:00Z".to_string());
        assert_eq!(product.added_on(), NaiveDate::from_ymd_opt(2024, 5, 2));
        product.date_added = Some("yesterday".to_string());
        assert_eq!(product.added_on(), None);
    }

    #[test]
    fn test_line_item_without_image_or_specs() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p","name":"Plain","price":5}"#).unwrap();
        let line = product.to_line_item();
        assert_eq!(line.thumbnail, None);
        assert!(line.specs.is_empty());
    }
}
