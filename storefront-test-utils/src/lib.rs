//! Storefront Test Utilities
//!
//! Centralized test infrastructure for the storefront workspace:
//! - Proptest generators for line items, carts, and products
//! - Fixtures mirroring the shipped JSON data files
//! - Assertions for cart invariants

// Re-export the in-memory backend from its source crate
pub use storefront_storage::MemorySessionStorage;

pub use storefront_core::{
    Article, Cart, CategoryField, LineItem, Product, ProductSpecs, ProductsFile, Service,
    SiteData, StorefrontError, StorefrontResult,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for storefront types.

    use super::*;
    use proptest::prelude::*;

    /// Product ids shaped like the catalog's (`prod-17`).
    pub fn arb_product_id() -> impl Strategy<Value = String> {
        (1u32..500).prop_map(|n| format!("prod-{n}"))
    }

    /// Prices with at most two decimals, so totals stay exact enough to compare.
    pub fn arb_price() -> impl Strategy<Value = f64> {
        (0u32..100_000).prop_map(|cents| f64::from(cents) / 100.0)
    }

    pub fn arb_qty() -> impl Strategy<Value = u32> {
        1u32..50
    }

    pub fn arb_spec_chip() -> impl Strategy<Value = String> {
        prop_oneof![
            (10u32..400).prop_map(|mesh| format!("Mesh: {mesh}")),
            "[A-Z][a-z]{2,10}".prop_map(|kind| format!("Type: {kind}")),
        ]
    }

    /// Generate a line item with the given id.
    pub fn arb_line_item_with_id(id: String) -> impl Strategy<Value = LineItem> {
        (
            "[A-Za-z ]{1,24}",
            arb_price(),
            arb_qty(),
            proptest::option::of("img/[a-z]{1,8}\\.jpg"),
            prop::collection::vec(arb_spec_chip(), 0..3),
        )
            .prop_map(move |(name, price, qty, thumbnail, specs)| LineItem {
                id: id.clone(),
                name,
                price,
                qty,
                thumbnail,
                specs,
            })
    }

    pub fn arb_line_item() -> impl Strategy<Value = LineItem> {
        arb_product_id().prop_flat_map(arb_line_item_with_id)
    }

    /// Distinct-id line items in a shuffled insertion order.
    pub fn arb_distinct_items(max: usize) -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::btree_set(arb_product_id(), 0..=max).prop_flat_map(|ids| {
            ids.into_iter()
                .map(arb_line_item_with_id)
                .collect::<Vec<_>>()
                .prop_shuffle()
        })
    }

    /// A well-formed cart.
    pub fn arb_cart() -> impl Strategy<Value = Cart> {
        arb_distinct_items(12).prop_map(Cart::from_lines)
    }

    pub fn arb_product() -> impl Strategy<Value = Product> {
        (
            arb_product_id(),
            "[A-Za-z ]{1,24}",
            arb_price(),
            proptest::option::of(arb_price()),
            -2i64..20,
            prop_oneof![Just("Wire Mesh"), Just("Filters"), Just("plants and Machinery")],
            proptest::option::of(prop_oneof![Just("Steel"), Just("Brass"), Just("Nylon")]),
        )
            .prop_map(
                |(id, name, price, sale_price, stock, category, material)| Product {
                    id,
                    name,
                    description: String::new(),
                    price,
                    sale_price,
                    stock,
                    category: CategoryField::One(category.to_string()),
                    sub_category: None,
                    material: material.map(str::to_string),
                    images: Vec::new(),
                    tags: Vec::new(),
                    specs: ProductSpecs::default(),
                    date_added: None,
                },
            )
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Fixtures shaped like the site's JSON data files.

    use super::*;

    /// A small `products.json`.
    pub fn products_file() -> ProductsFile {
        let raw = serde_json::json!({
            "products": [
                {
                    "id": "prod-1", "name": "Stainless Wire Mesh", "description": "Woven steel mesh",
                    "price": 120.0, "salePrice": 99.0, "stock": 10, "category": "Wire Mesh",
                    "material": "Steel", "images": ["img/mesh.jpg"], "tags": ["mesh", "steel"],
                    "specs": {"meshSize": 40, "type": "Plain"}, "dateAdded": "2024-01-10"
                },
                {
                    "id": "prod-2", "name": "Brass Filter Disc", "description": "Round filter",
                    "price": 45.0, "stock": 0, "category": ["Filters", "Wire Mesh"],
                    "material": "Brass", "images": ["img/disc.jpg"], "tags": ["filter"],
                    "dateAdded": "2024-03-05"
                },
                {
                    "id": "prod-3", "name": "Vibrating Sieve Machine", "description": "Industrial sieve",
                    "price": 2500.0, "stock": 2, "category": "plants and Machinery",
                    "subCategory": "Sieving", "material": "Steel", "images": [],
                    "tags": ["machine"], "dateAdded": "2023-11-20"
                },
                {
                    "id": "prod-4", "name": "Nylon Mesh Roll", "description": "Light mesh roll",
                    "price": 30.0, "salePrice": 0, "stock": 25, "category": "Wire Mesh",
                    "material": "Nylon", "images": ["img/nylon.jpg"], "tags": ["mesh"]
                },
                {
                    "id": "prod-5", "name": "Pulverizer", "description": "Grinding mill",
                    "price": 1800.0, "stock": 1, "category": "plants and Machinery",
                    "subCategory": "Grinding", "material": "Steel", "images": ["img/pulv.jpg"],
                    "dateAdded": "2024-02-14"
                }
            ],
            "filters": {
                "categories": ["Wire Mesh", "Filters", "plants and Machinery"],
                "materials": ["Steel", "Brass", "Nylon"]
            }
        });
        serde_json::from_value(raw).expect("fixture products.json is valid")
    }

    pub fn site_data() -> SiteData {
        let raw = serde_json::json!({
            "site": {
                "title": "R S Trading Company",
                "description": "Industrial mesh and machinery",
                "contact": {"email": "sales@example.com", "phone": "+91 00000 00000",
                            "address": "Industrial Area", "hours": "Mon-Sat 9-6"}
            },
            "categories": [{"name": "Wire Mesh"}, {"name": "Filters"}, {"name": "plants and Machinery"}],
            "footer": {
                "shopLinks": [{"name": "Shop", "link": "./html/listing.html"}],
                "categories": [{"name": "Wire Mesh"}]
            }
        });
        serde_json::from_value(raw).expect("fixture data.json is valid")
    }

    pub fn articles() -> Vec<Article> {
        let raw = serde_json::json!([
            {"id": "a1", "title": "Choosing mesh size", "excerpt": "A guide to mesh counts",
             "category": "guides", "featured": true, "tags": ["mesh"]},
            {"id": "a2", "title": "Sieve maintenance", "excerpt": "Keep machines running",
             "category": "maintenance", "tags": ["machine"]},
            {"id": "a3", "title": "Brass vs steel", "excerpt": "Material comparison for filters",
             "category": "guides"}
        ]);
        serde_json::from_value(raw).expect("fixture articles are valid")
    }

    pub fn services() -> Vec<Service> {
        let raw = serde_json::json!([
            {"id": "s1", "title": "Custom mesh cutting", "excerpt": "Cut to size", "tags": ["mesh"]},
            {"id": "s2", "title": "Machine installation", "excerpt": "On-site setup"}
        ]);
        serde_json::from_value(raw).expect("fixture services are valid")
    }

    pub fn line_item(id: &str, price: f64, qty: u32) -> LineItem {
        LineItem::new(id, format!("Item {id}"), price).with_qty(qty)
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for cart invariants.

    use super::*;
    use std::collections::HashSet;

    /// Assert unique ids, qty >= 1, and derived figures consistent with lines.
    #[track_caller]
    pub fn assert_cart_invariants(cart: &Cart) {
        let mut seen = HashSet::new();
        for line in cart.lines() {
            assert!(seen.insert(line.id.as_str()), "duplicate id {}", line.id);
            assert!(line.qty >= 1, "line {} has qty {}", line.id, line.qty);
            assert!(line.price >= 0.0, "line {} has price {}", line.id, line.price);
        }
        let count: u64 = cart.lines().iter().map(|l| u64::from(l.qty)).sum();
        assert_eq!(cart.count(), count);
        let total: f64 = cart.lines().iter().map(|l| l.price * f64::from(l.qty)).sum();
        assert!((cart.total() - total).abs() < 1e-6);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_products_fixture_loads() {
        let file = fixtures::products_file();
        assert_eq!(file.products.len(), 5);
        assert_eq!(file.filters.materials.len(), 3);
        assert!(file.find("prod-3").is_some());
    }

    #[test]
    fn test_site_fixture_loads() {
        let site = fixtures::site_data();
        assert_eq!(site.categories.len(), 3);
    }

    proptest! {
        #[test]
        fn generated_carts_hold_invariants(cart in generators::arb_cart()) {
            assertions::assert_cart_invariants(&cart);
        }
    }
}
