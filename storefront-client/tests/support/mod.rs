//! Shared helpers for client integration tests.

#![allow(dead_code)]

use std::path::Path;
use storefront_client::ClientConfig;
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const INQUIRY_PATH: &str = "/api/send-inquiry";

/// A mock inquiry endpoint that answers every JSON POST with `status`,
/// expecting exactly one call.
pub async fn inquiry_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INQUIRY_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    server
}

pub fn endpoint_of(server: &MockServer) -> String {
    format!("{}{INQUIRY_PATH}", server.uri())
}

/// Body of the single request the server received.
pub async fn received_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).unwrap()
}

/// An endpoint nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/send-inquiry")
}

/// Write the four data files into `dir`.
pub fn write_fixtures(dir: &Path) {
    let products = serde_json::json!({
        "products": [
            {"id": "prod-1", "name": "Stainless Wire Mesh", "description": "Woven steel mesh",
             "price": 120.0, "salePrice": 99.0, "stock": 10, "category": "Wire Mesh",
             "material": "Steel", "images": ["img/mesh.jpg"], "tags": ["mesh"],
             "specs": {"meshSize": 40, "type": "Plain"}, "dateAdded": "2024-01-10"},
            {"id": "prod-2", "name": "Brass Filter Disc", "description": "Round filter",
             "price": 45.0, "stock": 0, "category": "Filters", "material": "Brass"},
            {"id": "prod-3", "name": "Vibrating Sieve Machine", "description": "Industrial sieve",
             "price": 2500.0, "stock": 2, "category": "plants and Machinery",
             "subCategory": "Sieving", "material": "Steel"}
        ],
        "filters": {"categories": ["Wire Mesh", "Filters"], "materials": ["Steel", "Brass"]}
    });
    let site = serde_json::json!({
        "site": {"title": "R S Trading Company",
                 "contact": {"email": "sales@example.com", "phone": "+91 11111 11111"}},
        "categories": [{"name": "Wire Mesh"}, {"name": "plants and Machinery"}],
        "footer": {"shopLinks": [{"name": "All Products", "link": "./html/listing.html"}],
                   "categories": [{"name": "plants and Machinery"}]}
    });
    let blog = serde_json::json!({
        "articles": [
            {"id": "a1", "title": "Choosing mesh size", "category": "guides", "featured": true, "tags": ["mesh"]},
            {"id": "a2", "title": "Sieve upkeep", "category": "maintenance"}
        ]
    });
    let services = serde_json::json!({
        "services": [{"id": "s1", "title": "Custom mesh cutting", "tags": ["mesh"]}]
    });
    for (file, value) in [
        ("products.json", products),
        ("data.json", site),
        ("blog.json", blog),
        ("services.json", services),
    ] {
        std::fs::write(dir.join(file), serde_json::to_string_pretty(&value).unwrap()).unwrap();
    }
}

pub fn config_for(root: &Path, endpoint: &str) -> ClientConfig {
    let raw = format!(
        r#"
data_dir = "{data}"
session_path = "{session}"
inquiry_endpoint = "{endpoint}"
request_timeout_ms = 2000
page_url = "https://example.com/html/cart.html"
listing_page_size = 2
"#,
        data = root.join("data").display(),
        session = root.join("session").join("cart.json").display(),
    );
    let config = ClientConfig::from_toml(&raw).unwrap();
    config.validate().unwrap();
    config
}
