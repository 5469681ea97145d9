//! Header search and tag pages.

use serde::Serialize;
use storefront_core::{format_price, Article, Product, Service};

/// Shortest term the header search acts on.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Most hits the header search dropdown shows.
pub const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

impl SearchHit {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.effective_price(),
            image: product.thumbnail().map(str::to_string),
        }
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// Products whose name contains `term`, case-insensitively.
///
/// Terms shorter than two characters after trimming return nothing.
pub fn header_search(products: &[Product], term: &str) -> Vec<SearchHit> {
    let term = term.trim().to_lowercase();
    if term.chars().count() < MIN_SEARCH_CHARS {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .take(MAX_SEARCH_RESULTS)
        .map(SearchHit::from_product)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaggedKind {
    Product,
    Service,
    Article,
}

impl TaggedKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Service => "Service",
            Self::Article => "Article",
        }
    }
}

/// One card on a tag results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedItem {
    pub kind: TaggedKind,
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<&Product> for TaggedItem {
    fn from(product: &Product) -> Self {
        Self {
            kind: TaggedKind::Product,
            id: product.id.clone(),
            title: product.name.clone(),
            description: product.description.clone(),
            image: product.thumbnail().map(str::to_string),
        }
    }
}

impl From<&Service> for TaggedItem {
    fn from(service: &Service) -> Self {
        Self {
            kind: TaggedKind::Service,
            id: service.id.clone(),
            title: service.title.clone(),
            description: service.excerpt.clone(),
            image: non_empty(&service.image_url),
        }
    }
}

impl From<&Article> for TaggedItem {
    fn from(article: &Article) -> Self {
        Self {
            kind: TaggedKind::Article,
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.excerpt.clone(),
            image: non_empty(&article.image_url),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Everything carrying exactly `tag`: products, then services, then articles.
pub fn tag_search(
    tag: &str,
    products: &[Product],
    services: &[Service],
    articles: &[Article],
) -> Vec<TaggedItem> {
    let has = |tags: &[String]| tags.iter().any(|t| t == tag);
    products
        .iter()
        .filter(|p| p.has_tag(tag))
        .map(TaggedItem::from)
        .chain(services.iter().filter(|s| has(&s.tags)).map(TaggedItem::from))
        .chain(articles.iter().filter(|a| has(&a.tags)).map(TaggedItem::from))
        .collect()
}
