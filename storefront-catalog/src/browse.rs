//! Blog and services grids.

use crate::pagination::{paginate, Page, BROWSE_PAGE_SIZE};
use storefront_core::{Article, Service};

/// Category chip value that disables the blog category filter.
pub const ALL_CATEGORIES: &str = "all";

fn matches_text(term: &str, title: &str, excerpt: &str) -> bool {
    term.is_empty() || title.to_lowercase().contains(term) || excerpt.to_lowercase().contains(term)
}

/// The blog page: one featured article above a filterable grid.
#[derive(Debug, Clone)]
pub struct BlogBrowser {
    featured: Option<Article>,
    articles: Vec<Article>,
}

impl BlogBrowser {
    /// The first featured article is pulled out; every featured article
    /// leaves the grid.
    pub fn new(articles: Vec<Article>) -> Self {
        let featured = articles.iter().find(|a| a.featured).cloned();
        let articles = articles.into_iter().filter(|a| !a.featured).collect();
        Self { featured, articles }
    }

    pub fn featured(&self) -> Option<&Article> {
        self.featured.as_ref()
    }

    /// Grid articles in `category` (or any, for `all`) whose title or
    /// excerpt contains `search`.
    pub fn filter(&self, category: &str, search: &str) -> Vec<Article> {
        let search = search.to_lowercase();
        self.articles
            .iter()
            .filter(|a| category == ALL_CATEGORIES || a.category == category)
            .filter(|a| matches_text(&search, &a.title, &a.excerpt))
            .cloned()
            .collect()
    }

    pub fn page(&self, category: &str, search: &str, page: usize) -> Page<Article> {
        paginate(&self.filter(category, search), page, BROWSE_PAGE_SIZE)
    }
}

#[derive(Debug, Clone)]
pub struct ServicesBrowser {
    services: Vec<Service>,
}

impl ServicesBrowser {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn filter(&self, search: &str) -> Vec<Service> {
        let search = search.to_lowercase();
        self.services
            .iter()
            .filter(|s| matches_text(&search, &s.title, &s.excerpt))
            .cloned()
            .collect()
    }

    pub fn page(&self, search: &str, page: usize) -> Page<Service> {
        paginate(&self.filter(search), page, BROWSE_PAGE_SIZE)
    }

    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_test_utils::fixtures;

    #[test]
    fn test_featured_article_leaves_grid() {
        let blog = BlogBrowser::new(fixtures::articles());
        assert_eq!(blog.featured().map(|a| a.id.as_str()), Some("a1"));
        let ids: Vec<String> = blog.filter(ALL_CATEGORIES, "").into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a2", "a3"]);
    }

    #[test]
    fn test_blog_category_and_search() {
        let blog = BlogBrowser::new(fixtures::articles());
        assert_eq!(blog.filter("guides", "").len(), 1);
        assert_eq!(blog.filter("maintenance", "BRASS").len(), 0);
        let found = blog.filter(ALL_CATEGORIES, "filters");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a3");
    }

    #[test]
    fn test_blog_pages_by_six() {
        let mut articles = Vec::new();
        for n in 0..8 {
            let mut a = fixtures::articles()[1].clone();
            a.id = format!("x{n}");
            articles.push(a);
        }
        let blog = BlogBrowser::new(articles);
        let second = blog.page(ALL_CATEGORIES, "", 2);
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.items.len(), 2);
        assert!(blog.featured().is_none());
    }

    #[test]
    fn test_services_search() {
        let services = ServicesBrowser::new(fixtures::services());
        assert_eq!(services.filter("").len(), 2);
        let hits = services.filter("on-site");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "s2");
        assert_eq!(services.page("mesh", 1).total_items, 1);
        assert!(services.find("s1").is_some());
    }
}
