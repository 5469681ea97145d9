//! Site-wide fixtures: `data.json`, `blog.json`, and `services.json`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    #[serde(default)]
    pub shop_links: Vec<NamedLink>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

/// Contents of `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub footer: FooterData,
}

impl SiteData {
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub article_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Contents of `blog.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFile {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Contents of `services.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesFile {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_data_parses_camel_case_footer() {
        let json = r#"{
            "site": {"title": "R S Trading", "contact": {"email": "sales@example.com"}},
            "categories": [{"name": "Wire Mesh"}, {"name": "plants and Machinery"}],
            "footer": {"shopLinks": [{"name": "Shop", "link": "/listing.html"}]}
        }"#;
        let data: SiteData = serde_json::from_str(json).unwrap();
        assert_eq!(data.site.contact.email, "sales@example.com");
        assert_eq!(data.category_names(), vec!["Wire Mesh", "plants and Machinery"]);
        assert_eq!(data.footer.shop_links.len(), 1);
        assert!(data.footer.categories.is_empty());
    }

    #[test]
    fn test_article_defaults() {
        let article: Article =
            serde_json::from_str(r#"{"id":"a1","title":"Choosing mesh","imageUrl":"a.jpg"}"#)
                .unwrap();
        assert!(!article.featured);
        assert_eq!(article.image_url, "a.jpg");
        assert!(article.tags.is_empty());
    }
}
