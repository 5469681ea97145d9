//! Footer shared by every page.

use crate::menu::category_query;
use serde::Serialize;
use storefront_core::SiteData;

/// Fallback owner name for the copyright line.
const DEFAULT_OWNER: &str = "R S Trading Company";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub shop_links: Vec<FooterLink>,
    pub categories: Vec<FooterLink>,
    /// Email, phone, address, and hours, skipping blanks.
    pub contact: Vec<String>,
    pub copyright: String,
}

impl Footer {
    /// Category links point at `category.html` relative to `base`, which is
    /// `./` from inner pages and `./html/` from the site root.
    pub fn build(site: &SiteData, base: &str, year: i32) -> Self {
        let shop_links = site
            .footer
            .shop_links
            .iter()
            .map(|link| FooterLink {
                name: link.name.clone(),
                href: link.link.clone(),
            })
            .collect();

        let categories = site
            .footer
            .categories
            .iter()
            .map(|cat| FooterLink {
                name: cat.name.clone(),
                href: format!("{base}category.html?{}", category_query(&cat.name)),
            })
            .collect();

        let info = &site.site.contact;
        let contact = [&info.email, &info.phone, &info.address, &info.hours]
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect();

        let owner = if site.site.title.trim().is_empty() {
            DEFAULT_OWNER
        } else {
            site.site.title.trim()
        };

        Self {
            shop_links,
            categories,
            contact,
            copyright: format!("© {year} {owner}. All rights reserved."),
        }
    }
}
