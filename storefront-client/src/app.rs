//! Command execution against one session.

use crate::cli::{BlogArgs, Command, InquireArgs, ListArgs, ServicesArgs};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::fixtures::SiteCatalog;
use crate::inquiry::{selected_products_text, ContactModal, InquiryForm, InquiryPayload};
use crate::notifications::Notification;
use crate::submit::InquirySubmitter;
use chrono::{Datelike, Utc};
use storefront_cart::{CartEvent, CartStore};
use storefront_catalog::search::MIN_SEARCH_CHARS;
use storefront_catalog::{
    header_search, paginate, tag_search, BlogBrowser, CategoryMenu, Footer, FooterLink,
    ListingQuery, Page, ServicesBrowser,
};
use storefront_core::{format_price, Cart, CatalogError, StorefrontError};
use storefront_storage::FileSessionStorage;
use tokio::sync::broadcast;

/// What a command printed and the toast it raised, if any.
#[derive(Debug, Default)]
pub struct Report {
    pub lines: Vec<String>,
    pub notification: Option<Notification>,
}

impl Report {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn notify(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}

pub struct Storefront {
    config: ClientConfig,
    catalog: SiteCatalog,
    cart: CartStore<FileSessionStorage>,
    submitter: InquirySubmitter,
}

impl Storefront {
    pub fn open(config: ClientConfig) -> Result<Self, ClientError> {
        let catalog = SiteCatalog::load(&config.data_dir)?;
        let cart = CartStore::new(FileSessionStorage::new(&config.session_path));
        let submitter = InquirySubmitter::new(&config)?;
        tracing::debug!(
            products = catalog.products.products.len(),
            session = %config.session_path.display(),
            "Storefront opened"
        );
        Ok(Self {
            config,
            catalog,
            cart,
            submitter,
        })
    }

    pub fn cart(&self) -> &CartStore<FileSessionStorage> {
        &self.cart
    }

    pub async fn execute(&self, command: Command) -> Result<Report, ClientError> {
        let events = self.cart.subscribe();
        let mut report = match command {
            Command::Show => self.show(),
            Command::Add { product_id } => {
                let product = self.catalog.product(&product_id)?;
                if !product.in_stock() {
                    return Err(StorefrontError::from(CatalogError::OutOfStock {
                        id: product.id.clone(),
                    })
                    .into());
                }
                self.cart.add_product(product)?;
                Report::default().notify(Notification::added_to_cart())
            }
            Command::Inc { id } => self.adjust(&id, 1)?,
            Command::Dec { id } => self.adjust(&id, -1)?,
            Command::Set { id, qty } => {
                let cart = self.cart.set_qty(&id, qty)?;
                Self::line_report(&cart, &id)
            }
            Command::Remove { ids } => {
                if ids.len() == 1 {
                    self.cart.remove(&ids[0])?;
                    Report::default().notify(Notification::item_removed())
                } else {
                    self.cart.remove_many(ids)?;
                    Report::default().notify(Notification::selected_removed())
                }
            }
            Command::Search { term } => self.search(&term),
            Command::List(args) => self.list(args),
            Command::Tag { tag } => self.tag(&tag),
            Command::Categories => self.categories(),
            Command::Blog(args) => self.blog(args),
            Command::Services(args) => self.services(args),
            Command::Inquire(args) => self.inquire(args).await?,
            Command::Footer => self.footer(),
            Command::Contact { service } => self.contact(service.as_deref())?,
        };
        Self::drain_badge(events, &mut report);
        Ok(report)
    }

    fn drain_badge(mut events: broadcast::Receiver<CartEvent>, report: &mut Report) {
        let mut latest = None;
        while let Ok(event) = events.try_recv() {
            latest = Some(event);
        }
        if let Some(event) = latest {
            report.push(format!(
                "Cart ({}) {}",
                event.badge_text(),
                event.summary().formatted_total()
            ));
        }
    }

    fn show(&self) -> Report {
        let cart = self.cart.load();
        let mut report = Report::default();
        if cart.is_empty() {
            report.push("Your cart is empty");
            return report;
        }
        for line in cart.lines() {
            let mut row = format!(
                "{}  {}  {}",
                line.id,
                line.selection_label(),
                format_price(line.subtotal())
            );
            if !line.specs.is_empty() {
                row.push_str(&format!("  [{}]", line.specs.join(", ")));
            }
            report.push(row);
        }
        let summary = cart.summary();
        report.push(format!("Items: {}", summary.count));
        report.push(format!("Total: {}", summary.formatted_total()));
        report
    }

    fn adjust(&self, id: &str, delta: i64) -> Result<Report, ClientError> {
        let cart = self.cart.change_qty(id, delta)?;
        Ok(Self::line_report(&cart, id))
    }

    fn line_report(cart: &Cart, id: &str) -> Report {
        let mut report = Report::default();
        match cart.get(id) {
            Some(line) => report.push(line.selection_label()),
            None => report.push(format!("{id} is not in the cart")),
        }
        report
    }

    fn search(&self, term: &str) -> Report {
        let hits = header_search(&self.catalog.products.products, term);
        let mut report = Report::default();
        if hits.is_empty() && term.trim().chars().count() >= MIN_SEARCH_CHARS {
            report.push("No products found");
        }
        for hit in hits {
            report.push(format!("{}  {}  {}", hit.id, hit.name, hit.formatted_price()));
        }
        report
    }

    fn list(&self, args: ListArgs) -> Report {
        let mut query = ListingQuery::new()
            .with_materials(args.materials)
            .sort_by(args.sort);
        query.category = args.category;
        query.search = args.search;
        query.max_price = args.max_price;

        let matched = query.apply(&self.catalog.products.products);
        let page = paginate(&matched, args.page, self.config.listing_page_size);
        let mut report = Report::default();
        report.push(page.results_label("products"));
        for product in &page.items {
            let mut row = format!(
                "{}  {}  {}",
                product.id,
                product.name,
                format_price(product.effective_price())
            );
            if product.is_on_sale() {
                row.push_str(&format!(" (was {})", format_price(product.price)));
            }
            if !product.in_stock() {
                row.push_str("  out of stock");
            }
            report.push(row);
        }
        if let Some(pager) = pager_line(&page) {
            report.push(pager);
        }
        report
    }

    fn tag(&self, tag: &str) -> Report {
        let items = tag_search(
            tag,
            &self.catalog.products.products,
            self.catalog.services(),
            self.catalog.articles(),
        );
        let mut report = Report::default();
        if items.is_empty() {
            report.push(format!("No content found with the tag \"{tag}\"."));
        }
        for item in items {
            report.push(format!("{}  {}  {}", item.kind.label(), item.id, item.title));
        }
        report
    }

    fn categories(&self) -> Report {
        let menu = CategoryMenu::build(&self.catalog.site, &self.catalog.products.products);
        let mut report = Report::default();
        for entry in &menu.entries {
            report.push(entry.name.clone());
            for sub in &entry.subcategories {
                report.push(format!("  {sub}"));
            }
        }
        report
    }

    fn blog(&self, args: BlogArgs) -> Report {
        let blog = BlogBrowser::new(self.catalog.articles().to_vec());
        let mut report = Report::default();
        if let Some(featured) = blog.featured() {
            report.push(format!("Featured: {}", featured.title));
        }
        let page = blog.page(&args.category, &args.search, args.page);
        for article in &page.items {
            report.push(format!("{}  {}  {}", article.id, article.category, article.title));
        }
        if let Some(pager) = pager_line(&page) {
            report.push(pager);
        }
        report
    }

    fn services(&self, args: ServicesArgs) -> Report {
        let services = ServicesBrowser::new(self.catalog.services().to_vec());
        let page = services.page(&args.search, args.page);
        let mut report = Report::default();
        for service in &page.items {
            report.push(format!("{}  {}", service.id, service.title));
        }
        if let Some(pager) = pager_line(&page) {
            report.push(pager);
        }
        report
    }

    fn footer(&self) -> Report {
        let footer = Footer::build(&self.catalog.site, "./html/", Utc::now().year());
        let mut report = Report::default();
        let link_rows = |report: &mut Report, heading: &str, links: &[FooterLink]| {
            if links.is_empty() {
                return;
            }
            report.push(heading.to_string());
            for link in links {
                report.push(format!("  {}  {}", link.name, link.href));
            }
        };
        link_rows(&mut report, "Shop Links", &footer.shop_links);
        link_rows(&mut report, "Categories", &footer.categories);
        if !footer.contact.is_empty() {
            report.push("Contact Info");
            for line in &footer.contact {
                report.push(format!("  {line}"));
            }
        }
        report.push(footer.copyright);
        report
    }

    fn contact(&self, service_id: Option<&str>) -> Result<Report, ClientError> {
        let modal = match service_id {
            Some(id) => {
                let services = ServicesBrowser::new(self.catalog.services().to_vec());
                let service = services.find(id).ok_or_else(|| {
                    StorefrontError::from(CatalogError::ServiceNotFound { id: id.to_string() })
                })?;
                ContactModal::for_service(service)
            }
            None => ContactModal::general(),
        };
        let mut report = Report::default();
        report.push(format!("Subject: {}", modal.subject));
        let info = &self.catalog.site.site.contact;
        for line in [&info.email, &info.phone] {
            if !line.trim().is_empty() {
                report.push(format!("  {line}"));
            }
        }
        Ok(report)
    }

    async fn inquire(&self, args: InquireArgs) -> Result<Report, ClientError> {
        let form = InquiryForm {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            inquiry_type: args.inquiry_type,
            message: args.message,
            contact_method: args.contact_method,
        };
        let cart = self.cart.load();
        let payload = InquiryPayload::build(
            &cart,
            args.ids.as_slice(),
            form,
            args.consent,
            self.config.page_url.as_str(),
            Utc::now(),
        )?;

        let mut report = Report::default();
        report.push(selected_products_text(&payload.selected_items));
        self.submitter.submit(&payload).await?;
        Ok(report.notify(Notification::inquiry_sent()))
    }
}

fn pager_line<T>(page: &Page<T>) -> Option<String> {
    if page.total_pages <= 1 {
        return None;
    }
    let numbers: Vec<String> = page
        .window()
        .pages()
        .into_iter()
        .map(|n| {
            if n == page.page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();
    Some(format!("Pages: {}", numbers.join(" ")))
}
