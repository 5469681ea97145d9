//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storefront_catalog::SortKey;

/// Browse the catalog, manage the session cart, and send inquiries.
#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config. Falls back to STOREFRONT_CONFIG.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the cart with subtotals and the total.
    Show,
    /// Add one unit of a catalog product.
    Add { product_id: String },
    /// Raise a line's quantity by one.
    Inc { id: String },
    /// Lower a line's quantity by one, never below one.
    Dec { id: String },
    /// Set a line's quantity; values below one become one.
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove one or more lines.
    Remove {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Search product names.
    Search { term: String },
    /// Filtered, sorted, paged product listing.
    List(ListArgs),
    /// Everything carrying a tag.
    Tag { tag: String },
    /// The category menu.
    Categories,
    /// Blog articles.
    Blog(BlogArgs),
    /// Services.
    Services(ServicesArgs),
    /// Send an inquiry about selected cart lines.
    Inquire(InquireArgs),
    /// Shop links, category links, and contact details.
    Footer,
    /// Open the contact form, optionally about one service.
    Contact {
        #[arg(long)]
        service: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value = "relevance")]
    pub sort: SortKey,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long = "material")]
    pub materials: Vec<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub max_price: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct BlogArgs {
    #[arg(long, default_value = "all")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ServicesArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Clone)]
pub struct InquireArgs {
    /// Cart line ids to include.
    #[arg(required = true)]
    pub ids: Vec<String>,
    #[arg(long = "name")]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long = "type")]
    pub inquiry_type: String,
    #[arg(long)]
    pub message: String,
    #[arg(long)]
    pub contact_method: Option<String>,
    #[arg(long, default_value_t = false)]
    pub consent: bool,
}
