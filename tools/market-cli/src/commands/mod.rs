//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod related;
pub mod search;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in product names.
    pub query: Option<String>,

    /// Only show vendors in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Results per page (default: search.per_page from config).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Catalog file to search instead of the configured one.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Vendor whose storefront to list.
    pub vendor_id: String,

    /// Filter the vendor's products by name.
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the related command.
#[derive(Args)]
pub struct RelatedArgs {
    /// Product to find related items for.
    pub product_id: String,

    /// Number of items to show (default: search.related_limit from config).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Seed the sampler for repeatable output.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for commands that only need a catalog.
#[derive(Args)]
pub struct CatalogArgs {
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Create a market.toml in the current directory.
    Init {
        /// Catalog file the config should point at.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,

        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
