//! Market CLI - search and inspect marketplace catalogs.
//!
//! Commands:
//! - `market search` - Search products by name and category
//! - `market browse` - List one vendor's storefront
//! - `market related` - Sample related products for a product
//! - `market categories` - Show category counts
//! - `market validate` - Check a catalog for write-path problems
//! - `market config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CatalogArgs, ConfigArgs, RelatedArgs, SearchArgs};

/// Market CLI - search and inspect marketplace catalogs
#[derive(Parser)]
#[command(name = "market")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products across all vendors
    Search(SearchArgs),

    /// List a vendor's products
    Browse(BrowseArgs),

    /// Show products related to a product
    Related(RelatedArgs),

    /// Show vendor categories with counts
    Categories(CatalogArgs),

    /// Check a catalog for problems
    Validate(CatalogArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ctx.output
        .debug(&format!("request {}", ctx.logger.request_id()));

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Related(args) => commands::related::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
