//! Vendor storefront listing.

use anyhow::Result;
use market_catalog::search::browse_vendor;
use market_catalog::VendorId;
use market_observability::SearchTimer;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::stars;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let vendor = catalog.require_vendor(&VendorId::new(args.vendor_id))?;

    let timer = SearchTimer::start(ctx.logger.request_id().clone(), "browse")
        .with_query(args.query.as_deref())
        .with_category(Some(vendor.category.as_str()));
    let listing = browse_vendor(vendor, args.query.as_deref());
    timer
        .finish(vendor.product_count(), listing.len(), 0)
        .log(&ctx.logger);

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&vendor.name);
    ctx.output.kv("category", vendor.category.as_str());
    ctx.output.kv("rating", &format!("{} {:.1}", stars(vendor.rating), vendor.rating));
    if let Some(location) = &vendor.location {
        ctx.output.kv("location", location);
    }
    if let Some(description) = &vendor.description {
        ctx.output.kv("about", description);
    }
    ctx.output.info("");

    if listing.is_empty() {
        ctx.output.info("No products listed.");
    } else {
        ctx.output.results(&listing);
    }

    Ok(())
}
