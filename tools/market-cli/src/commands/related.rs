//! Related products for a product detail page.

use anyhow::Result;
use market_catalog::search::related_products;
use market_catalog::ProductId;
use market_observability::SearchTimer;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::RelatedArgs;
use crate::context::Context;

/// Run the related command.
pub async fn run(args: RelatedArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let product_id = ProductId::new(args.product_id);
    let (vendor, product) = catalog.require_product(&product_id)?;
    let limit = args.limit.unwrap_or(ctx.config.search.related_limit);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let timer = SearchTimer::start(ctx.logger.request_id().clone(), "related")
        .with_category(Some(vendor.category.as_str()));
    let related = related_products(catalog.vendors(), &product_id, &mut rng, limit);
    timer
        .finish(catalog.product_count(), related.len(), 0)
        .log(&ctx.logger);

    if ctx.output.is_json() {
        ctx.output.json(&related);
        return Ok(());
    }

    ctx.output.header(&format!("Related to {} ({})", product.name, vendor.name));
    if related.is_empty() {
        ctx.output.info(&format!(
            "No other products in the {} category.",
            vendor.category
        ));
    } else {
        ctx.output.results(&related);
    }

    Ok(())
}
