//! Catalog search.

use anyhow::Result;
use market_catalog::search::{paginate, search, SearchFilters, SearchPage};
use market_catalog::catalog::Catalog;
use market_observability::{SearchMetrics, SearchTimer};

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    let mut filters = SearchFilters::new();
    filters.query = args.query;
    filters.category = args.category;
    let per_page = args.per_page.unwrap_or(ctx.config.search.per_page);

    let (page, metrics) = execute(&catalog, &filters, args.page, per_page, ctx);
    metrics.log(&ctx.logger);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    let title = match (filters.normalized_query(), filters.normalized_category()) {
        (Some(q), Some(c)) => format!("Results for \"{}\" in {}", q, c),
        (Some(q), None) => format!("Results for \"{}\"", q),
        (None, Some(c)) => format!("{} vendors", c),
        (None, None) => "All products".to_string(),
    };
    ctx.output.header(&title);

    if page.pagination.total == 0 {
        ctx.output.info("No products found.");
        return Ok(());
    }

    ctx.output.results(&page.items);
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        page.pagination.start_item(),
        page.pagination.end_item(),
        page.pagination.total,
        page.pagination.page,
        page.pagination.total_pages
    ));

    Ok(())
}

/// Rank the catalog and cut out one page, timing the search.
pub fn execute(
    catalog: &Catalog,
    filters: &SearchFilters,
    page: usize,
    per_page: usize,
    ctx: &Context,
) -> (SearchPage, SearchMetrics) {
    let query = filters.normalized_query();
    let timer = SearchTimer::start(ctx.logger.request_id().clone(), "search")
        .with_query(query.as_deref())
        .with_category(filters.normalized_category());

    let ranked = search(catalog.vendors(), filters);
    let low_price_count = ranked.iter().filter(|item| item.low_price).count();
    let metrics = timer.finish(catalog.product_count(), ranked.len(), low_price_count);

    ctx.output.debug(&format!(
        "ranked {} of {} products",
        metrics.results, metrics.candidates
    ));

    (paginate(ranked, page, per_page), metrics)
}
