//! Category facet listing.

use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let categories = catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    if categories.is_empty() {
        ctx.output.info("Catalog is empty.");
        return Ok(());
    }

    const WIDTHS: [usize; 3] = [16, 8, 8];
    ctx.output.table_row(&["CATEGORY", "VENDORS", "PRODUCTS"], &WIDTHS);
    for count in &categories {
        ctx.output.table_row(
            &[
                count.category.as_str(),
                &count.vendors.to_string(),
                &count.products.to_string(),
            ],
            &WIDTHS,
        );
    }

    Ok(())
}
