//! Catalog validation.

use anyhow::{bail, Result};

use super::CatalogArgs;
use crate::context::Context;

/// Run the validate command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let issues = catalog.validate();

    if ctx.output.is_json() {
        ctx.output.json(&issues);
    } else {
        ctx.output.header("Validating catalog");
        ctx.output.kv("vendors", &catalog.vendors().len().to_string());
        ctx.output.kv("products", &catalog.product_count().to_string());

        for issue in &issues {
            let subject = match &issue.product_id {
                Some(product) => format!("{}/{}", issue.vendor_id, product),
                None => issue.vendor_id.to_string(),
            };
            ctx.output.error(&format!("{} [{}]: {}", subject, issue.kind.as_str(), issue.message));
        }
    }

    if !issues.is_empty() {
        ctx.logger
            .warn_builder("catalog has issues")
            .field_u64("issues", issues.len() as u64)
            .emit();
        bail!("Catalog has {} issue(s)", issues.len());
    }

    ctx.output.success("Catalog is valid");
    Ok(())
}
