//! "You may also like" sampling for product detail pages.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Vendor;
use crate::ids::ProductId;
use crate::search::SearchResultItem;

/// Number of related products shown on a detail page.
pub const RELATED_LIMIT: usize = 4;

/// Pick up to `limit` products related to `product_id`.
///
/// Candidates are every other product sold by a vendor in the same category
/// as the reference product's vendor (ignoring case). The sample is drawn
/// with `rng`, so the output order is not stable across calls unless the
/// caller seeds it. An unknown product yields no candidates.
pub fn related_products<R: Rng + ?Sized>(
    catalog: &[Vendor],
    product_id: &ProductId,
    rng: &mut R,
    limit: usize,
) -> Vec<SearchResultItem> {
    let Some(owner) = catalog.iter().find(|v| v.product(product_id).is_some()) else {
        return Vec::new();
    };

    let mut candidates: Vec<SearchResultItem> = catalog
        .iter()
        .filter(|vendor| vendor.category.same_as(&owner.category))
        .flat_map(|vendor| {
            vendor
                .products
                .iter()
                .filter(move |product| &product.id != product_id)
                .map(move |product| SearchResultItem::from_listing(vendor, product))
        })
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(limit);
    candidates
}
