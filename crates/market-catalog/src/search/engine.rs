//! Catalog search and ranking.
//!
//! Every function here is pure: it borrows the catalog, allocates a fresh
//! result list, and touches nothing else.

use crate::catalog::{Product, Vendor};
use crate::search::filters::normalize_query;
use crate::search::{SearchFilters, SearchResultItem};

/// Search a catalog.
///
/// Vendors are kept when no category is given or when their category equals
/// the filter ignoring case. Their products are kept when no query is given
/// or when the product name contains the query ignoring case. Results are
/// sorted by ascending price; equal prices keep vendor-major, product-minor
/// input order.
///
/// When the search is query-driven, every result sharing the lowest price
/// has `low_price` set. Category browsing and full-catalog listings never
/// set it.
pub fn search(catalog: &[Vendor], filters: &SearchFilters) -> Vec<SearchResultItem> {
    let query = filters.normalized_query();
    let category = filters.normalized_category();

    let listings = catalog
        .iter()
        .filter(|vendor| category.map_or(true, |c| vendor.category.matches(c)))
        .flat_map(|vendor| vendor.products.iter().map(move |product| (vendor, product)));

    let mut results = rank(listings, query.as_deref());
    if query.is_some() {
        mark_low_price(&mut results);
    }
    results
}

/// List one vendor's products for its management page.
///
/// Uses the same matching and ordering as [`search`] but never awards the
/// lowest-price badge.
pub fn browse_vendor(vendor: &Vendor, query: Option<&str>) -> Vec<SearchResultItem> {
    let query = normalize_query(query);
    rank(
        vendor.products.iter().map(|product| (vendor, product)),
        query.as_deref(),
    )
}

fn rank<'a>(
    listings: impl Iterator<Item = (&'a Vendor, &'a Product)>,
    query: Option<&str>,
) -> Vec<SearchResultItem> {
    let mut results: Vec<SearchResultItem> = listings
        .filter(|(_, product)| query.map_or(true, |q| product.name_contains(q)))
        .map(|(vendor, product)| SearchResultItem::from_listing(vendor, product))
        .collect();

    // sort_by is stable; ties stay in enumeration order.
    results.sort_by(|a, b| a.price.cmp_amount(&b.price));
    results
}

/// Flag every item that shares the minimum price. Expects `results` sorted.
fn mark_low_price(results: &mut [SearchResultItem]) {
    let Some(min) = results.first().map(|item| item.price.amount_cents) else {
        return;
    };
    for item in results
        .iter_mut()
        .take_while(|item| item.price.amount_cents == min)
    {
        item.low_price = true;
    }
}
