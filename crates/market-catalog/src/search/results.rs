//! Search result items and pagination.

use crate::catalog::{Product, Vendor};
use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as it appears in a result list, with its vendor's context.
///
/// Result items are derived per search and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub vendor_rating: f64,
    /// Shares the lowest price among the current query's results.
    pub low_price: bool,
}

impl SearchResultItem {
    /// Copy a product and attach its vendor's id, name and rating.
    pub fn from_listing(vendor: &Vendor, product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            unit: product.unit.clone(),
            discount: product.discount.clone(),
            image: product.image.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            description: product.description.clone(),
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            vendor_rating: vendor.rating,
            low_price: false,
        }
    }
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub const MAX_PER_PAGE: usize = 100;

    /// Create pagination info. `page` and `per_page` are clamped into range.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.clamp(1, Self::MAX_PER_PAGE);
        let page = page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page. Saturates for pages far past the end.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// First item number on this page (1-indexed), or 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Last item number on this page, or 0 when empty.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.page.saturating_mul(self.per_page).min(self.total)
        }
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// One page of ranked results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    pub items: Vec<SearchResultItem>,
    pub pagination: Pagination,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice a ranked result list into one page.
///
/// Ranking and the lowest-price badge are computed over the whole list
/// before this is called, so a flagged item keeps its flag on any page.
pub fn paginate(items: Vec<SearchResultItem>, page: usize, per_page: usize) -> SearchPage {
    let pagination = Pagination::new(page, per_page, items.len());
    let items = items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .collect();

    SearchPage { items, pagination }
}
