//! Vendor catalog types and product search for the marketplace.
//!
//! This crate provides the in-memory model of a marketplace catalog and the
//! ranking logic shared by the home search, category browse, and vendor
//! storefront pages:
//!
//! - **Catalog**: Vendors, their products, category facets, write-path checks
//! - **Search**: Substring search with stable price ranking and the
//!   lowest-price badge, vendor listings, related products, pagination
//!
//! # Example
//!
//! ```rust
//! use market_catalog::prelude::*;
//!
//! let produce = Vendor::new("v1", "Green Acres", VendorCategory::Produce, 4.5)
//!     .with_product(Product::new("p1", "v1", "Apple", Money::from_decimal(3.99, Currency::USD)))
//!     .with_product(Product::new("p2", "v1", "Pear", Money::from_decimal(4.50, Currency::USD)));
//! let catalog = Catalog::new(vec![produce]);
//!
//! let results = search(catalog.vendors(), &SearchFilters::new().with_query("apple"));
//! assert_eq!(results.len(), 1);
//! assert!(results[0].low_price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogIssue, CategoryCount, IssueKind, Product, Vendor, VendorCategory,
    };

    // Search
    pub use crate::search::{
        browse_vendor, paginate, related_products, search, Pagination, SearchFilters, SearchPage,
        SearchResultItem, RELATED_LIMIT,
    };
}
