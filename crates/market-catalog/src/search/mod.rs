//! Search module.
//!
//! Contains the catalog search and ranking engine, vendor listings, related
//! products, and pagination.

mod engine;
mod filters;
mod related;
mod results;

pub use engine::{browse_vendor, search};
pub use filters::SearchFilters;
pub use related::{related_products, RELATED_LIMIT};
pub use results::{paginate, Pagination, SearchPage, SearchResultItem};
