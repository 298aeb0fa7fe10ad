//! Marketplace catalog module.
//!
//! Contains vendors, their products, and the catalog that groups them for a
//! single request.

mod category;
mod product;
mod validate;
mod vendor;

pub use category::VendorCategory;
pub use product::Product;
pub use validate::{CatalogIssue, IssueKind};
pub use vendor::Vendor;

use crate::error::CatalogError;
use crate::ids::{ProductId, VendorId};
use serde::{Deserialize, Serialize};

/// The vendors and products materialized for one request.
///
/// Vendor order and product order are preserved exactly as supplied; search
/// stability is defined relative to this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    vendors: Vec<Vendor>,
}

/// Number of vendors and products in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub category: VendorCategory,
    pub vendors: usize,
    pub products: usize,
}

impl Catalog {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a catalog from TOML.
    pub fn from_toml(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Total number of products across all vendors.
    pub fn product_count(&self) -> usize {
        self.vendors.iter().map(Vendor::product_count).sum()
    }

    pub fn vendor(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    /// Like [`Catalog::vendor`], but an unknown id is an error.
    pub fn require_vendor(&self, id: &VendorId) -> Result<&Vendor, CatalogError> {
        self.vendor(id)
            .ok_or_else(|| CatalogError::VendorNotFound(id.to_string()))
    }

    /// Find a product and the vendor that owns it.
    pub fn find_product(&self, id: &ProductId) -> Option<(&Vendor, &Product)> {
        self.vendors
            .iter()
            .find_map(|v| v.product(id).map(|p| (v, p)))
    }

    /// Like [`Catalog::find_product`], but an unknown id is an error.
    pub fn require_product(&self, id: &ProductId) -> Result<(&Vendor, &Product), CatalogError> {
        self.find_product(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Distinct vendor categories in first-seen order, with counts.
    ///
    /// Categories differing only in case are counted together under the
    /// spelling seen first.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for vendor in &self.vendors {
            match counts.iter_mut().find(|c| c.category.same_as(&vendor.category)) {
                Some(count) => {
                    count.vendors += 1;
                    count.products += vendor.product_count();
                }
                None => counts.push(CategoryCount {
                    category: vendor.category.clone(),
                    vendors: 1,
                    products: vendor.product_count(),
                }),
            }
        }
        counts
    }

    /// Run write-path consistency checks. An empty list means the catalog is clean.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate::check(self)
    }
}

impl From<Vec<Vendor>> for Catalog {
    fn from(vendors: Vec<Vendor>) -> Self {
        Self::new(vendors)
    }
}
