//! Write-path consistency checks.
//!
//! Search trusts its input; these checks are for loaders and the vendor
//! management flow to run before a catalog is served.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::ids::{ProductId, VendorId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// What kind of problem a catalog issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    NegativePrice,
    VendorMismatch,
    RatingOutOfRange,
    DuplicateProduct,
    MixedCurrency,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::NegativePrice => "negative_price",
            IssueKind::VendorMismatch => "vendor_mismatch",
            IssueKind::RatingOutOfRange => "rating_out_of_range",
            IssueKind::DuplicateProduct => "duplicate_product",
            IssueKind::MixedCurrency => "mixed_currency",
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogIssue {
    pub kind: IssueKind,
    pub vendor_id: VendorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub message: String,
}

pub(crate) fn check(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&ProductId> = HashSet::new();
    let mut currency: Option<Currency> = None;

    for vendor in catalog.vendors() {
        if !(0.0..=5.0).contains(&vendor.rating) {
            issues.push(CatalogIssue {
                kind: IssueKind::RatingOutOfRange,
                vendor_id: vendor.id.clone(),
                product_id: None,
                message: format!("rating {} is outside 0-5", vendor.rating),
            });
        }

        for product in &vendor.products {
            let issue = |kind, message| CatalogIssue {
                kind,
                vendor_id: vendor.id.clone(),
                product_id: Some(product.id.clone()),
                message,
            };

            if product.price.is_negative() {
                issues.push(issue(
                    IssueKind::NegativePrice,
                    format!("price {} is negative", product.price),
                ));
            }
            if product.vendor_id != vendor.id {
                issues.push(issue(
                    IssueKind::VendorMismatch,
                    format!("listed under {} but refers to {}", vendor.id, product.vendor_id),
                ));
            }
            if !seen.insert(&product.id) {
                issues.push(issue(
                    IssueKind::DuplicateProduct,
                    format!("product id {} appears more than once", product.id),
                ));
            }
            match currency {
                None => currency = Some(product.price.currency),
                Some(c) if c != product.price.currency => issues.push(issue(
                    IssueKind::MixedCurrency,
                    format!("priced in {} but catalog uses {}", product.price.currency, c),
                )),
                Some(_) => {}
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Vendor, VendorCategory};
    use crate::money::Money;

    #[test]
    fn test_clean_catalog_has_no_issues() {
        let catalog = Catalog::new(vec![Vendor::new("v", "V", VendorCategory::Food, 4.0)
            .with_product(Product::new("p", "v", "Salsa", Money::new(400, Currency::USD)))]);
        assert!(catalog.validate().is_empty());
        assert!(Catalog::default().validate().is_empty());
    }

    #[test]
    fn test_detects_each_problem() {
        let catalog = Catalog::new(vec![
            Vendor::new("v", "V", VendorCategory::Food, 7.5)
                .with_product(Product::new("p1", "v", "Salsa", Money::new(-1, Currency::USD)))
                .with_product(Product::new("p2", "other", "Chips", Money::new(300, Currency::USD))),
            Vendor::new("w", "W", VendorCategory::Crafts, 3.0)
                .with_product(Product::new("p1", "w", "Dupe", Money::new(100, Currency::USD)))
                .with_product(Product::new("p3", "w", "Euro", Money::new(100, Currency::EUR))),
        ]);

        let kinds: Vec<IssueKind> = catalog.validate().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::RatingOutOfRange,
                IssueKind::NegativePrice,
                IssueKind::VendorMismatch,
                IssueKind::DuplicateProduct,
                IssueKind::MixedCurrency,
            ]
        );
    }
}
