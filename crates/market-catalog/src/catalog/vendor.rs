//! Vendor storefronts.

use crate::catalog::{Product, VendorCategory};
use crate::ids::{ProductId, UserId, VendorId};
use serde::{Deserialize, Serialize};

/// A vendor and the products it lists, in storefront order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Display name.
    pub name: String,
    /// Category the vendor trades in.
    pub category: VendorCategory,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Account that manages this storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Products owned by this vendor.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Vendor {
    /// Create a vendor with no products.
    pub fn new(
        id: impl Into<VendorId>,
        name: impl Into<String>,
        category: VendorCategory,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rating,
            description: None,
            location: None,
            owner_id: None,
            products: Vec::new(),
        }
    }

    /// Append a product to the storefront.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner_id = Some(owner.into());
        self
    }

    /// Look up one of this vendor's products.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_vendor_products_keep_order() {
        let vendor = Vendor::new("v1", "Hill Farm", VendorCategory::Produce, 4.2)
            .with_product(Product::new("p1", "v1", "Kale", Money::new(300, Currency::USD)))
            .with_product(Product::new("p2", "v1", "Beets", Money::new(200, Currency::USD)));

        assert_eq!(vendor.product_count(), 2);
        assert_eq!(vendor.products[0].name, "Kale");
        assert_eq!(vendor.product(&ProductId::new("p2")).map(|p| p.name.as_str()), Some("Beets"));
        assert!(vendor.product(&ProductId::new("p9")).is_none());
    }

    #[test]
    fn test_vendor_deserializes_without_products() {
        let vendor: Vendor =
            serde_json::from_str(r#"{"id":"v1","name":"Loaves","category":"bakery"}"#).unwrap();
        assert_eq!(vendor.category, VendorCategory::Bakery);
        assert_eq!(vendor.rating, 0.0);
        assert!(vendor.products.is_empty());
        assert!(vendor.location.is_none());
    }

    #[test]
    fn test_vendor_profile_round_trips() {
        let vendor = Vendor::new("v2", "Thread & Co", VendorCategory::Clothing, 4.8)
            .with_location("Stall 14, North Hall")
            .with_owner("u42");
        assert_eq!(vendor.owner_id.as_ref().map(UserId::as_str), Some("u42"));

        let json = serde_json::to_string(&vendor).unwrap();
        let back: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.location.as_deref(), Some("Stall 14, North Hall"));
        assert_eq!(back, vendor);
    }
}
