//! Products listed by vendors.

use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in a vendor's storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Owning vendor (back-reference; the vendor owns the product).
    pub vendor_id: VendorId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Sale unit (e.g., "lb", "dozen").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Discount label shown on the card (e.g., "10% off").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    /// Image reference in object storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Available sizes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Available colors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Longer description for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with no optional attributes.
    pub fn new(
        id: impl Into<ProductId>,
        vendor_id: impl Into<VendorId>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            vendor_id: vendor_id.into(),
            name: name.into(),
            price,
            unit: None,
            discount: None,
            image: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            description: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_discount(mut self, label: impl Into<String>) -> Self {
        self.discount = Some(label.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if the product is offered in sizes or colors.
    pub fn has_variants(&self) -> bool {
        !self.sizes.is_empty() || !self.colors.is_empty()
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new("p1", "v1", "Sourdough", Money::new(650, Currency::USD))
            .with_unit("loaf")
            .with_discount("2 for $12")
            .with_description("Naturally leavened, baked daily");
        assert_eq!(product.vendor_id.as_str(), "v1");
        assert_eq!(product.description.as_deref(), Some("Naturally leavened, baked daily"));
        assert_eq!(product.unit.as_deref(), Some("loaf"));
        assert!(!product.has_variants());
    }

    #[test]
    fn test_variants() {
        let product = Product::new("p2", "v2", "Scarf", Money::new(2500, Currency::USD))
            .with_colors(vec!["Red".into(), "Blue".into()]);
        assert!(product.has_variants());
    }

    #[test]
    fn test_name_contains() {
        let product = Product::new("p3", "v1", "Granny Smith Apple", Money::default());
        assert!(product.name_contains("apple"));
        assert!(product.name_contains("smith ap"));
        assert!(!product.name_contains("pear"));
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let json = r#"{"id":"p1","vendor_id":"v1","name":"Jam","price":{"amount_cents":500}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.sizes.is_empty());
        assert!(product.image.is_none());
        assert_eq!(product.price.amount_cents, 500);
    }
}
