//! Vendor categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category a vendor trades in.
///
/// Categories are free-form strings in storefront data; the common ones get
/// their own variant and anything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VendorCategory {
    Produce,
    Bakery,
    Crafts,
    Food,
    Clothing,
    Other(String),
}

impl VendorCategory {
    pub fn as_str(&self) -> &str {
        match self {
            VendorCategory::Produce => "Produce",
            VendorCategory::Bakery => "Bakery",
            VendorCategory::Crafts => "Crafts",
            VendorCategory::Food => "Food",
            VendorCategory::Clothing => "Clothing",
            VendorCategory::Other(name) => name,
        }
    }

    /// Parse a category name, ignoring case for the known categories.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "produce" => VendorCategory::Produce,
            "bakery" => VendorCategory::Bakery,
            "crafts" => VendorCategory::Crafts,
            "food" => VendorCategory::Food,
            "clothing" => VendorCategory::Clothing,
            _ => VendorCategory::Other(s.trim().to_string()),
        }
    }

    /// Case-insensitive exact comparison against a category name.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.trim().to_lowercase()
    }

    /// Case-insensitive comparison between two categories.
    pub fn same_as(&self, other: &VendorCategory) -> bool {
        self.matches(other.as_str())
    }
}

impl From<String> for VendorCategory {
    fn from(s: String) -> Self {
        VendorCategory::parse(&s)
    }
}

impl From<&str> for VendorCategory {
    fn from(s: &str) -> Self {
        VendorCategory::parse(s)
    }
}

impl From<VendorCategory> for String {
    fn from(c: VendorCategory) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(VendorCategory::parse("produce"), VendorCategory::Produce);
        assert_eq!(VendorCategory::parse("BAKERY"), VendorCategory::Bakery);
        assert_eq!(
            VendorCategory::parse("Toys"),
            VendorCategory::Other("Toys".to_string())
        );
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(VendorCategory::Produce.matches("PRODUCE"));
        assert!(VendorCategory::Other("Plants".into()).matches("plants"));
        assert!(!VendorCategory::Produce.matches("Prod"));
    }

    #[test]
    fn test_other_categories_compare_case_insensitively() {
        let a = VendorCategory::Other("Plants".into());
        let b = VendorCategory::Other("PLANTS".into());
        assert!(a.same_as(&b));
        assert!(!a.same_as(&VendorCategory::Food));
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&VendorCategory::Crafts).unwrap();
        assert_eq!(json, "\"Crafts\"");
        let back: VendorCategory = serde_json::from_str("\"crafts\"").unwrap();
        assert_eq!(back, VendorCategory::Crafts);
    }
}
