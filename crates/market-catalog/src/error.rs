//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or querying a catalog.
///
/// The search operations themselves are total; these errors come from
/// materializing a catalog or from id lookups.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Vendor not found.
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog source could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Catalog failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts_to_parse() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::ProductNotFound("p-9".to_string());
        assert_eq!(err.to_string(), "Product not found: p-9");
    }
}
