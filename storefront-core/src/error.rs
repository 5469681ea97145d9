//! Error types for storefront operations

use thiserror::Error;

/// Session storage errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Session file {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Consent is required to submit an inquiry")]
    ConsentRequired,

    #[error("No cart items selected")]
    EmptySelection,
}

/// Catalog lookup and fixture errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Service not found: {id}")]
    ServiceNotFound { id: String },

    #[error("Product out of stock: {id}")]
    OutOfStock { id: String },

    #[error("Failed to load fixture {file}: {reason}")]
    FixtureUnreadable { file: String, reason: String },
}

/// Master error type for all storefront errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display_write_failed() {
        let err = StorageError::WriteFailed {
            key: "cartItems".to_string(),
            reason: "disk full".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Write failed"));
        assert!(msg.contains("cartItems"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_catalog_error_display_not_found() {
        let err = CatalogError::ProductNotFound {
            id: "prod-7".to_string(),
        };
        assert_eq!(format!("{}", err), "Product not found: prod-7");
    }

    #[test]
    fn test_storefront_error_from_variants() {
        let storage = StorefrontError::from(StorageError::LockPoisoned);
        assert!(matches!(storage, StorefrontError::Storage(_)));

        let validation = StorefrontError::from(ValidationError::ConsentRequired);
        assert!(matches!(validation, StorefrontError::Validation(_)));

        let catalog = StorefrontError::from(CatalogError::OutOfStock {
            id: "prod-1".to_string(),
        });
        assert!(matches!(catalog, StorefrontError::Catalog(_)));
    }

    #[test]
    fn test_validation_error_display_required_field() {
        let err = ValidationError::RequiredFieldMissing {
            field: "email".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Required field missing"));
        assert!(msg.contains("email"));
    }
}
