//! # Catalog Error Types
//!
//! Errors raised while loading and validating catalog configuration.
//!
//! Unlike the parser (which never fails), a bad catalog file IS a hard
//! error: a vocabulary that references undeclared services or carries an
//! invalid price must never reach the pricing engine.

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors from loading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Could not read the catalog file.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or does not match the schema.
    #[error("failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// A field failed core validation (key format, price range, etc.).
    #[error("invalid catalog entry: {0}")]
    Validation(#[from] washday_core::ValidationError),

    /// Two services declare the same business key.
    #[error("duplicate service key: {0}")]
    DuplicateServiceKey(String),

    /// A keyword entry references a service the catalog does not declare.
    #[error("keyword entry references unknown service key: {0}")]
    UnknownServiceKey(String),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateServiceKey("shirt_polo".to_string());
        assert_eq!(err.to_string(), "duplicate service key: shirt_polo");

        let err = CatalogError::UnknownServiceKey("lab_coat".to_string());
        assert_eq!(
            err.to_string(),
            "keyword entry references unknown service key: lab_coat"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let core_err = washday_core::ValidationError::Required {
            field: "service key".to_string(),
        };
        let err: CatalogError = core_err.into();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
