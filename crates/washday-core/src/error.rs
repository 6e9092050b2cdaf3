//! # Error Types
//!
//! Domain-specific error types for washday-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  washday-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  washday-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Catalog file loading/validation failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (service key, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. The order-text parser NEVER errors - absence of a match is a normal,
//!    representable outcome, not a failure

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic
/// failures. They should be caught and translated to user-friendly
/// messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Service key is not declared in the catalog snapshot.
    ///
    /// ## When This Occurs
    /// - Strict order creation finds a line whose key has no active service
    /// - A keyword-table entry references a key the catalog doesn't declare
    /// - An `UnmatchedPolicy::DefaultTo` key was removed from the catalog
    ///
    /// Note this is NOT raised during pricing: a recognized key with no
    /// price contributes zero there by contract.
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// A line's quantity exceeds the per-line cap at order creation.
    /// Aggregation can merge several parser-capped lines past the cap;
    /// this is where that surfaces.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// An order batch has more distinct lines than allowed.
    #[error("Order cannot have more than {max} lines")]
    TooManyLines { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied data doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, uppercase keyword).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate service key).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
