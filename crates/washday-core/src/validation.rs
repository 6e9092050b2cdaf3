//! # Validation Module
//!
//! Input validation utilities for Washday.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Ordering UI (TypeScript)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                            │
//! │  ├── Catalog-file field validation (keys, prices, priorities)          │
//! │  └── Business rule validation before anything is priced                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted backend                                                │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── Row-level security                                                │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the bulk-order parser does NOT validate its input - free text is
//! never invalid, only unmatched. These validators guard structured data:
//! catalog entries, keyword tables, and quantities a caller sets directly.

use crate::error::ValidationError;
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES, MAX_PRIORITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a service key (`shirt_polo`, `wedding_gown`, ...).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Lower-case alphanumeric and underscores only (the keys double as
///   stable identifiers in the hosted backend and in keyword tables)
///
/// ## Example
/// ```rust
/// use washday_core::validation::validate_service_key;
///
/// assert!(validate_service_key("shirt_polo").is_ok());
/// assert!(validate_service_key("").is_err());
/// assert!(validate_service_key("Shirt Polo").is_err());
/// ```
pub fn validate_service_key(key: &str) -> ValidationResult<()> {
    let key = key.trim();

    if key.is_empty() {
        return Err(ValidationError::Required {
            field: "service key".to_string(),
        });
    }

    if key.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "service key".to_string(),
            max: 50,
        });
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "service key".to_string(),
            reason: "must contain only lowercase letters, digits, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a service display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_service_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a keyword phrase for the matching table.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 60 characters
/// - Must already be lower-case: the matcher lowercases input lines but
///   compares keywords verbatim, so an uppercase keyword could never match
pub fn validate_keyword(keyword: &str) -> ValidationResult<()> {
    if keyword.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "keyword".to_string(),
        });
    }

    if keyword.len() > 60 {
        return Err(ValidationError::TooLong {
            field: "keyword".to_string(),
            max: 60,
        });
    }

    if keyword != keyword.to_lowercase() {
        return Err(ValidationError::InvalidFormat {
            field: "keyword".to_string(),
            reason: "must be lower-case".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity a caller sets directly.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Visual order editor: quantity stepper                                  │
/// │                                                                         │
/// │  User types quantity: 5                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       └── OK → line updates, quote recomputes                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in kobo.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
pub fn validate_price_kobo(kobo: i64) -> ValidationResult<()> {
    if kobo < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a keyword-table priority.
///
/// ## Rules
/// - Must be between 1 and MAX_PRIORITY (100)
/// - Priority only ranks overlapping matches; huge values defeat the
///   keyword-length component of the score
pub fn validate_priority(priority: u32) -> ValidationResult<()> {
    if priority < 1 || priority as i64 > MAX_PRIORITY {
        return Err(ValidationError::OutOfRange {
            field: "priority".to_string(),
            min: 1,
            max: MAX_PRIORITY,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of distinct lines in an order.
///
/// ## Rules
/// - Must not exceed MAX_ORDER_LINES (100)
pub fn validate_order_lines(count: usize) -> ValidationResult<()> {
    if count > MAX_ORDER_LINES {
        return Err(ValidationError::OutOfRange {
            field: "order lines".to_string(),
            min: 0,
            max: MAX_ORDER_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// Record ids (services, orders) are UUIDs minted by the hosted backend;
/// this catches ids mangled in transit before they reach a query.
///
/// ## Example
/// ```rust
/// use washday_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
