//! # washday-core: Pure Business Logic for Washday
//!
//! This crate is the **heart** of the Washday laundry-ordering platform.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Washday Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Ordering UI (React/TypeScript)                  │   │
//! │  │   Quick order ──► Visual select ──► Payment ──► Order tracking │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ washday-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  parser   │  │  pricing  │  │   │
//! │  │   │  Service  │  │   Money   │  │ keyword   │  │  quotes   │  │   │
//! │  │   │   Order   │  │  surcharge│  │ matching  │  │  splits   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            washday-catalog (Configuration Layer)                │   │
//! │  │      Loads service catalog + keyword table from JSON files      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Hosted backend (auth, storage, realtime) and the payment gateway      │
//! │  are external collaborators - out of scope here.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Service, Order, ParsedOrderLine, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`parser`] - Free-text bulk order parser with injected keyword table
//! - [`pricing`] - Order totals, express/prepay modifiers, payment splits
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in kobo (i64) to avoid float errors
//! 4. **Parsing never fails**: unmatched free text is a normal outcome, not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use washday_core::money::Money;
//! use washday_core::parser::parse_bulk_order;
//! use washday_core::pricing::calculate_total;
//! use washday_core::types::PriceList;
//!
//! let lines = parse_bulk_order("10 shirts, 5 trousers");
//!
//! let mut prices = PriceList::new();
//! prices.set("shirt_polo", Money::from_kobo(10_000));
//! prices.set("trouser", Money::from_kobo(12_000));
//!
//! // ₦1,000 + ₦600, express +50% → ₦2,400
//! let total = calculate_total(&lines, &prices, true);
//! assert_eq!(total.kobo(), 240_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parser;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use washday_core::Money` instead of
// `use washday_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use parser::{parse_bulk_order, KeywordTable, OrderParser, ServiceKeywords, UnmatchedPolicy};
pub use pricing::{calculate_total, quote, split_payment, PaymentSplit, PriceQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 currency code for every price in the system.
///
/// ## Why a constant?
/// v0.1 is naira-only, but order records carry a currency column so the
/// schema doesn't need a migration if that ever changes.
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Express (same-day) surcharge: 5000 bps = +50% on item costs only.
pub const EXPRESS_SURCHARGE_BPS: u32 = 5000;

/// Prepay discount: 200 bps = 2% off the items-with-express component.
/// Logistics fees are never discounted.
pub const PREPAY_DISCOUNT_BPS: u32 = 200;

/// Flat pickup fee: ₦2,000 in kobo.
pub const PICKUP_FEE_KOBO: i64 = 200_000;

/// Flat pickup + delivery fee: ₦4,000 in kobo.
pub const PICKUP_DELIVERY_FEE_KOBO: i64 = 400_000;

/// Postpay deposit, due when we collect the garments: ₦2,000 in kobo.
/// Equal to the pickup fee today, but a separate knob on purpose.
pub const PICKUP_DEPOSIT_KOBO: i64 = 200_000;

/// Maximum quantity on a single order line.
///
/// The parser clamps typed quantities to this cap per input line;
/// strict order creation ([`OrderItem::from_parsed_lines`]) rejects any
/// line above it.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum distinct lines in a single order.
///
/// The parser stops emitting new lines at this cap; strict order
/// creation rejects a larger batch outright.
///
/// ## Business Reason
/// Prevents runaway bulk orders; the walk-in portal caps well below this.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum keyword-table priority.
pub const MAX_PRIORITY: i64 = 100;
