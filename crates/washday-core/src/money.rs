//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a laundry order:                                                    │
//! │    ₦500.00 × 1.5 express, then 2% prepay discount, then a pickup fee   │
//! │    → fractional kobo pile up unless every step lands on an integer     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kobo                                             │
//! │    Every multiplicative step (express ×1.5, discount ×0.98) rounds     │
//! │    to whole kobo BEFORE any further addition. No drift, ever.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use washday_core::money::Money;
//!
//! // Create from kobo (preferred)
//! let price = Money::from_kobo(50_000); // ₦500.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₦1,000.00
//! let total = price + Money::from_kobo(20_000);  // ₦700.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(500.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kobo for NGN).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Service.base_price_kobo ──► line total ──► items subtotal             │
/// │                                    │                                    │
/// │          express surcharge ◄───────┤                                    │
/// │          prepay discount   ◄───────┤                                    │
/// │          logistics fee     ◄───────┘                                    │
/// │                                    │                                    │
/// │                                    ▼                                    │
/// │          grand total ──► pay-now / pay-later split                     │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kobo (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let price = Money::from_kobo(50_000); // Represents ₦500.00
    /// assert_eq!(price.kobo(), 50_000);
    /// ```
    ///
    /// ## Why Kobo?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The catalog, calculations, and API all use kobo.
    /// Only the UI converts to naira for display.
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Money(kobo)
    }

    /// Creates a Money value from major and minor units (naira and kobo).
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let price = Money::from_naira_kobo(500, 50); // ₦500.50
    /// assert_eq!(price.kobo(), 50_050);
    ///
    /// let negative = Money::from_naira_kobo(-5, 50); // -₦5.50 (refund)
    /// assert_eq!(negative.kobo(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_naira_kobo(-5, 50)` = -₦5.50, not -₦4.50
    #[inline]
    pub const fn from_naira_kobo(naira: i64, kobo: i64) -> Self {
        // Handle sign: if naira is negative, kobo should subtract
        if naira < 0 {
            Money(naira * 100 - kobo)
        } else {
            Money(naira * 100 + kobo)
        }
    }

    /// Returns the value in kobo (smallest currency unit).
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (naira) portion.
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let price = Money::from_kobo(50_050);
    /// assert_eq!(price.naira(), 500);
    /// ```
    #[inline]
    pub const fn naira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kobo) portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// The parser caps line quantities well below anything that could
    /// overflow, but callers may build lines directly; a line total
    /// saturates rather than wrapping to garbage.
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let unit_price = Money::from_kobo(50_000); // ₦500.00 per shirt
    /// let line_total = unit_price.multiply_quantity(10);
    /// assert_eq!(line_total.kobo(), 500_000); // ₦5,000.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Parsed line: "10 shirts" → shirt_polo × 10
    ///      │
    ///      ▼
    /// multiply_quantity(10) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: ₦5,000.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two Money values, saturating at the i64 bounds.
    ///
    /// Used where the addends are not under our control (summing
    /// caller-built lines); ordinary pipeline arithmetic keeps the plain
    /// `+` operator.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Adds a percentage surcharge, rounding half up to whole kobo.
    ///
    /// ## Arguments
    /// * `surcharge_bps` - Surcharge in basis points (5000 = 50%)
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  EXPRESS SURCHARGE ROUNDING (Round Half Up)                         │
    /// │                                                                     │
    /// │  The express modifier is ×1.5, so on an odd kobo amount the        │
    /// │  surcharge lands on a half kobo:                                    │
    /// │    101 kobo × 50% = 50.5 kobo → rounds UP to 51                    │
    /// │                                                                     │
    /// │  Integer formula: (amount × bps + 5000) / 10000                    │
    /// │  The +5000 provides the half-up rounding (5000/10000 = 0.5)        │
    /// │                                                                     │
    /// │  For non-negative amounts this matches the checkout UI, which      │
    /// │  rounded total × 1.5 to the nearest whole unit.                    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let subtotal = Money::from_kobo(100_000); // ₦1,000.00
    /// let express = subtotal.apply_surcharge_bps(5000); // +50%
    /// assert_eq!(express.kobo(), 150_000); // ₦1,500.00
    /// ```
    pub fn apply_surcharge_bps(&self, surcharge_bps: u32) -> Money {
        // Use i128 to prevent overflow on large amounts
        let surcharge = (self.0 as i128 * surcharge_bps as i128 + 5000) / 10000;
        Money::from_kobo(self.0 + surcharge as i64)
    }

    /// Applies a percentage discount, flooring the result to whole kobo.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (200 = 2%)
    ///
    /// ## Rounding Rule
    /// The prepay discount keeps `floor(amount × (1 - rate))` - the customer
    /// never pays a fraction of a kobo more than the discounted price.
    /// This intentionally differs from the surcharge rule above; both are
    /// pinned by tests so neither drifts.
    ///
    /// ## Example
    /// ```rust
    /// use washday_core::money::Money;
    ///
    /// let total = Money::from_kobo(1_000_000); // ₦10,000.00
    /// let discounted = total.apply_discount_bps_floor(200); // 2% off
    /// assert_eq!(discounted.kobo(), 980_000); // ₦9,800.00
    /// ```
    pub fn apply_discount_bps_floor(&self, discount_bps: u32) -> Money {
        // Truncating i128 division == floor for non-negative amounts.
        // Discounts are only ever applied to non-negative totals.
        let kept = self.0 as i128 * (10000 - discount_bps as i128) / 10000;
        Money::from_kobo(kept as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₦{}.{:02}", sign, self.naira().abs(), self.kobo_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
