//! # Pricing Engine
//!
//! Computes the monetary breakdown of an order from parsed lines, a price
//! snapshot, and caller-supplied modifiers.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Pricing Pipeline                            │
//! │                                                                         │
//! │  parsed lines × price list                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items subtotal ──► express? ×1.5 (round half up)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepay? -2% (floor) ── items-with-express component ONLY              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  + logistics fee (flat; never discounted, never surcharged)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  grand total ──► pay-now / pay-later split                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No State Machine
//! Everything here is a pure function pipeline, recomputed from current
//! inputs on every change. There is no pricing session object; identical
//! inputs always produce identical output, from any thread.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LogisticsOption, ParsedOrderLine, PaymentMethod, PriceList, PricingModifiers};
use crate::{EXPRESS_SURCHARGE_BPS, PICKUP_DEPOSIT_KOBO, PREPAY_DISCOUNT_BPS};

// =============================================================================
// Subtotals and Modifiers
// =============================================================================

/// Sums `price × quantity` over the parsed lines.
///
/// Lines whose key is absent from the snapshot contribute zero - a missing
/// catalog entry surfaces as a total that looks too low, never as an error.
/// Lines may be caller-built, so the sum saturates rather than wrapping.
pub fn items_subtotal(lines: &[ParsedOrderLine], prices: &PriceList) -> Money {
    lines.iter().fold(Money::zero(), |acc, line| {
        acc.saturating_add(prices.price_of(&line.service_key).multiply_quantity(line.quantity))
    })
}

/// Applies the express (+50%) surcharge when enabled; identity otherwise.
///
/// Express applies to the pre-discount, pre-logistics item subtotal only.
/// Rounding is half-up to whole kobo - see [`Money::apply_surcharge_bps`].
pub fn apply_express(subtotal: Money, express_enabled: bool) -> Money {
    if express_enabled {
        subtotal.apply_surcharge_bps(EXPRESS_SURCHARGE_BPS)
    } else {
        subtotal
    }
}

/// Items subtotal with the optional express surcharge.
///
/// This is the original two-argument checkout contract: no logistics, no
/// discount - the new-order screen shows this figure live as lines change.
///
/// ## Example
/// ```rust
/// use washday_core::money::Money;
/// use washday_core::parser::parse_bulk_order;
/// use washday_core::pricing::calculate_total;
/// use washday_core::types::PriceList;
///
/// let mut prices = PriceList::new();
/// prices.set("shirt_polo", Money::from_kobo(10_000));
///
/// let lines = parse_bulk_order("10 shirts");
/// assert_eq!(calculate_total(&lines, &prices, false).kobo(), 100_000);
/// assert_eq!(calculate_total(&lines, &prices, true).kobo(), 150_000);
/// ```
pub fn calculate_total(lines: &[ParsedOrderLine], prices: &PriceList, express_enabled: bool) -> Money {
    apply_express(items_subtotal(lines, prices), express_enabled)
}

/// Items-with-express plus the flat logistics fee.
pub fn order_total(
    lines: &[ParsedOrderLine],
    prices: &PriceList,
    express_enabled: bool,
    logistics: LogisticsOption,
) -> Money {
    calculate_total(lines, prices, express_enabled) + logistics.fee()
}

/// Grand total under the prepay discount.
///
/// The flat 2% discount applies to the items-with-express component only,
/// floored to whole kobo; the logistics fee is added undiscounted.
pub fn prepay_discounted_total(
    lines: &[ParsedOrderLine],
    prices: &PriceList,
    express_enabled: bool,
    logistics: LogisticsOption,
) -> Money {
    calculate_total(lines, prices, express_enabled).apply_discount_bps_floor(PREPAY_DISCOUNT_BPS)
        + logistics.fee()
}

// =============================================================================
// Payment Split
// =============================================================================

/// How much is due now versus on delivery/collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentSplit {
    /// Due at order time.
    pub pay_now: Money,
    /// Due when the garments come back.
    pub pay_later: Money,
}

/// Splits a grand total into pay-now / pay-later.
///
/// ## Rules
/// ```text
/// prepay                      → pay everything now
/// postpay + pickup leg        → ₦2,000 deposit now, balance later
/// postpay + self drop-off     → pay everything now (nothing to defer
///                               against - we never hold the garments
///                               without either payment or a pickup fee)
/// ```
/// On orders smaller than the deposit, the deposit clamps to the grand
/// total so `pay_now + pay_later == grand_total` always holds.
pub fn split_payment(
    method: PaymentMethod,
    logistics: LogisticsOption,
    grand_total: Money,
) -> PaymentSplit {
    match method {
        PaymentMethod::Prepay => PaymentSplit {
            pay_now: grand_total,
            pay_later: Money::zero(),
        },
        PaymentMethod::Postpay if logistics.has_pickup_leg() => {
            let deposit = Money::from_kobo(PICKUP_DEPOSIT_KOBO).min(grand_total);
            PaymentSplit {
                pay_now: deposit,
                pay_later: grand_total - deposit,
            }
        }
        PaymentMethod::Postpay => PaymentSplit {
            pay_now: grand_total,
            pay_later: Money::zero(),
        },
    }
}

// =============================================================================
// Full Quote
// =============================================================================

/// The complete monetary breakdown the checkout screens render.
///
/// Derived, never stored: the hosted backend persists only the totals it
/// needs, and every UI change recomputes the quote from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceQuote {
    /// Sum of `price × quantity` over the lines.
    pub items_subtotal_kobo: i64,
    /// Express surcharge amount (0 when express is off).
    pub express_surcharge_kobo: i64,
    /// Flat logistics fee for the selected option.
    pub logistics_fee_kobo: i64,
    /// Prepay discount amount (0 for postpay).
    pub discount_kobo: i64,
    /// items + express - discount + logistics.
    pub grand_total_kobo: i64,
    /// Due at order time.
    pub pay_now_kobo: i64,
    /// Due on delivery/collection.
    pub pay_later_kobo: i64,
}

/// Computes the full quote for a set of lines under the given modifiers.
///
/// ## Example
/// ```rust
/// use washday_core::money::Money;
/// use washday_core::parser::parse_bulk_order;
/// use washday_core::pricing::quote;
/// use washday_core::types::{LogisticsOption, PaymentMethod, PriceList, PricingModifiers};
///
/// let mut prices = PriceList::new();
/// prices.set("shirt_polo", Money::from_kobo(50_000));
///
/// let lines = parse_bulk_order("10 shirts");
/// let q = quote(&lines, &prices, &PricingModifiers {
///     express_service: false,
///     logistics_option: LogisticsOption::PickupDelivery,
///     payment_method: PaymentMethod::Prepay,
/// });
///
/// assert_eq!(q.items_subtotal_kobo, 500_000);
/// assert_eq!(q.discount_kobo, 10_000);           // 2% of items
/// assert_eq!(q.grand_total_kobo, 890_000);       // 490_000 + 400_000
/// assert_eq!(q.pay_now_kobo, q.grand_total_kobo); // prepay: all upfront
/// ```
pub fn quote(
    lines: &[ParsedOrderLine],
    prices: &PriceList,
    modifiers: &PricingModifiers,
) -> PriceQuote {
    let items = items_subtotal(lines, prices);
    let with_express = apply_express(items, modifiers.express_service);
    let express_surcharge = with_express - items;
    let fee = modifiers.logistics_option.fee();

    let discounted_items = match modifiers.payment_method {
        PaymentMethod::Prepay => with_express.apply_discount_bps_floor(PREPAY_DISCOUNT_BPS),
        PaymentMethod::Postpay => with_express,
    };
    let discount = with_express - discounted_items;

    let grand_total = discounted_items + fee;
    let split = split_payment(modifiers.payment_method, modifiers.logistics_option, grand_total);

    PriceQuote {
        items_subtotal_kobo: items.kobo(),
        express_surcharge_kobo: express_surcharge.kobo(),
        logistics_fee_kobo: fee.kobo(),
        discount_kobo: discount.kobo(),
        grand_total_kobo: grand_total.kobo(),
        pay_now_kobo: split.pay_now.kobo(),
        pay_later_kobo: split.pay_later.kobo(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_bulk_order;

    fn line(key: &str, qty: i64) -> ParsedOrderLine {
        ParsedOrderLine {
            service_key: key.to_string(),
            quantity: qty,
            text: format!("{qty} {key}"),
        }
    }

    fn test_prices() -> PriceList {
        let mut prices = PriceList::new();
        prices.set("shirt_polo", Money::from_kobo(10_000));
        prices.set("trouser", Money::from_kobo(12_000));
        prices.set("wedding_gown", Money::from_kobo(500_000));
        prices
    }

    #[test]
    fn test_items_subtotal() {
        let lines = vec![line("shirt_polo", 10), line("trouser", 5)];
        // 10 × 10_000 + 5 × 12_000 = 160_000
        assert_eq!(items_subtotal(&lines, &test_prices()).kobo(), 160_000);
    }

    #[test]
    fn test_missing_price_contributes_zero() {
        let lines = vec![line("shirt_polo", 2), line("mystery_service", 100)];
        assert_eq!(items_subtotal(&lines, &test_prices()).kobo(), 20_000);
    }

    #[test]
    fn test_huge_typed_quantity_prices_at_line_cap() {
        // End to end: the largest i64 typed as a quantity must still price
        // cleanly (the parser clamps it to the per-line cap)
        let lines = parse_bulk_order("9223372036854775807 shirts");
        assert_eq!(items_subtotal(&lines, &test_prices()).kobo(), 999 * 10_000);
        assert_eq!(calculate_total(&lines, &test_prices(), true).kobo(), 999 * 10_000 * 3 / 2);
    }

    #[test]
    fn test_caller_built_extreme_lines_saturate() {
        // Lines built directly (not via the parser) can carry any i64;
        // the subtotal pins at the i64 ceiling instead of wrapping negative
        let lines = vec![line("wedding_gown", i64::MAX), line("shirt_polo", i64::MAX)];
        let subtotal = items_subtotal(&lines, &test_prices());
        assert_eq!(subtotal.kobo(), i64::MAX);
        assert!(!subtotal.is_negative());
    }

    #[test]
    fn test_express_scenario() {
        // Items subtotal ₦1,000 → express total ₦1,500
        let lines = vec![line("shirt_polo", 10)];
        assert_eq!(calculate_total(&lines, &test_prices(), false).kobo(), 100_000);
        assert_eq!(calculate_total(&lines, &test_prices(), true).kobo(), 150_000);
    }

    #[test]
    fn test_pricing_additivity_non_express() {
        // Non-express totals are linear: total(a ∪ b) == total(a) + total(b)
        let a = vec![line("shirt_polo", 7)];
        let b = vec![line("trouser", 3)];
        let both = vec![line("shirt_polo", 7), line("trouser", 3)];
        let prices = test_prices();

        let sum = calculate_total(&a, &prices, false) + calculate_total(&b, &prices, false);
        assert_eq!(calculate_total(&both, &prices, false), sum);
    }

    #[test]
    fn test_order_total_adds_flat_fee() {
        let lines = vec![line("shirt_polo", 10)];
        let prices = test_prices();

        assert_eq!(order_total(&lines, &prices, false, LogisticsOption::None).kobo(), 100_000);
        assert_eq!(order_total(&lines, &prices, false, LogisticsOption::Pickup).kobo(), 300_000);
        assert_eq!(
            order_total(&lines, &prices, true, LogisticsOption::PickupDelivery).kobo(),
            550_000
        );
    }

    #[test]
    fn test_prepay_discount_scenario() {
        // floor(1_000_000 × 0.98) + 400_000 = 1_380_000
        let lines = vec![line("shirt_polo", 100)];
        let prices = test_prices();
        let total =
            prepay_discounted_total(&lines, &prices, false, LogisticsOption::PickupDelivery);
        assert_eq!(total.kobo(), 1_380_000);
    }

    #[test]
    fn test_logistics_never_discounted() {
        // Only the items component shrinks under prepay; the fee is intact
        let lines = vec![line("shirt_polo", 10)];
        let prices = test_prices();
        let total = prepay_discounted_total(&lines, &prices, false, LogisticsOption::Pickup);
        // floor(100_000 × 0.98) = 98_000, + 200_000 fee
        assert_eq!(total.kobo(), 298_000);
    }

    #[test]
    fn test_split_postpay_pickup_scenario() {
        // Grand total 520_000, postpay, pickup → 200_000 now, 320_000 later
        let split = split_payment(
            PaymentMethod::Postpay,
            LogisticsOption::Pickup,
            Money::from_kobo(520_000),
        );
        assert_eq!(split.pay_now.kobo(), 200_000);
        assert_eq!(split.pay_later.kobo(), 320_000);
    }

    #[test]
    fn test_split_prepay_pays_everything_now() {
        let split = split_payment(
            PaymentMethod::Prepay,
            LogisticsOption::PickupDelivery,
            Money::from_kobo(890_000),
        );
        assert_eq!(split.pay_now.kobo(), 890_000);
        assert_eq!(split.pay_later.kobo(), 0);
    }

    #[test]
    fn test_split_postpay_self_dropoff_has_no_deferral() {
        let split = split_payment(
            PaymentMethod::Postpay,
            LogisticsOption::None,
            Money::from_kobo(520_000),
        );
        assert_eq!(split.pay_now.kobo(), 520_000);
        assert_eq!(split.pay_later.kobo(), 0);
    }

    #[test]
    fn test_split_deposit_clamps_on_small_orders() {
        // An order below the ₦2,000 deposit never produces a negative balance
        let split = split_payment(
            PaymentMethod::Postpay,
            LogisticsOption::Pickup,
            Money::from_kobo(150_000),
        );
        assert_eq!(split.pay_now.kobo(), 150_000);
        assert_eq!(split.pay_later.kobo(), 0);
    }

    #[test]
    fn test_quote_prepay_express_pickup_delivery() {
        let lines = vec![line("shirt_polo", 10)]; // items 100_000
        let prices = test_prices();
        let q = quote(
            &lines,
            &prices,
            &PricingModifiers {
                express_service: true,
                logistics_option: LogisticsOption::PickupDelivery,
                payment_method: PaymentMethod::Prepay,
            },
        );

        assert_eq!(q.items_subtotal_kobo, 100_000);
        assert_eq!(q.express_surcharge_kobo, 50_000);
        assert_eq!(q.logistics_fee_kobo, 400_000);
        assert_eq!(q.discount_kobo, 3_000); // 2% of 150_000
        assert_eq!(q.grand_total_kobo, 547_000);
        assert_eq!(q.pay_now_kobo, 547_000);
        assert_eq!(q.pay_later_kobo, 0);
    }

    #[test]
    fn test_quote_postpay_has_no_discount() {
        let lines = vec![line("shirt_polo", 10)];
        let prices = test_prices();
        let q = quote(
            &lines,
            &prices,
            &PricingModifiers {
                express_service: false,
                logistics_option: LogisticsOption::Pickup,
                payment_method: PaymentMethod::Postpay,
            },
        );

        assert_eq!(q.discount_kobo, 0);
        assert_eq!(q.grand_total_kobo, 300_000);
        assert_eq!(q.pay_now_kobo, 200_000);
        assert_eq!(q.pay_later_kobo, 100_000);
        // The split always reassembles into the grand total
        assert_eq!(q.pay_now_kobo + q.pay_later_kobo, q.grand_total_kobo);
    }

    #[test]
    fn test_quote_empty_order_is_all_zeros_plus_fee() {
        let prices = test_prices();
        let q = quote(
            &[],
            &prices,
            &PricingModifiers {
                express_service: true,
                logistics_option: LogisticsOption::Pickup,
                payment_method: PaymentMethod::Postpay,
            },
        );

        assert_eq!(q.items_subtotal_kobo, 0);
        assert_eq!(q.express_surcharge_kobo, 0);
        assert_eq!(q.grand_total_kobo, 200_000);
    }
}
