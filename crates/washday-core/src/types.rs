//! # Domain Types
//!
//! Core domain types used throughout Washday.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Service      │   │     Order       │   │ ParsedOrderLine │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  service_key    │       │
//! │  │  key (business) │   │  status         │   │  quantity       │       │
//! │  │  name           │   │  payment_status │   │  text (display) │       │
//! │  │  base_price_kobo│   │  total_kobo     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ LogisticsOption │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  None           │   │  Received       │   │  Prepay         │       │
//! │  │  Pickup         │   │  Processing     │   │  Postpay        │       │
//! │  │  PickupDelivery │   │  Ready          │   └─────────────────┘       │
//! │  └─────────────────┘   │  Delivered      │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, owned by the hosted backend
//! - Business ID: (service key, etc.) - human-readable, potentially mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_order_lines, validate_quantity};
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES, PICKUP_DELIVERY_FEE_KOBO, PICKUP_FEE_KOBO};

// =============================================================================
// Service (Catalog Entry)
// =============================================================================

/// A priceable laundry service item, as configured in the service catalog.
///
/// Supplied to the core as an immutable snapshot by the caller - the core
/// never fetches or caches catalog data itself.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Service {
    /// Unique identifier (UUID v4), owned by the hosted backend.
    pub id: String,

    /// Stable business key, e.g. `shirt_polo`, `wedding_gown`.
    pub key: String,

    /// Display name shown to customers and on receipts.
    pub name: String,

    /// Price in kobo (smallest currency unit).
    pub base_price_kobo: i64,

    /// Pricing unit, e.g. "item", "kg".
    pub unit: String,

    /// Optional description for the ordering UI.
    pub description: Option<String>,

    /// Whether the service is currently offered (soft delete).
    pub is_active: bool,
}

impl Service {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_kobo(self.base_price_kobo)
    }
}

// =============================================================================
// Parsed Order Line
// =============================================================================

/// One recognized service in a bulk-order text, quantity-aggregated.
///
/// Produced by the order-text parser. `text` carries the raw input that
/// matched, joined with `", "` when several lines aggregate into one -
/// it is display-only and deliberately NOT re-parseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParsedOrderLine {
    /// Service key from the keyword table, e.g. `shirt_polo`.
    pub service_key: String,

    /// Aggregated quantity, always positive.
    pub quantity: i64,

    /// Raw input text for display ("10 shirts, 5 polos").
    pub text: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The processing status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, garments not yet in the facility.
    Received,
    /// Garments are being cleaned.
    Processing,
    /// Ready for pickup or delivery.
    Ready,
    /// Handed back to the customer.
    Delivered,
}

impl OrderStatus {
    /// The canonical progression shown on the order timeline.
    pub const SEQUENCE: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Processing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// Returns the next status in the timeline, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Human-readable label for receipts and status emails.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Processing => "Processing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Received
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// The payment state of an order, driven by the payment gateway callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting payment (or awaiting the deferred balance).
    Pending,
    /// Gateway confirmed the payment.
    Confirmed,
    /// Gateway reported a failure.
    Failed,
    /// Payment was refunded.
    Refunded,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Whether the customer pays the full (discounted) amount upfront or a
/// partial amount now with the remainder due later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Full payment upfront; earns the prepay discount.
    Prepay,
    /// Pickup deposit now, balance on delivery/collection.
    Postpay,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Prepay
    }
}

// =============================================================================
// Logistics Option
// =============================================================================

/// Delivery arrangement with an associated flat fee.
///
/// ## Fee Schedule
/// ```text
/// None           → ₦0      (customer drops off and collects)
/// Pickup         → ₦2,000  (we collect, customer picks up)
/// PickupDelivery → ₦4,000  (we collect and deliver back)
/// ```
/// This is a static schedule, not computed from distance or weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsOption {
    /// Self drop-off and collection - no logistics leg.
    None,
    /// We pick up the garments.
    Pickup,
    /// We pick up and deliver back.
    PickupDelivery,
}

impl LogisticsOption {
    /// Flat logistics fee for this option.
    ///
    /// The fee is never discounted and never surcharged - it is added to
    /// the order total after all item-level modifiers.
    #[inline]
    pub const fn fee(&self) -> Money {
        match self {
            LogisticsOption::None => Money::zero(),
            LogisticsOption::Pickup => Money::from_kobo(PICKUP_FEE_KOBO),
            LogisticsOption::PickupDelivery => Money::from_kobo(PICKUP_DELIVERY_FEE_KOBO),
        }
    }

    /// Whether this option includes a pickup leg (drives the postpay
    /// deposit rule - no pickup leg means no deferred payment).
    #[inline]
    pub const fn has_pickup_leg(&self) -> bool {
        !matches!(self, LogisticsOption::None)
    }
}

impl Default for LogisticsOption {
    fn default() -> Self {
        LogisticsOption::None
    }
}

// =============================================================================
// Pricing Modifiers
// =============================================================================

/// Caller-supplied order modifiers, as a closed struct.
///
/// The checkout UI used to pass these as a loose string-keyed record; here
/// the recognized options are enumerated so an unknown modifier cannot
/// silently change a price.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingModifiers {
    /// Same-day processing: +50% on item costs only.
    pub express_service: bool,
    /// Delivery arrangement and its flat fee.
    pub logistics_option: LogisticsOption,
    /// Prepay (discounted, upfront) vs postpay (deposit + balance).
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Price List
// =============================================================================

/// Immutable service-key → price snapshot consumed by the pricing engine.
///
/// Built by the catalog layer from active services. Keys absent from the
/// snapshot price at zero - a missing catalog entry is a visible pricing
/// anomaly for the caller, never a hard failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceList(HashMap<String, i64>);

impl PriceList {
    /// Creates an empty price list.
    pub fn new() -> Self {
        PriceList(HashMap::new())
    }

    /// Sets the price for a service key.
    pub fn set(&mut self, key: impl Into<String>, price: Money) {
        self.0.insert(key.into(), price.kobo());
    }

    /// Returns the price for a key, or zero when the key is unknown.
    pub fn price_of(&self, key: &str) -> Money {
        Money::from_kobo(self.0.get(key).copied().unwrap_or(0))
    }

    /// Whether the snapshot has a price for this key.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of priced services.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, i64)> for PriceList {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        PriceList(iter.into_iter().collect())
    }
}

// =============================================================================
// Order Records
// =============================================================================

/// A customer order as persisted by the hosted backend.
///
/// The core never writes these - they exist so every collaborator (UI,
/// storage, email) shares one shape for an order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub address_id: Option<String>,
    pub total_kobo: i64,
    /// ISO 4217 code, "NGN" everywhere today.
    pub currency: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub logistics_option: LogisticsOption,
    pub logistics_fee_kobo: i64,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_kobo(self.total_kobo)
    }
}

/// A line item in an order.
/// Uses snapshot pricing: the unit price is frozen at order time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    /// Catalog service id, if the line resolved to a known service.
    pub service_id: Option<String>,
    /// Display description ("10 shirts, 5 polos").
    pub description: String,
    pub quantity: i64,
    /// Unit price in kobo at order time (frozen).
    pub unit_price_kobo: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_kobo(self.unit_price_kobo)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Builds an order item from a parsed line and its catalog service.
    ///
    /// The raw parsed text becomes the display description; the service's
    /// current price is frozen into the item.
    pub fn from_parsed_line(order_id: &str, line: &ParsedOrderLine, service: &Service) -> Self {
        OrderItem {
            id: String::new(), // assigned by the backend on insert
            order_id: order_id.to_string(),
            service_id: Some(service.id.clone()),
            description: line.text.clone(),
            quantity: line.quantity,
            unit_price_kobo: service.base_price_kobo,
        }
    }

    /// Builds the order items for a whole batch of parsed lines, strictly.
    ///
    /// The parser is forgiving; persisting an order is not. Every line
    /// must resolve to a catalog service, quantities must sit within the
    /// per-line cap (aggregation can push a merged line past it), and the
    /// batch must fit the order line limit. The first violation aborts the
    /// batch - nothing is half-created.
    pub fn from_parsed_lines(
        order_id: &str,
        lines: &[ParsedOrderLine],
        services: &[Service],
    ) -> CoreResult<Vec<OrderItem>> {
        validate_order_lines(lines.len())
            .map_err(|_| CoreError::TooManyLines { max: MAX_ORDER_LINES })?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            validate_quantity(line.quantity).map_err(|err| match err {
                ValidationError::OutOfRange { .. } => CoreError::QuantityTooLarge {
                    requested: line.quantity,
                    max: MAX_LINE_QUANTITY,
                },
                other => CoreError::Validation(other),
            })?;

            let service = services
                .iter()
                .find(|s| s.key == line.service_key && s.is_active)
                .ok_or_else(|| CoreError::ServiceNotFound(line.service_key.clone()))?;

            items.push(OrderItem::from_parsed_line(order_id, line, service));
        }

        Ok(items)
    }
}

/// An audit event on an order (status change, payment, staff note).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderEvent {
    pub id: String,
    pub order_id: String,
    /// Event discriminator, e.g. "status_changed", "payment_confirmed".
    pub event_type: String,
    pub note: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_timeline() {
        assert_eq!(OrderStatus::Received.next(), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::Processing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert_eq!(OrderStatus::SEQUENCE.len(), 4);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Received);
    }

    #[test]
    fn test_logistics_fee_schedule() {
        assert_eq!(LogisticsOption::None.fee().kobo(), 0);
        assert_eq!(LogisticsOption::Pickup.fee().kobo(), 200_000);
        assert_eq!(LogisticsOption::PickupDelivery.fee().kobo(), 400_000);
    }

    #[test]
    fn test_logistics_pickup_leg() {
        assert!(!LogisticsOption::None.has_pickup_leg());
        assert!(LogisticsOption::Pickup.has_pickup_leg());
        assert!(LogisticsOption::PickupDelivery.has_pickup_leg());
    }

    #[test]
    fn test_enum_wire_format() {
        // The hosted backend stores these as snake_case strings
        assert_eq!(
            serde_json::to_string(&LogisticsOption::PickupDelivery).unwrap(),
            "\"pickup_delivery\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Postpay).unwrap(),
            "\"postpay\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Received).unwrap(),
            "\"received\""
        );
    }

    #[test]
    fn test_price_list_missing_key_is_zero() {
        let mut prices = PriceList::new();
        prices.set("shirt_polo", Money::from_kobo(50_000));

        assert_eq!(prices.price_of("shirt_polo").kobo(), 50_000);
        assert_eq!(prices.price_of("unknown_service").kobo(), 0);
        assert!(!prices.contains("unknown_service"));
    }

    #[test]
    fn test_order_item_from_parsed_line() {
        let service = Service {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            key: "shirt_polo".to_string(),
            name: "Shirt / Polo".to_string(),
            base_price_kobo: 50_000,
            unit: "item".to_string(),
            description: None,
            is_active: true,
        };
        let line = ParsedOrderLine {
            service_key: "shirt_polo".to_string(),
            quantity: 10,
            text: "10 shirts".to_string(),
        };

        let item = OrderItem::from_parsed_line("order-1", &line, &service);
        assert_eq!(item.quantity, 10);
        assert_eq!(item.unit_price_kobo, 50_000);
        assert_eq!(item.line_total().kobo(), 500_000);
        assert_eq!(item.description, "10 shirts");
    }

    fn service(key: &str, price: i64, active: bool) -> Service {
        Service {
            id: format!("id-{key}"),
            key: key.to_string(),
            name: key.to_string(),
            base_price_kobo: price,
            unit: "item".to_string(),
            description: None,
            is_active: active,
        }
    }

    fn parsed(key: &str, qty: i64) -> ParsedOrderLine {
        ParsedOrderLine {
            service_key: key.to_string(),
            quantity: qty,
            text: format!("{qty} {key}"),
        }
    }

    #[test]
    fn test_from_parsed_lines_builds_full_batch() {
        let services = vec![service("shirt_polo", 50_000, true), service("trouser", 60_000, true)];
        let lines = vec![parsed("shirt_polo", 10), parsed("trouser", 5)];

        let items = OrderItem::from_parsed_lines("order-1", &lines, &services)
            .expect("batch should build");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit_price_kobo, 50_000);
        assert_eq!(items[1].quantity, 5);
    }

    #[test]
    fn test_from_parsed_lines_rejects_unknown_service() {
        let services = vec![service("shirt_polo", 50_000, true)];
        let lines = vec![parsed("shirt_polo", 1), parsed("mystery_service", 1)];

        let err = OrderItem::from_parsed_lines("order-1", &lines, &services).unwrap_err();
        assert!(matches!(err, CoreError::ServiceNotFound(key) if key == "mystery_service"));
    }

    #[test]
    fn test_from_parsed_lines_rejects_inactive_service() {
        // A retired service stays in the catalog file but cannot be ordered
        let services = vec![service("shirt_polo", 50_000, false)];
        let lines = vec![parsed("shirt_polo", 1)];

        let err = OrderItem::from_parsed_lines("order-1", &lines, &services).unwrap_err();
        assert!(matches!(err, CoreError::ServiceNotFound(_)));
    }

    #[test]
    fn test_from_parsed_lines_rejects_over_cap_quantity() {
        // Aggregation can merge several capped lines past the per-line cap;
        // strict order creation is where that gets caught
        let services = vec![service("shirt_polo", 50_000, true)];
        let lines = vec![parsed("shirt_polo", 1998)];

        let err = OrderItem::from_parsed_lines("order-1", &lines, &services).unwrap_err();
        assert!(matches!(
            err,
            CoreError::QuantityTooLarge { requested: 1998, max: 999 }
        ));
    }

    #[test]
    fn test_from_parsed_lines_rejects_non_positive_quantity() {
        let services = vec![service("shirt_polo", 50_000, true)];
        let lines = vec![parsed("shirt_polo", 0)];

        let err = OrderItem::from_parsed_lines("order-1", &lines, &services).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_from_parsed_lines_rejects_too_many_lines() {
        let services: Vec<Service> =
            (0..120).map(|i| service(&format!("svc_{i}"), 10_000, true)).collect();
        let lines: Vec<ParsedOrderLine> =
            (0..120).map(|i| parsed(&format!("svc_{i}"), 1)).collect();

        let err = OrderItem::from_parsed_lines("order-1", &lines, &services).unwrap_err();
        assert!(matches!(err, CoreError::TooManyLines { max: 100 }));
    }
}
