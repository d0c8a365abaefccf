//! Order domain types.
//!
//! An order is replaced wholesale on every cart update; its total is
//! always derived from the line items, never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::{CurrencyCode, OrderId, Price, ProductId};

/// A single product line in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: u32,
    /// Price of a single unit, in the order's currency.
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    /// The line subtotal (quantity times unit price).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// The current order held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend order ID, absent until the order has been submitted.
    pub id: Option<OrderId>,
    /// Currency all line items are denominated in.
    pub currency: CurrencyCode,
    /// Ordered line items.
    pub items: Vec<LineItem>,
    /// When the order was started.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// An order with no line items in the given currency.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            id: None,
            currency,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the order has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The order total, recomputed from the line items on every call.
    ///
    /// The empty order totals to the zero price in the order's currency.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount = self.items.iter().map(LineItem::subtotal).sum();
        Price::new(amount, self.currency)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::empty(CurrencyCode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product: i32, quantity: u32, unit_price: i64) -> LineItem {
        LineItem::new(ProductId::new(product), quantity, Decimal::from(unit_price))
    }

    #[test]
    fn empty_order_totals_to_zero() {
        let order = Order::empty(CurrencyCode::RUB);
        assert_eq!(order.total(), Price::zero(CurrencyCode::RUB));
        assert_eq!(order.total().display(), "0 ₽");
    }

    #[test]
    fn total_sums_quantity_times_unit_price() {
        let mut order = Order::empty(CurrencyCode::RUB);
        order.items = vec![item(1, 2, 300), item(2, 1, 120)];
        assert_eq!(order.total().amount, Decimal::from(720));
        assert_eq!(order.total().display(), "720 ₽");
    }
}
