//! Cart state: the current order and its derived total.

use tokio::sync::watch;

use clementine_core::{CurrencyCode, Price};

use crate::models::Order;

/// Holds the current order.
///
/// An update replaces the order wholesale - including with an empty order -
/// never merges. The total is a pure function of the current order and is
/// recomputed on every read, so it can never go stale across an update.
#[derive(Debug)]
pub struct CartStore {
    order: watch::Sender<Order>,
}

impl CartStore {
    /// Create a cart holding an empty order in the given currency.
    #[must_use]
    pub fn new(currency: CurrencyCode) -> Self {
        let (order, _) = watch::channel(Order::empty(currency));
        Self { order }
    }

    /// Replace the held order with `order`.
    pub fn update_order(&self, order: Order) {
        tracing::debug!(items = order.items.len(), "cart order replaced");
        self.order.send_replace(order);
    }

    /// Snapshot of the current order.
    #[must_use]
    pub fn order(&self) -> Order {
        self.order.borrow().clone()
    }

    /// The current order total, derived from its line items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.order.borrow().total()
    }

    /// Subscribe to order changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Order> {
        self.order.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}
