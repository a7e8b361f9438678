//! # Order
//!
//! A frozen snapshot of a priced cart.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart (mutable)                          Order (immutable)              │
//! │  ──────────────                          ─────────────────              │
//! │  items: [&A, &B]   ── Order::place ──►   total_before_discount: 68.00   │
//! │                       (prices once)      total_after_discount:  61.20   │
//! │  cart.add_item(&C)                       order_date: 2026-10-19         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  items: [&A, &B, &C]                     (unchanged)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An Order keeps no reference to its cart. Every value it reports was
//! computed when it was placed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cart::Cart;
use crate::invoice::Invoice;
use crate::money::Money;
use crate::pricing::AppliedDiscount;

/// A placed order.
///
/// Orders only come from [`Order::place`]; they serialize for output but are
/// never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    id: Uuid,
    /// Customer name at time of ordering (frozen).
    customer_name: String,
    placed_at: DateTime<Utc>,
    order_date: NaiveDate,
    item_count: usize,
    total_before_discount: Money,
    total_after_discount: Money,
    /// Discounts that were applied, in application order.
    discounts: Vec<AppliedDiscount>,
}

impl Order {
    /// Places an order for the cart's current contents, dated now.
    pub fn place(cart: &Cart<'_>) -> Self {
        Self::place_at(cart, Utc::now())
    }

    /// Places an order as of `placed_at`.
    ///
    /// The cart is priced exactly once, here.
    pub fn place_at(cart: &Cart<'_>, placed_at: DateTime<Utc>) -> Self {
        let breakdown = cart.price();

        let order = Order {
            id: Uuid::new_v4(),
            customer_name: cart.customer().name().to_string(),
            placed_at,
            order_date: placed_at.date_naive(),
            item_count: breakdown.item_count,
            total_before_discount: breakdown.subtotal,
            total_after_discount: breakdown.total_after_discount,
            discounts: breakdown.applied,
        };

        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            items = order.item_count,
            total_before_discount = %order.total_before_discount,
            total_after_discount = %order.total_after_discount,
            "Order placed"
        );

        order
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Calendar date (UTC) the order was placed on.
    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_before_discount(&self) -> Money {
        self.total_before_discount
    }

    pub fn total_after_discount(&self) -> Money {
        self.total_after_discount
    }

    pub fn discounts(&self) -> &[AppliedDiscount] {
        &self.discounts
    }

    /// Creates the invoice for this order.
    pub fn generate_invoice(&self) -> Invoice {
        Invoice::for_order(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
