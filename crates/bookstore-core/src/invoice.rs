//! # Invoice
//!
//! VAT applied to an order's discounted total.
//!
//! ```text
//! Order.total_after_discount ──► total_before_tax      138.96
//!                                 × VAT_RATE (8%)  ──►  11.1168
//!                                 = total_after_tax     150.0768
//! ```
//!
//! All three numbers are exact; they are rounded to cents only when shown.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::money::Money;
use crate::order::Order;
use crate::types::TaxRate;

/// The store VAT: 8%.
pub const VAT_RATE: TaxRate = TaxRate::from_bps(800);

/// An invoice for exactly one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    order_id: Uuid,
    total_before_tax: Money,
    vat: Money,
    total_after_tax: Money,
}

impl Invoice {
    /// Derives the invoice from an order.
    pub fn for_order(order: &Order) -> Self {
        let total_before_tax = order.total_after_discount();
        let vat = total_before_tax.calculate_tax(VAT_RATE);

        let invoice = Invoice {
            order_id: order.id(),
            total_before_tax,
            vat,
            total_after_tax: total_before_tax + vat,
        };

        info!(
            order_id = %invoice.order_id,
            vat = %invoice.vat,
            total_after_tax = %invoice.total_after_tax,
            "Invoice generated"
        );

        invoice
    }

    /// Id of the order this invoice belongs to.
    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn total_before_tax(&self) -> Money {
        self.total_before_tax
    }

    pub fn vat(&self) -> Money {
        self.vat
    }

    pub fn total_after_tax(&self) -> Money {
        self.total_after_tax
    }

    pub fn vat_rate(&self) -> TaxRate {
        VAT_RATE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
