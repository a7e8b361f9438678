//! # bookstore-core: Pure Business Logic for the Bookstore
//!
//! This crate is the **heart** of the bookstore order pipeline. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Order Pipeline                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookstore-demo (scenario runner)                │   │
//! │  │          config ──► logging ──► scenarios ──► stdout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   Catalog ──► Cart ──► PricingEngine ──► Order ──► Invoice      │   │
//! │  │              (mutable)  (pure chain)    (snapshot)  (VAT 8%)    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (CatalogItem, Customer, rates)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`catalog`] - The in-memory catalog listing
//! - [`pricing`] - Loyalty → bulk discount chain
//! - [`cart`] - Shopping cart borrowing a customer and catalog items
//! - [`order`] - Frozen snapshot of a priced cart
//! - [`invoice`] - VAT applied to an order
//! - [`render`] - Human-readable text for every entity
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same input = same output
//! 2. **No I/O**: printing and configuration belong to the application
//! 3. **Decimal Money**: no binary floats, rounding only at display time
//! 4. **Explicit Errors**: invalid input is rejected by constructors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{Cart, CatalogItem, Customer, Money, Order};
//!
//! let books = [
//!     CatalogItem::new("Good Doctor", "Amber Ali", "2022-12-01", "Education", Money::from_cents(3800)).unwrap(),
//!     CatalogItem::new("Math and Simson", "Khalil Abdu", "2022-11-15", "Education", Money::from_cents(3000)).unwrap(),
//! ];
//! let customer = Customer::new("Khaled Eisse", "khaled@gmail.com", true).unwrap();
//!
//! let mut cart = Cart::new(&customer);
//! for book in &books {
//!     cart.add_item(book);
//! }
//!
//! let order = Order::place(&cart);
//! let invoice = order.generate_invoice();
//!
//! assert_eq!(order.total_after_discount().to_string(), "61.20");
//! assert_eq!(invoice.vat().to_string(), "4.90");
//! assert_eq!(invoice.total_after_tax().to_string(), "66.10");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod order;
pub mod pricing;
pub mod render;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookstore_core::Money` instead of
// `use bookstore_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, VAT_RATE};
pub use money::Money;
pub use order::Order;
pub use pricing::{PriceBreakdown, PricingEngine, PricingPolicy};
pub use render::Renderer;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency code printed in front of amounts unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "AED";

/// Largest bulk threshold a pricing policy may use.
pub const MAX_BULK_THRESHOLD: usize = 1000;

/// Highest unit price a catalog item may carry, in whole currency units.
///
/// Far above any real book price and low enough that no cart total can
/// overflow decimal arithmetic.
pub const MAX_UNIT_PRICE: i64 = 100_000_000;
