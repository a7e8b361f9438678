//! # Cart
//!
//! The shopping cart: one customer, an ordered list of catalog items.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart<'a> Borrows                                 │
//! │                                                                         │
//! │  Customer ◄──────── &'a Customer ───────┐                              │
//! │                                         │                               │
//! │  Catalog                              Cart<'a>                          │
//! │  ├── Good Doctor  ◄── &'a CatalogItem ──┤ items[0]                     │
//! │  ├── Cyber Sec.                         │                               │
//! │  └── Open Soul    ◄── &'a CatalogItem ──┤ items[1]                     │
//! │                   ◄── &'a CatalogItem ──┘ items[2] (duplicate ok)      │
//! │                                                                         │
//! │  The cart owns only the Vec of references. The borrow checker          │
//! │  guarantees the catalog and customer outlive it.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! A cart has exactly one owner. Sharing one between threads needs an
//! external `Mutex`; nothing here locks.

use tracing::debug;

use crate::money::Money;
use crate::pricing::{PriceBreakdown, PricingEngine};
use crate::types::{CatalogItem, Customer};

/// A shopping cart tied to one customer.
///
/// ## Invariants
/// - Items keep insertion order
/// - The same item may appear any number of times; each copy counts towards
///   the bulk threshold
/// - Removal is by reference identity, not by value
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    customer: &'a Customer,
    items: Vec<&'a CatalogItem>,
    engine: PricingEngine,
}

impl<'a> Cart<'a> {
    /// Creates an empty cart priced with the store's default discount chain.
    pub fn new(customer: &'a Customer) -> Self {
        Self::with_engine(customer, PricingEngine::default())
    }

    /// Creates an empty cart priced with a custom engine.
    pub fn with_engine(customer: &'a Customer, engine: PricingEngine) -> Self {
        Cart {
            customer,
            items: Vec::new(),
            engine,
        }
    }

    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[&'a CatalogItem] {
        &self.items
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Appends an item. Duplicates are allowed.
    pub fn add_item(&mut self, item: &'a CatalogItem) {
        self.items.push(item);
        debug!(title = item.title(), items = self.items.len(), "Item added to cart");
    }

    /// Removes the first entry that is the very same catalog item.
    ///
    /// An equal-looking but distinct `CatalogItem` is not removed. Removing an
    /// item that is not in the cart is a no-op.
    ///
    /// ## Returns
    /// `true` if an entry was removed.
    pub fn remove_item(&mut self, item: &CatalogItem) -> bool {
        match self.items.iter().position(|held| std::ptr::eq(*held, item)) {
            Some(index) => {
                self.items.remove(index);
                debug!(title = item.title(), items = self.items.len(), "Item removed from cart");
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of entries, duplicates counted individually.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unit prices of the current items, in cart order.
    pub fn unit_prices(&self) -> impl Iterator<Item = Money> + '_ {
        self.items.iter().map(|item| item.unit_price())
    }

    /// Prices the cart and returns the full breakdown.
    pub fn price(&self) -> PriceBreakdown {
        self.engine
            .price(self.unit_prices(), self.customer.is_loyalty_member())
    }

    /// Returns `(subtotal, total_after_discount)`.
    ///
    /// Reads the cart only; calling it twice without changes in between
    /// returns identical results.
    pub fn compute_totals(&self) -> (Money, Money) {
        self.engine
            .compute_totals(self.unit_prices(), self.customer.is_loyalty_member())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::pricing::PricingPolicy;
    use rust_decimal_macros::dec;

    fn book(title: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(title, "Author", "2020-01-01", "Genre", Money::from_cents(cents)).unwrap()
    }

    fn customer(member: bool) -> Customer {
        Customer::new("Mahra", "Mahra@gmail.com", member).unwrap()
    }

    #[test]
    fn test_cart_add_item() {
        let buyer = customer(false);
        let a = book("A", 3800);
        let mut cart = Cart::new(&buyer);

        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.compute_totals().0, Money::from_cents(7600));
        assert!(std::ptr::eq(cart.customer(), &buyer));
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let buyer = customer(false);
        let (a, b) = (book("A", 100), book("B", 200));
        let mut cart = Cart::new(&buyer);
        cart.add_item(&b);
        cart.add_item(&a);

        let titles: Vec<&str> = cart.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_remove_item_removes_one_occurrence() {
        let buyer = customer(false);
        let a = book("A", 1000);
        let mut cart = Cart::new(&buyer);
        cart.add_item(&a);
        cart.add_item(&a);

        assert!(cart.remove_item(&a));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let buyer = customer(false);
        let a = book("A", 1000);
        let b = book("B", 2000);
        let mut cart = Cart::new(&buyer);
        cart.add_item(&a);

        assert!(!cart.remove_item(&b));
        assert_eq!(cart.item_count(), 1);

        let mut empty = Cart::new(&buyer);
        assert!(!empty.remove_item(&a));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_uses_identity_not_equality() {
        let buyer = customer(false);
        let original = book("Twin", 1000);
        let lookalike = original.clone();
        assert_eq!(original, lookalike);

        let mut cart = Cart::new(&buyer);
        cart.add_item(&original);

        assert!(!cart.remove_item(&lookalike));
        assert!(cart.remove_item(&original));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_compute_totals_is_idempotent() {
        let buyer = customer(true);
        let books: Vec<CatalogItem> = [3800, 3000, 3500, 4000, 5000]
            .iter()
            .enumerate()
            .map(|(i, &c)| book(&format!("Book {i}"), c))
            .collect();

        let mut cart = Cart::new(&buyer);
        for b in &books {
            cart.add_item(b);
        }

        let first = cart.compute_totals();
        let second = cart.compute_totals();
        assert_eq!(first, second);
        assert_eq!(first.1.amount(), dec!(138.96));
    }

    #[test]
    fn test_removal_drops_below_bulk_threshold() {
        let buyer = customer(false);
        let books: Vec<CatalogItem> = (0..5).map(|i| book(&format!("B{i}"), 1000)).collect();
        let mut cart = Cart::new(&buyer);
        for b in &books {
            cart.add_item(b);
        }
        assert_eq!(cart.compute_totals().1, Money::from_cents(4000));

        cart.remove_item(&books[4]);
        assert_eq!(cart.compute_totals().1, Money::from_cents(4000));
        assert_eq!(cart.compute_totals().0, Money::from_cents(4000));
    }

    #[test]
    fn test_empty_cart_totals() {
        let buyer = customer(true);
        let cart = Cart::new(&buyer);
        let (subtotal, total) = cart.compute_totals();
        assert!(subtotal.is_zero());
        assert!(total.is_zero());
        assert!(cart.price().applied.is_empty());
    }

    #[test]
    fn test_clear() {
        let buyer = customer(false);
        let a = book("A", 1000);
        let mut cart = Cart::new(&buyer);
        cart.add_item(&a);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_with_custom_engine() {
        let buyer = customer(false);
        let a = book("A", 1000);
        let engine = PricingEngine::new(PricingPolicy {
            bulk_threshold: 2,
            ..PricingPolicy::default()
        })
        .unwrap();

        let mut cart = Cart::with_engine(&buyer, engine);
        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.compute_totals().1, Money::from_cents(1600));
        assert_eq!(cart.engine().steps().len(), 2);
    }

    #[test]
    fn test_most_expensive_books_price_without_overflow() {
        let too_expensive = CatalogItem::with_price_text(
            "Gold Edition",
            "Author",
            "2020-01-01",
            "Genre",
            "79228162514264337593543950335",
        );
        assert!(matches!(too_expensive, Err(ValidationError::OutOfRange { .. })));

        let buyer = customer(true);
        let priciest = book("Gold Edition", crate::MAX_UNIT_PRICE * 100);
        let mut cart = Cart::new(&buyer);
        for _ in 0..1000 {
            cart.add_item(&priciest);
        }

        let (before, after) = cart.compute_totals();
        assert_eq!(before.amount(), dec!(100000000000));
        assert_eq!(after.amount(), dec!(72000000000));
        assert!(after <= before);
    }
}
