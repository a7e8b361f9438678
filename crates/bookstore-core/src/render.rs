//! # Render
//!
//! Human-readable text for catalog items, customers, carts, orders and
//! invoices. Every amount is shown to two decimal places with the currency
//! code in front (`AED 138.96`).
//!
//! The `Display` impls at the bottom use the default currency; build a
//! [`Renderer`] to print with another code.

use std::fmt;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::invoice::Invoice;
use crate::money::Money;
use crate::order::Order;
use crate::types::{CatalogItem, Customer};
use crate::DEFAULT_CURRENCY;

/// Formats domain values as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    currency: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_CURRENCY)
    }
}

impl Renderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Renderer {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// `AED 38.00`
    pub fn money(&self, amount: Money) -> String {
        format!("{} {}", self.currency, amount)
    }

    /// One line with every field of the item.
    pub fn catalog_item(&self, item: &CatalogItem) -> String {
        format!(
            "Title: {}, Author: {}, Publication Date: {}, Genre: {}, Price: {}",
            item.title(),
            item.author(),
            item.publication_date(),
            item.genre(),
            self.money(item.unit_price())
        )
    }

    /// Heading followed by one line per item.
    pub fn catalog_listing(&self, catalog: &Catalog) -> String {
        let mut out = String::from("E-book Catalog:");
        for item in catalog {
            out.push('\n');
            out.push_str(&self.catalog_item(item));
        }
        out
    }

    pub fn customer(&self, customer: &Customer) -> String {
        format!(
            "Customer: {}. Contact: {}, Loyalty Member: {}",
            customer.name(),
            customer.contact_info(),
            customer.is_loyalty_member()
        )
    }

    /// One line per item in the cart, in cart order.
    pub fn cart(&self, cart: &Cart<'_>) -> String {
        cart.items()
            .iter()
            .map(|item| self.catalog_item(item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Order date and totals before and after discount.
    pub fn order_summary(&self, order: &Order) -> String {
        format!(
            "Order Date: {}, Total Before Discount: {}, Total After Discount: {}",
            order.order_date(),
            self.money(order.total_before_discount()),
            self.money(order.total_after_discount())
        )
    }

    /// One line per applied discount, e.g. `Loyalty discount (10%): -AED 19.30`.
    pub fn order_discounts(&self, order: &Order) -> String {
        order
            .discounts()
            .iter()
            .map(|d| {
                format!(
                    "{} discount ({}%): -{}",
                    d.kind.label(),
                    d.rate.percentage(),
                    self.money(d.amount_off)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Three-line invoice with the VAT percentage spelled out.
    pub fn invoice(&self, invoice: &Invoice) -> String {
        format!(
            "Invoice:\nTotal Before Tax: {}\nVAT ({}%): {}\nTotal After Tax: {}",
            self.money(invoice.total_before_tax()),
            invoice.vat_rate().percentage(),
            self.money(invoice.vat()),
            self.money(invoice.total_after_tax())
        )
    }
}

// =============================================================================
// Display Implementations
// =============================================================================

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().catalog_item(self))
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().customer(self))
    }
}

impl fmt::Display for Cart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().cart(self))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().order_summary(self))
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().invoice(self))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn good_doctor() -> CatalogItem {
        CatalogItem::new("Good Doctor", "Amber Ali", "2022-012-01", "Education", Money::from_cents(3800))
            .unwrap()
    }

    fn math() -> CatalogItem {
        CatalogItem::new("Math and Simson", "Khalil Abdu", "2022-11-15", "Education", Money::from_cents(3000))
            .unwrap()
    }

    #[test]
    fn test_catalog_item_line() {
        assert_eq!(
            good_doctor().to_string(),
            "Title: Good Doctor, Author: Amber Ali, Publication Date: 2022-012-01, \
             Genre: Education, Price: AED 38.00"
        );
    }

    #[test]
    fn test_catalog_listing() {
        let catalog = Catalog::new(vec![good_doctor(), math()]);
        let text = Renderer::default().catalog_listing(&catalog);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "E-book Catalog:");
        assert!(lines[2].starts_with("Title: Math and Simson"));
    }

    #[test]
    fn test_customer_line() {
        let customer = Customer::new("Mahra", "Mahra@gmail.com", true).unwrap();
        assert_eq!(
            customer.to_string(),
            "Customer: Mahra. Contact: Mahra@gmail.com, Loyalty Member: true"
        );
    }

    #[test]
    fn test_order_and_invoice_text() {
        let buyer = Customer::new("Khaled Eisse", "khaled@gmail.com", true).unwrap();
        let (a, b) = (good_doctor(), math());
        let mut cart = Cart::new(&buyer);
        cart.add_item(&a);
        cart.add_item(&b);
        assert_eq!(cart.to_string().lines().count(), 2);

        let order = Order::place_at(&cart, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert_eq!(
            order.to_string(),
            "Order Date: 2024-05-01, Total Before Discount: AED 68.00, \
             Total After Discount: AED 61.20"
        );
        assert_eq!(
            Renderer::default().order_discounts(&order),
            "Loyalty discount (10%): -AED 6.80"
        );

        let invoice = order.generate_invoice();
        assert_eq!(
            invoice.to_string(),
            "Invoice:\nTotal Before Tax: AED 61.20\nVAT (8%): AED 4.90\nTotal After Tax: AED 66.10"
        );
    }

    #[test]
    fn test_custom_currency() {
        let renderer = Renderer::new("USD");
        assert_eq!(renderer.currency(), "USD");
        assert_eq!(renderer.money(Money::from_cents(15440)), "USD 154.40");
    }
}
