//! # Store Scenarios
//!
//! The fixed five-book catalog and the four customer scenarios.
//!
//! ```text
//! ┌───┬──────────────────────────────┬─────────┬───────┬──────────────────┐
//! │ # │ Scenario                     │ Member? │ Books │ Discounts        │
//! ├───┼──────────────────────────────┼─────────┼───────┼──────────────────┤
//! │ 1 │ Loyalty member, bulk         │ yes     │ 5     │ loyalty + bulk   │
//! │ 2 │ Non-member, bulk             │ no      │ 5     │ bulk             │
//! │ 3 │ Loyalty member, small        │ yes     │ 2     │ loyalty          │
//! │ 4 │ Non-member, small            │ no      │ 2     │ none             │
//! └───┴──────────────────────────────┴─────────┴───────┴──────────────────┘
//! ```

use std::io::{self, Write};

use bookstore_core::{
    Cart, Catalog, CatalogItem, CoreResult, Customer, Invoice, Money, Order, Renderer,
    ValidationError,
};
use serde::Serialize;
use tracing::info;

const ALL_BOOKS: &[&str] = &[
    "Good Doctor",
    "Math and Simson",
    "Cyber Security",
    "Open The Soul",
    "Sound Of The Police",
];

const TWO_BOOKS: &[&str] = &["Good Doctor", "Math and Simson"];

/// One customer walking through the store.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub number: u8,
    pub title: &'static str,
    pub customer_name: &'static str,
    pub contact_info: &'static str,
    pub is_loyalty_member: bool,
    /// Catalog titles put in the cart, in order.
    pub books: &'static [&'static str],
}

pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        number: 1,
        title: "Loyalty Member with Bulk Purchase",
        customer_name: "Mahra",
        contact_info: "Mahra@gmail.com",
        is_loyalty_member: true,
        books: ALL_BOOKS,
    },
    Scenario {
        number: 2,
        title: "No Loyalty Member with Bulk Purchase",
        customer_name: "Mohamed",
        contact_info: "Mohamed@gmail.com",
        is_loyalty_member: false,
        books: ALL_BOOKS,
    },
    Scenario {
        number: 3,
        title: "Loyalty Member with Small Purchase",
        customer_name: "Khaled Eisse",
        contact_info: "khaled@gmail.com",
        is_loyalty_member: true,
        books: TWO_BOOKS,
    },
    Scenario {
        number: 4,
        title: "No Loyalty Member with Small Purchase",
        customer_name: "Ismaiel Mohamed",
        contact_info: "Ismail@gmail.com",
        is_loyalty_member: false,
        books: TWO_BOOKS,
    },
];

/// Builds the store's five-book catalog.
pub fn store_catalog() -> Result<Catalog, ValidationError> {
    let rows: [(&str, &str, &str, &str, i64); 5] = [
        ("Good Doctor", "Amber Ali", "2022-012-01", "Education", 3800),
        ("Math and Simson", "Khalil Abdu", "2022-11-15", "Education", 3000),
        ("Cyber Security", "Stephan Moull", "2021-10-10", "Programming", 3500),
        ("Open The Soul", "Mickel Ali", "2021-04-19", "Horror", 4000),
        ("Sound Of The Police", "Nardin Harris", "2019-06-21", "Comedy", 5000),
    ];

    rows.into_iter()
        .map(|(title, author, date, genre, cents)| {
            CatalogItem::new(title, author, date, genre, Money::from_cents(cents))
        })
        .collect()
}

/// Everything a scenario produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub number: u8,
    pub title: &'static str,
    pub customer: Customer,
    pub order: Order,
    pub invoice: Invoice,
}

/// Fills a cart for the scenario, places the order and invoices it.
///
/// ## Errors
/// - the scenario's customer details fail validation
/// - a scenario title is missing from the catalog
pub fn run(scenario: &Scenario, catalog: &Catalog) -> CoreResult<ScenarioReport> {
    let customer = Customer::new(
        scenario.customer_name,
        scenario.contact_info,
        scenario.is_loyalty_member,
    )?;

    let order = {
        let mut cart = Cart::new(&customer);
        for title in scenario.books {
            cart.add_item(catalog.find_by_title(title)?);
        }
        Order::place(&cart)
    };
    let invoice = order.generate_invoice();

    info!(
        scenario = scenario.number,
        total_after_tax = %invoice.total_after_tax(),
        "Scenario complete"
    );

    Ok(ScenarioReport {
        number: scenario.number,
        title: scenario.title,
        customer,
        order,
        invoice,
    })
}

/// Writes the catalog listing followed by each scenario's order and invoice.
pub fn write_text<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    catalog: &Catalog,
    reports: &[ScenarioReport],
) -> io::Result<()> {
    writeln!(out, "{}", renderer.catalog_listing(catalog))?;

    for report in reports {
        writeln!(out)?;
        writeln!(out, "Test Case {}: {}", report.number, report.title)?;
        writeln!(out, "{}", renderer.customer(&report.customer))?;
        writeln!(out, "{}", renderer.order_summary(&report.order))?;

        let discounts = renderer.order_discounts(&report.order);
        if !discounts.is_empty() {
            writeln!(out, "{}", discounts)?;
        }

        writeln!(out, "{}", renderer.invoice(&report.invoice))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports() -> Vec<ScenarioReport> {
        let catalog = store_catalog().unwrap();
        SCENARIOS
            .iter()
            .map(|s| run(s, &catalog).unwrap())
            .collect()
    }

    #[test]
    fn test_store_catalog() {
        let catalog = store_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        let subtotal: Money = catalog.iter().map(CatalogItem::unit_price).sum();
        assert_eq!(subtotal, Money::from_cents(19300));
    }

    #[test]
    fn test_scenario_totals() {
        let totals: Vec<(String, String, String)> = reports()
            .iter()
            .map(|r| {
                (
                    r.order.total_after_discount().to_string(),
                    r.invoice.vat().to_string(),
                    r.invoice.total_after_tax().to_string(),
                )
            })
            .collect();

        let expected = [
            ("138.96", "11.12", "150.08"),
            ("154.40", "12.35", "166.75"),
            ("61.20", "4.90", "66.10"),
            ("68.00", "5.44", "73.44"),
        ];

        for (got, want) in totals.iter().zip(expected) {
            assert_eq!((got.0.as_str(), got.1.as_str(), got.2.as_str()), want);
        }
    }

    #[test]
    fn test_unknown_title_is_reported() {
        let catalog = store_catalog().unwrap();
        let scenario = Scenario {
            books: &["Dune"],
            ..SCENARIOS[0]
        };
        let err = run(&scenario, &catalog).unwrap_err();
        assert_eq!(err.to_string(), "Catalog item not found: Dune");
    }

    #[test]
    fn test_write_text() {
        let catalog = store_catalog().unwrap();
        let mut buf = Vec::new();
        write_text(&mut buf, &Renderer::default(), &catalog, &reports()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("E-book Catalog:\n"));
        assert!(text.contains("Test Case 1: Loyalty Member with Bulk Purchase"));
        assert!(text.contains("Bulk discount (20%): -AED 34.74"));
        assert!(text.contains("VAT (8%): AED 11.12"));
        assert!(text.contains("Total After Tax: AED 73.44"));
        assert_eq!(text.matches("Invoice:").count(), 4);
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let reports = reports();
        let json = serde_json::to_value(&reports).unwrap();

        // Amounts are exact decimal strings, not rounded floats
        let vat: Money = json[0]["invoice"]["vat"].as_str().unwrap().parse().unwrap();
        assert_eq!(vat, reports[0].invoice.vat());
        assert_eq!(vat, "11.1168".parse().unwrap());
        assert_eq!(json[3]["customer"]["is_loyalty_member"], false);
    }
}
