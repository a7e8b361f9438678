//! # Domain Types
//!
//! Core domain types of the bookstore.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  CatalogItem    │   │    Customer     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  title          │   │  name           │                             │
//! │  │  author         │   │  contact_info   │                             │
//! │  │  publication    │   │  loyalty member │                             │
//! │  │  genre          │   └─────────────────┘                             │
//! │  │  unit_price     │                                                   │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │  DiscountRate   │                             │
//! │  │  bps (u32)      │   │  bps (u32)      │                             │
//! │  │  800 = 8%       │   │  1000 = 10%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both records are immutable once built. Constructors validate their input,
//! so any `CatalogItem` in the system has a non-negative price.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_author, validate_contact_info, validate_customer_name, validate_genre,
    validate_price, validate_rate_bps, validate_title, ValidationResult,
};

/// Basis points in 100%.
pub const BPS_PER_UNIT: u32 = 10_000;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the store VAT)
///
/// A rate never exceeds 100%. Outside the crate a rate is built with
/// [`TaxRate::try_from_bps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points known to be at most 10000.
    #[inline]
    pub(crate) const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate, rejecting anything above 100%.
    pub fn try_from_bps(bps: u32) -> ValidationResult<Self> {
        validate_rate_bps("tax_rate", bps)?;
        Ok(TaxRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (800 bps → 0.08).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4).normalize()
    }

    /// Returns the rate as a percentage (for labels only).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2).normalize()
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage taken off an amount, in basis points.
///
/// `DiscountRate::from_bps(2000)` is 20% off, i.e. the amount is multiplied
/// by 0.80. Rates above 100% cannot be built, so applying a discount never
/// turns an amount negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points known to be at most 10000.
    #[inline]
    pub(crate) const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate, rejecting anything above 100%.
    pub fn try_from_bps(bps: u32) -> ValidationResult<Self> {
        validate_rate_bps("discount_rate", bps)?;
        Ok(DiscountRate(bps))
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1000 bps → 0.10).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4).normalize()
    }

    /// Returns the rate as a percentage (for labels only).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2).normalize()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// An e-book available in the catalog.
///
/// Immutable after construction: there are getters but no setters. Carts hold
/// `&CatalogItem` borrowed from the catalog rather than copies.
///
/// Deserialized items go through [`CatalogItem::new`], so JSON input is held
/// to the same rules as code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogItemRecord")]
pub struct CatalogItem {
    title: String,
    author: String,
    /// Kept as given; catalog data is not guaranteed to be a valid date.
    publication_date: String,
    genre: String,
    unit_price: Money,
}

impl CatalogItem {
    /// Creates a catalog item, validating every field.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{CatalogItem, Money};
    ///
    /// let book = CatalogItem::new(
    ///     "Good Doctor", "Amber Ali", "2022-12-01", "Education", Money::from_cents(3800),
    /// ).unwrap();
    /// assert_eq!(book.unit_price().to_string(), "38.00");
    ///
    /// assert!(CatalogItem::new("Free?", "X", "2020", "Misc", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        genre: impl Into<String>,
        unit_price: Money,
    ) -> ValidationResult<Self> {
        let title = title.into();
        let author = author.into();
        let genre = genre.into();

        validate_title(&title)?;
        validate_author(&author)?;
        validate_genre(&genre)?;
        validate_price(unit_price)?;

        Ok(CatalogItem {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            publication_date: publication_date.into().trim().to_string(),
            genre: genre.trim().to_string(),
            unit_price,
        })
    }

    /// Creates a catalog item from a textual price such as `"38.00"`.
    ///
    /// Non-numeric prices fail with [`ValidationError::InvalidFormat`].
    pub fn with_price_text(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        genre: impl Into<String>,
        unit_price: &str,
    ) -> ValidationResult<Self> {
        let price: Money = unit_price.parse()?;
        Self::new(title, author, publication_date, genre, price)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication date exactly as it was catalogued.
    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    /// Publication date parsed as `YYYY-MM-DD`, if it is a real calendar date.
    pub fn parsed_publication_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.publication_date, "%Y-%m-%d").ok()
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

/// Unvalidated catalog item as it appears in serialized input.
#[derive(Deserialize)]
struct CatalogItemRecord {
    title: String,
    author: String,
    publication_date: String,
    genre: String,
    unit_price: Money,
}

impl TryFrom<CatalogItemRecord> for CatalogItem {
    type Error = ValidationError;

    fn try_from(record: CatalogItemRecord) -> Result<Self, Self::Error> {
        CatalogItem::new(
            record.title,
            record.author,
            record.publication_date,
            record.genre,
            record.unit_price,
        )
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A bookstore customer.
///
/// Updates are copy-style (`with_*`) so a customer already borrowed by a cart
/// never changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    name: String,
    contact_info: String,
    is_loyalty_member: bool,
}

impl Customer {
    /// Creates a customer.
    ///
    /// ## Errors
    /// - name or contact info empty
    /// - name or contact info longer than allowed
    pub fn new(
        name: impl Into<String>,
        contact_info: impl Into<String>,
        is_loyalty_member: bool,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let contact_info = contact_info.into();

        validate_customer_name(&name)?;
        validate_contact_info(&contact_info)?;

        Ok(Customer {
            name: name.trim().to_string(),
            contact_info: contact_info.trim().to_string(),
            is_loyalty_member,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn is_loyalty_member(&self) -> bool {
        self.is_loyalty_member
    }

    /// Returns a copy with the loyalty flag changed.
    pub fn with_loyalty_membership(&self, is_loyalty_member: bool) -> Self {
        Customer {
            is_loyalty_member,
            ..self.clone()
        }
    }

    /// Returns a copy with new contact info.
    pub fn with_contact_info(&self, contact_info: impl Into<String>) -> Result<Self, ValidationError> {
        let contact_info = contact_info.into();
        validate_contact_info(&contact_info)?;
        Ok(Customer {
            contact_info: contact_info.trim().to_string(),
            ..self.clone()
        })
    }
}

#[derive(Deserialize)]
struct CustomerRecord {
    name: String,
    contact_info: String,
    is_loyalty_member: bool,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ValidationError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        Customer::new(record.name, record.contact_info, record.is_loyalty_member)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
