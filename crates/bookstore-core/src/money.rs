//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    193.00 × 0.9 × 0.8 × 0.08 = 11.116799999999998  ❌ WRONG!            │
//! │                                                                         │
//! │  Integer cents fix the drift but cannot hold sub-cent VAT:             │
//! │    13896 cents × 8% = 1111.68 cents  → must round early                │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    193.00 × 0.9 × 0.8 × 0.08 = 11.1168 exactly                         │
//! │    Rounding to 2 places happens ONLY when the amount is displayed       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(3800); // 38.00
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(3000);
//! assert_eq!(total.to_string(), "68.00");
//! assert_eq!(total.cents(), 6800);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{DiscountRate, TaxRate};

/// Number of decimal places shown for an amount.
pub const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the store currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact base-10 arithmetic, any scale
/// - **Single field tuple struct**: zero-cost wrapper, cannot be mixed up with a rate
/// - **No rounding in arithmetic**: `calculate_tax` and `apply_discount` keep
///   every digit; [`Money::rounded`] is the only place precision is dropped
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.unit_price ──► PricingEngine (subtotal → loyalty → bulk)
///                                   │
///                                   ▼
///                       Order.total_after_discount ──► Invoice (VAT)
///                                   │
///                                   ▼
///                        Displayed as "AED 138.96"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, DISPLAY_SCALE))
    }

    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let vat = Money::from_decimal(Decimal::new(111168, 4)); // 11.1168
    /// assert_eq!(vat.cents(), 1112);
    /// ```
    pub fn cents(&self) -> i64 {
        let cents = self.rounded().0 * Decimal::ONE_HUNDRED;
        cents.to_i64().unwrap_or(if cents.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to display precision using Bankers Rounding (round half to even).
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Standard rounding always rounds 0.5 UP, causing systematic bias:  │
    /// │    0.125 → 0.13, 0.135 → 0.14 (always up = +bias)                  │
    /// │                                                                     │
    /// │  Bankers Rounding rounds 0.5 to nearest EVEN digit:                │
    /// │    0.125 → 0.12, 0.135 → 0.14 (alternates = no bias)               │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The result always carries exactly two decimal places, so `68` renders
    /// as `68.00`.
    pub fn rounded(&self) -> Money {
        let mut amount = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven);
        amount.rescale(DISPLAY_SCALE);
        Money(amount)
    }

    /// Calculates tax at the given rate. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    /// use bookstore_core::VAT_RATE;
    /// use rust_decimal::Decimal;
    ///
    /// let total = Money::from_cents(13896); // 138.96
    /// let vat = total.calculate_tax(VAT_RATE); // 8%
    /// assert_eq!(vat.amount(), Decimal::new(111168, 4)); // 11.1168
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount is multiplicative: `amount × (1 − rate)`. Exact, no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    /// use bookstore_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(6800); // 68.00
    /// let ten_percent = DiscountRate::try_from_bps(1000).unwrap();
    /// let discounted = subtotal.apply_discount(ten_percent);
    /// assert_eq!(discounted, Money::from_cents(6120)); // 61.20
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        Money(self.0 * (Decimal::ONE - rate.as_fraction()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to two decimal places, without a currency code.
///
/// Currency labels are added by the [`render`](crate::render) module.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded().0)
    }
}

/// Parses decimal text such as `"38.00"` or `"AED 38.00"`.
///
/// The only prefix accepted is a three-letter uppercase currency code followed
/// by whitespace. Anything else that is not a number is rejected with
/// [`ValidationError::InvalidFormat`].
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let number = match text.split_once(char::is_whitespace) {
            Some((code, rest)) if is_currency_code(code) => rest.trim_start(),
            _ => text,
        };

        number
            .parse::<Decimal>()
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("'{}' is not a number ({})", s, e),
            })
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{}", Money::from_decimal(dec!(150.0768))), "150.08");
        assert_eq!(format!("{}", Money::from_decimal(dec!(68))), "68.00");
    }

    #[test]
    fn test_rounding_is_bankers() {
        assert_eq!(Money::from_decimal(dec!(0.125)).rounded().amount(), dec!(0.12));
        assert_eq!(Money::from_decimal(dec!(0.135)).rounded().amount(), dec!(0.14));
        assert_eq!(Money::from_decimal(dec!(166.752)).rounded().amount(), dec!(166.75));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(3800), Money::from_cents(3000)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_cents(6800));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation_keeps_sub_cent_precision() {
        let amount = Money::from_cents(13896);
        let tax = amount.calculate_tax(TaxRate::from_bps(800));
        assert_eq!(tax.amount(), dec!(11.1168));
    }

    #[test]
    fn test_percentage_discount_is_multiplicative() {
        let subtotal = Money::from_cents(19300);
        let after_loyalty = subtotal.apply_discount(DiscountRate::from_bps(1000));
        let after_bulk = after_loyalty.apply_discount(DiscountRate::from_bps(2000));
        assert_eq!(after_bulk.amount(), dec!(138.96));
    }

    #[test]
    fn test_full_discount_bottoms_out_at_zero() {
        let price = Money::from_cents(3800);
        let everything = DiscountRate::try_from_bps(10_000).unwrap();
        assert!(price.apply_discount(everything).is_zero());
        assert!(DiscountRate::try_from_bps(20_000).is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("38.00".parse::<Money>().unwrap(), Money::from_cents(3800));
        assert_eq!(" AED 30.5 ".parse::<Money>().unwrap(), Money::from_cents(3050));
        assert!(matches!(
            "thirty".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_letters_that_are_not_a_currency_code() {
        for text in ["abc12", "x5", "AED38.00", "aed 38.00", "DIRHAM 38", "38 AED", "12abc"] {
            assert!(
                matches!(text.parse::<Money>(), Err(ValidationError::InvalidFormat { .. })),
                "{text:?} should not parse"
            );
        }
        assert_eq!("USD\t12".parse::<Money>().unwrap(), Money::from_cents(1200));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Money::from_decimal(dec!(11.1168))).unwrap();
        assert_eq!(json, "\"11.1168\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount(), dec!(11.1168));
    }
}
