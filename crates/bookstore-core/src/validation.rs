//! # Validation Module
//!
//! Input validation for catalog items, customers and pricing policies.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  CatalogItem::new ──► validate_title / author / genre / price          │
//! │  Customer::new    ──► validate_customer_name / contact_info            │
//! │  PricingPolicy    ──► validate_rate_bps / validate_bulk_threshold      │
//! │                                                                         │
//! │  Fail fast: a value that passed these checks can be priced without     │
//! │  further checks anywhere in the pipeline.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{validate_title, validate_price};
//! use bookstore_core::Money;
//!
//! validate_title("Open The Soul").unwrap();
//! assert!(validate_price(Money::from_cents(-100)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::BPS_PER_UNIT;
use crate::{MAX_BULK_THRESHOLD, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_TITLE_LEN: usize = 200;
const MAX_AUTHOR_LEN: usize = 120;
const MAX_GENRE_LEN: usize = 50;
const MAX_NAME_LEN: usize = 120;
const MAX_CONTACT_LEN: usize = 254;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a book title: non-empty, at most 200 characters.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text("title", title, MAX_TITLE_LEN)
}

/// Validates an author name: non-empty, at most 120 characters.
pub fn validate_author(author: &str) -> ValidationResult<()> {
    validate_text("author", author, MAX_AUTHOR_LEN)
}

/// Validates a genre label: non-empty, at most 50 characters.
pub fn validate_genre(genre: &str) -> ValidationResult<()> {
    validate_text("genre", genre, MAX_GENRE_LEN)
}

/// Validates a customer name: non-empty, at most 120 characters.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates customer contact info (email, phone, ...).
///
/// Only presence and length are checked; the store accepts any contact form.
pub fn validate_contact_info(contact_info: &str) -> ValidationResult<()> {
    validate_text("contact_info", contact_info, MAX_CONTACT_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
/// - Must not exceed MAX_UNIT_PRICE
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_price;
/// use bookstore_core::Money;
///
/// assert!(validate_price(Money::from_cents(3800)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price.amount() > Decimal::from(MAX_UNIT_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > BPS_PER_UNIT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(BPS_PER_UNIT),
        });
    }

    Ok(())
}

/// Validates the item count at which the bulk discount starts.
///
/// ## Rules
/// - Must be at least 1 (a threshold of 0 would discount empty carts)
/// - Must not exceed MAX_BULK_THRESHOLD
pub fn validate_bulk_threshold(threshold: usize) -> ValidationResult<()> {
    if threshold == 0 || threshold > MAX_BULK_THRESHOLD {
        return Err(ValidationError::OutOfRange {
            field: "bulk_threshold".to_string(),
            min: 1,
            max: MAX_BULK_THRESHOLD as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Sound Of The Police").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 120 two-byte characters is still within the limit
        assert!(validate_author(&"é".repeat(120)).is_ok());
        assert!(validate_author(&"é".repeat(121)).is_err());
    }

    #[test]
    fn test_validate_genre_and_customer_fields() {
        assert!(validate_genre("Horror").is_ok());
        assert!(validate_genre(&"G".repeat(51)).is_err());
        assert!(validate_customer_name("Khaled Eisse").is_ok());
        assert!(validate_contact_info("khaled@gmail.com").is_ok());
        assert_eq!(
            validate_contact_info(""),
            Err(ValidationError::Required {
                field: "contact_info".to_string()
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(5000)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_price_upper_bound() {
        let max = Money::from_cents(MAX_UNIT_PRICE * 100);
        assert!(validate_price(max).is_ok());
        assert_eq!(
            validate_price(max + Money::from_cents(1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE,
            })
        );

        let huge: Money = "79228162514264337593543950335".parse().unwrap();
        assert!(validate_price(huge).is_err());
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps("loyalty_rate", 0).is_ok());
        assert!(validate_rate_bps("loyalty_rate", 1000).is_ok());
        assert!(validate_rate_bps("loyalty_rate", 10000).is_ok());
        assert!(validate_rate_bps("loyalty_rate", 10001).is_err());
    }

    #[test]
    fn test_validate_bulk_threshold() {
        assert!(validate_bulk_threshold(1).is_ok());
        assert!(validate_bulk_threshold(5).is_ok());
        assert!(validate_bulk_threshold(0).is_err());
        assert!(validate_bulk_threshold(MAX_BULK_THRESHOLD + 1).is_err());
    }
}
