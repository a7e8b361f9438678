//! # Pricing Engine
//!
//! Turns a list of unit prices and a customer's loyalty status into a priced
//! total.
//!
//! ## Discount Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Pipeline                                │
//! │                                                                         │
//! │  unit prices ──► Σ ──► subtotal                                        │
//! │                           │                                             │
//! │                           ▼                                             │
//! │               ┌───────────────────────┐                                │
//! │               │ Loyalty   (member?)   │  × 0.90                        │
//! │               └───────────┬───────────┘                                │
//! │                           ▼                                             │
//! │               ┌───────────────────────┐                                │
//! │               │ Bulk      (items ≥ 5) │  × 0.80                        │
//! │               └───────────┬───────────┘                                │
//! │                           ▼                                             │
//! │                   total_after_discount                                  │
//! │                                                                         │
//! │  Steps multiply, they never add: member + bulk = × 0.72, not 30% off.  │
//! │  Nothing is rounded here. Rounding happens when the total is shown.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::pricing::PricingEngine;
//! use bookstore_core::Money;
//!
//! let prices = [3800, 3000, 3500, 4000, 5000].map(Money::from_cents);
//! let (subtotal, total) = PricingEngine::default().compute_totals(prices, true);
//!
//! assert_eq!(subtotal.to_string(), "193.00");
//! assert_eq!(total.to_string(), "138.96");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::types::DiscountRate;
use crate::validation::{validate_bulk_threshold, validate_rate_bps, ValidationResult};

/// Loyalty members get 10% off.
pub const LOYALTY_DISCOUNT: DiscountRate = DiscountRate::from_bps(1000);

/// Carts at or above the bulk threshold get 20% off.
pub const BULK_DISCOUNT: DiscountRate = DiscountRate::from_bps(2000);

/// Item count (duplicates included) at which the bulk discount starts.
pub const BULK_THRESHOLD: usize = 5;

// =============================================================================
// Standalone Discount Steps
// =============================================================================

/// Applies the standard loyalty discount if the customer is a member.
///
/// ## Example
/// ```rust
/// use bookstore_core::pricing::apply_loyalty_discount;
/// use bookstore_core::Money;
///
/// let price = Money::from_cents(6800);
/// assert_eq!(apply_loyalty_discount(price, true), Money::from_cents(6120));
/// assert_eq!(apply_loyalty_discount(price, false), price);
/// ```
pub fn apply_loyalty_discount(amount: Money, is_loyalty_member: bool) -> Money {
    Discount::Loyalty {
        rate: LOYALTY_DISCOUNT,
    }
    .apply(amount, &PricingContext::new(0, is_loyalty_member))
}

/// Applies the standard bulk discount if `item_count` reaches the threshold.
///
/// ## Example
/// ```rust
/// use bookstore_core::pricing::apply_bulk_discount;
/// use bookstore_core::Money;
///
/// let price = Money::from_cents(19300);
/// assert_eq!(apply_bulk_discount(price, 5), Money::from_cents(15440));
/// assert_eq!(apply_bulk_discount(price, 4), price);
/// ```
pub fn apply_bulk_discount(amount: Money, item_count: usize) -> Money {
    Discount::Bulk {
        threshold: BULK_THRESHOLD,
        rate: BULK_DISCOUNT,
    }
    .apply(amount, &PricingContext::new(item_count, false))
}

// =============================================================================
// Discount Pipeline Types
// =============================================================================

/// What a discount step gets to look at besides the running amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingContext {
    /// Number of items in the cart, duplicates counted individually.
    pub item_count: usize,
    pub is_loyalty_member: bool,
}

impl PricingContext {
    pub const fn new(item_count: usize, is_loyalty_member: bool) -> Self {
        PricingContext {
            item_count,
            is_loyalty_member,
        }
    }
}

/// Which rule produced a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Loyalty,
    Bulk,
}

impl DiscountKind {
    /// Capitalized name for printed documents.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountKind::Loyalty => "Loyalty",
            DiscountKind::Bulk => "Bulk",
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Loyalty => write!(f, "loyalty"),
            DiscountKind::Bulk => write!(f, "bulk"),
        }
    }
}

/// One step of the discount chain.
///
/// Each step is a pure function of the running amount and the
/// [`PricingContext`]; a step that does not apply returns the amount unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Percentage off for loyalty members.
    Loyalty { rate: DiscountRate },
    /// Percentage off once the cart holds `threshold` items or more.
    Bulk { threshold: usize, rate: DiscountRate },
}

impl Discount {
    pub fn kind(&self) -> DiscountKind {
        match self {
            Discount::Loyalty { .. } => DiscountKind::Loyalty,
            Discount::Bulk { .. } => DiscountKind::Bulk,
        }
    }

    pub fn rate(&self) -> DiscountRate {
        match self {
            Discount::Loyalty { rate } | Discount::Bulk { rate, .. } => *rate,
        }
    }

    /// Returns true if this step changes the amount for the given context.
    pub fn applies(&self, ctx: &PricingContext) -> bool {
        match self {
            Discount::Loyalty { .. } => ctx.is_loyalty_member,
            Discount::Bulk { threshold, .. } => ctx.item_count >= *threshold,
        }
    }

    /// Applies the step to `amount`.
    pub fn apply(&self, amount: Money, ctx: &PricingContext) -> Money {
        if self.applies(ctx) {
            amount.apply_discount(self.rate())
        } else {
            amount
        }
    }
}

/// A discount that actually changed the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedDiscount {
    pub kind: DiscountKind,
    pub rate: DiscountRate,
    /// How much this step took off the running amount. Unrounded.
    pub amount_off: Money,
}

/// Full result of pricing a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub item_count: usize,
    /// Sum of unit prices.
    pub subtotal: Money,
    /// Subtotal after every applicable discount step.
    pub total_after_discount: Money,
    /// Steps that applied, in the order they were applied.
    pub applied: Vec<AppliedDiscount>,
}

impl PriceBreakdown {
    /// Total amount saved across all applied discounts.
    pub fn total_savings(&self) -> Money {
        self.subtotal - self.total_after_discount
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// The numbers behind the discount chain.
///
/// The default policy is the store policy: 10% loyalty, 20% bulk from 5 items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Loyalty discount in basis points (1000 = 10%).
    pub loyalty_rate_bps: u32,
    /// Item count at which the bulk discount starts.
    pub bulk_threshold: usize,
    /// Bulk discount in basis points (2000 = 20%).
    pub bulk_rate_bps: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            loyalty_rate_bps: LOYALTY_DISCOUNT.bps(),
            bulk_threshold: BULK_THRESHOLD,
            bulk_rate_bps: BULK_DISCOUNT.bps(),
        }
    }
}

impl PricingPolicy {
    /// Checks rates are within 0–100% and the bulk threshold is at least 1.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_rate_bps("loyalty_rate", self.loyalty_rate_bps)?;
        validate_rate_bps("bulk_rate", self.bulk_rate_bps)?;
        validate_bulk_threshold(self.bulk_threshold)?;
        Ok(())
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// An ordered pipeline of discount steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingEngine {
    steps: Vec<Discount>,
}

impl Default for PricingEngine {
    /// Loyalty first, then bulk.
    fn default() -> Self {
        PricingEngine {
            steps: vec![
                Discount::Loyalty {
                    rate: LOYALTY_DISCOUNT,
                },
                Discount::Bulk {
                    threshold: BULK_THRESHOLD,
                    rate: BULK_DISCOUNT,
                },
            ],
        }
    }
}

impl PricingEngine {
    /// Builds the loyalty → bulk chain from a policy.
    pub fn new(policy: PricingPolicy) -> ValidationResult<Self> {
        policy.validate()?;

        Ok(PricingEngine {
            steps: vec![
                Discount::Loyalty {
                    rate: DiscountRate::from_bps(policy.loyalty_rate_bps),
                },
                Discount::Bulk {
                    threshold: policy.bulk_threshold,
                    rate: DiscountRate::from_bps(policy.bulk_rate_bps),
                },
            ],
        })
    }

    /// The discount steps, in application order.
    pub fn steps(&self) -> &[Discount] {
        &self.steps
    }

    /// Prices a sequence of unit prices.
    ///
    /// Every price counts as one item towards the bulk threshold, so the same
    /// book added twice counts twice. An empty sequence prices to zero with no
    /// discounts applied.
    ///
    /// Prices are expected to be catalog unit prices, which
    /// [`validate_price`](crate::validation::validate_price) caps at
    /// [`MAX_UNIT_PRICE`](crate::MAX_UNIT_PRICE).
    pub fn price<I>(&self, unit_prices: I, is_loyalty_member: bool) -> PriceBreakdown
    where
        I: IntoIterator<Item = Money>,
    {
        let (item_count, subtotal) = unit_prices
            .into_iter()
            .fold((0usize, Money::zero()), |(count, sum), price| {
                (count + 1, sum + price)
            });

        let ctx = PricingContext::new(item_count, is_loyalty_member);
        let mut running = subtotal;
        let mut applied = Vec::new();

        for step in &self.steps {
            // Nothing to discount in an empty cart
            if item_count == 0 || !step.applies(&ctx) {
                continue;
            }

            let discounted = step.apply(running, &ctx);
            debug!(
                discount = %step.kind(),
                rate_bps = step.rate().bps(),
                before = %running,
                after = %discounted,
                "Discount applied"
            );

            applied.push(AppliedDiscount {
                kind: step.kind(),
                rate: step.rate(),
                amount_off: running - discounted,
            });
            running = discounted;
        }

        PriceBreakdown {
            item_count,
            subtotal,
            total_after_discount: running,
            applied,
        }
    }

    /// Returns `(subtotal, total_after_discount)`.
    pub fn compute_totals<I>(&self, unit_prices: I, is_loyalty_member: bool) -> (Money, Money)
    where
        I: IntoIterator<Item = Money>,
    {
        let breakdown = self.price(unit_prices, is_loyalty_member);
        (breakdown.subtotal, breakdown.total_after_discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
