//! Order pricing.
//!
//! A pure function from a cart snapshot to a [`PricingSnapshot`]. Nothing
//! here is cached or stored: views recompute the quote on every cart change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Pricing constants.
///
/// Defaults are the platform reference values; deployments override them
/// through [`StorefrontConfig`](crate::config::StorefrontConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Delivery is free when the subtotal is strictly greater than this.
    pub free_delivery_threshold: Decimal,
    /// Flat delivery fee charged at or below the threshold.
    pub delivery_fee: Decimal,
    /// Tax rate applied to the subtotal.
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_delivery_threshold: Decimal::new(30, 0),
            delivery_fee: Decimal::new(599, 2), // 5.99
            tax_rate: Decimal::new(8, 2),       // 0.08
        }
    }
}

/// Derived order totals. Never persisted; recomputed from the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl PricingSnapshot {
    /// Total rounded to two decimal places for display.
    #[must_use]
    pub fn display_total(&self) -> Decimal {
        self.total.round_dp(2)
    }

    /// How much more must be spent for free delivery, if anything.
    #[must_use]
    pub fn remaining_for_free_delivery(&self, config: &PricingConfig) -> Option<Decimal> {
        if self.subtotal > config.free_delivery_threshold {
            None
        } else {
            Some(config.free_delivery_threshold - self.subtotal)
        }
    }
}

/// Compute order totals from a cart snapshot.
///
/// - subtotal: sum of unit price x quantity across lines
/// - delivery fee: waived only when the subtotal is strictly greater than
///   the threshold
/// - tax: subtotal x rate, independent of fee and discount
/// - total: subtotal + delivery fee + tax - discount
///
/// `discount` comes from an active promotional offer and defaults to zero.
#[must_use]
pub fn quote(cart: &Cart, discount: Decimal, config: &PricingConfig) -> PricingSnapshot {
    let subtotal: Decimal = cart
        .lines()
        .iter()
        .map(|line| line.unit_price * Decimal::from(line.quantity))
        .sum();

    let delivery_fee = if subtotal > config.free_delivery_threshold {
        Decimal::ZERO
    } else {
        config.delivery_fee
    };

    let tax = subtotal * config.tax_rate;

    PricingSnapshot {
        subtotal,
        delivery_fee,
        tax,
        discount,
        total: subtotal + delivery_fee + tax - discount,
    }
}
