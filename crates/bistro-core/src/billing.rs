//! # Billing Calculator
//!
//! Turns bill lines into aggregate totals.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    How a Bill is Computed                           │
//! │                                                                     │
//! │  Catalog lookup ──► make_line(name, qty, unit_price)                │
//! │                          │                                          │
//! │                          ▼                                          │
//! │                 [BillLine, BillLine, ...]   (caller-owned cart)     │
//! │                          │                                          │
//! │                          ▼                                          │
//! │        compute_totals(lines, discount, gst)                         │
//! │                          │                                          │
//! │              subtotal = Σ line_total        (exact cents)           │
//! │              gst      = subtotal × gst%     (half-up)               │
//! │              discount = subtotal × disc%    (half-up, or exactly 0) │
//! │              total    = subtotal + gst - discount                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: no shared state, no side effects. The cart is an
//! owned collection the caller passes in, not a hidden module-level list.

use crate::error::CoreResult;
use crate::money::{Money, Percent};
use crate::types::{BillLine, Totals};
use crate::validation;

/// Creates a bill line from an item name, quantity and unit price.
///
/// Rejects non-positive (or absurdly large) quantities and negative prices
/// with a validation error before constructing anything.
///
/// ```rust
/// use bistro_core::billing::make_line;
/// use bistro_core::money::Money;
///
/// let line = make_line("Pizza", 2, Money::from_cents(20_000)).unwrap();
/// assert_eq!(line.line_total_cents, 40_000);
///
/// assert!(make_line("Pizza", 0, Money::from_cents(20_000)).is_err());
/// ```
pub fn make_line(item_name: &str, quantity: i64, unit_price: Money) -> CoreResult<BillLine> {
    validation::validate_item_name(item_name)?;
    validation::validate_quantity(quantity)?;
    validation::validate_unit_price(unit_price)?;

    Ok(BillLine {
        item_name: item_name.trim().to_string(),
        quantity,
        unit_price_cents: unit_price.cents(),
        line_total_cents: unit_price.times(quantity).cents(),
    })
}

/// Computes the aggregate totals for a non-empty set of bill lines.
///
/// - `subtotal` is the exact cent sum of line totals, so the result is
///   independent of line order.
/// - `gst` and `discount` are each derived from the subtotal in one half-up
///   rounding step.
/// - A zero discount rate yields exactly zero cents, not a rounded zero.
///
/// Fails with [`CoreError::EmptyCart`](crate::CoreError::EmptyCart) when
/// `lines` is empty; zero-item bills are rejected upstream, not computed.
///
/// ```rust
/// use bistro_core::billing::{compute_totals, make_line};
/// use bistro_core::money::{Money, Percent};
///
/// let lines = vec![make_line("Pizza", 2, Money::from_cents(20_000)).unwrap()];
/// let totals = compute_totals(&lines, Percent::from_bps(1000), Percent::from_bps(500)).unwrap();
/// assert_eq!(totals.total_cents, 40_000 + 2_000 - 4_000);
/// ```
pub fn compute_totals(lines: &[BillLine], discount: Percent, gst: Percent) -> CoreResult<Totals> {
    if lines.is_empty() {
        return Err(crate::error::CoreError::EmptyCart);
    }

    let mut subtotal = Money::zero();
    for line in lines {
        subtotal += line.line_total();
    }

    let gst_amount = subtotal.percent_of(gst);
    let discount_amount = if discount.is_zero() {
        Money::zero()
    } else {
        subtotal.percent_of(discount)
    };
    let total = subtotal + gst_amount - discount_amount;

    Ok(Totals {
        subtotal_cents: subtotal.cents(),
        gst_cents: gst_amount.cents(),
        discount_cents: discount_amount.cents(),
        total_cents: total.cents(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::DEFAULT_GST;

    fn sample_cart() -> Vec<BillLine> {
        vec![
            make_line("Pizza", 2, Money::from_cents(20_000)).unwrap(),
            make_line("Cold Drink", 1, Money::from_cents(5_000)).unwrap(),
        ]
    }

    #[test]
    fn test_make_line() {
        let line = make_line("Pizza", 2, Money::from_cents(20_000)).unwrap();
        assert_eq!(line.item_name, "Pizza");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price_cents, 20_000);
        assert_eq!(line.line_total_cents, 40_000);
    }

    #[test]
    fn test_make_line_trims_name() {
        let line = make_line("  Pasta ", 1, Money::from_cents(15_000)).unwrap();
        assert_eq!(line.item_name, "Pasta");
    }

    #[test]
    fn test_make_line_rejects_bad_quantity() {
        let price = Money::from_cents(20_000);
        assert!(matches!(
            make_line("Pizza", 0, price),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            make_line("Pizza", -1, price),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_make_line_rejects_negative_price() {
        assert!(matches!(
            make_line("Pizza", 1, Money::from_cents(-1)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_totals_without_discount() {
        // 2 × 200.00 + 1 × 50.00 at 5% GST
        let totals = compute_totals(&sample_cart(), Percent::zero(), DEFAULT_GST).unwrap();
        assert_eq!(totals.subtotal_cents, 45_000); // 450.00
        assert_eq!(totals.gst_cents, 2_250); // 22.50
        assert_eq!(totals.discount_cents, 0); // 0.00, exactly
        assert_eq!(totals.total_cents, 47_250); // 472.50
    }

    #[test]
    fn test_totals_with_discount() {
        // Same cart, 10% discount
        let totals =
            compute_totals(&sample_cart(), Percent::from_bps(1000), DEFAULT_GST).unwrap();
        assert_eq!(totals.subtotal_cents, 45_000);
        assert_eq!(totals.gst_cents, 2_250);
        assert_eq!(totals.discount_cents, 4_500); // 45.00
        assert_eq!(totals.total_cents, 42_750); // 427.50
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert!(matches!(
            compute_totals(&[], Percent::zero(), DEFAULT_GST),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_totals_are_line_order_independent() {
        let mut cart = sample_cart();
        let forward = compute_totals(&cart, Percent::from_bps(1000), DEFAULT_GST).unwrap();
        cart.reverse();
        let backward = compute_totals(&cart, Percent::from_bps(1000), DEFAULT_GST).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_totals_satisfy_ledger_invariants() {
        let cart = sample_cart();
        let totals = compute_totals(&cart, Percent::from_bps(1000), DEFAULT_GST).unwrap();
        assert!(totals.consistent_with(&cart));
    }

    #[test]
    fn test_free_item_lines() {
        let lines = vec![make_line("Tap Water", 3, Money::zero()).unwrap()];
        let totals = compute_totals(&lines, Percent::zero(), DEFAULT_GST).unwrap();
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }
}
