//! # Money Module
//!
//! Provides the `Money` and `Percent` types for handling monetary values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every amount is an i64 count of the smallest unit.               │
//! │    Sums of cents are exact; only percentage math rounds, and it     │
//! │    rounds exactly once at the point the value is derived.           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! All rounding in this system is **half-up to two decimals** (0.005 rounds
//! to 0.01). The rule is applied in exactly two places: [`Money::percent_of`]
//! (GST and discount derivation) and [`Money::parse`] (menu price intake).
//! No monetary value is rounded twice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: totals arithmetic may pass through negative
///   intermediate values (discounts)
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(20_000); // 200.00
    /// assert_eq!(price.cents(), 20_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(200, 50).cents(), 20_050);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity. Exact in cents; nothing to round.
    ///
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(20_000); // 200.00
    /// assert_eq!(unit_price.times(2).cents(), 40_000);
    /// ```
    #[inline]
    pub const fn times(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Derives a percentage of this amount, rounding half-up to a cent.
    ///
    /// Integer math: `(cents * bps + 5000) / 10000`. The `+5000` term is the
    /// half-up rounding (5000/10000 = 0.5); i128 intermediates rule out
    /// overflow on any realistic amount.
    ///
    /// ```rust
    /// use bistro_core::money::{Money, Percent};
    ///
    /// let subtotal = Money::from_cents(45_000); // 450.00
    /// let gst = subtotal.percent_of(Percent::from_bps(500)); // 5%
    /// assert_eq!(gst.cents(), 2_250); // 22.50
    /// ```
    pub fn percent_of(&self, rate: Percent) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Parses a decimal string ("200", "200.5", "200.50") into cents.
    ///
    /// Fractional digits beyond the second are rounded half-up. Returns
    /// `None` for anything that is not a plain decimal number.
    ///
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::parse("200.00"), Some(Money::from_cents(20_000)));
    /// assert_eq!(Money::parse("200.5"), Some(Money::from_cents(20_050)));
    /// assert_eq!(Money::parse("0.005"), Some(Money::from_cents(1)));
    /// assert_eq!(Money::parse("free"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Money> {
        let s = input.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let major: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };

        let mut frac = frac_part.bytes().map(|b| (b - b'0') as i64);
        let tens = frac.next().unwrap_or(0);
        let units = frac.next().unwrap_or(0);
        let mut cents = major.checked_mul(100)?.checked_add(tens * 10 + units)?;
        if frac.next().unwrap_or(0) >= 5 {
            cents += 1;
        }

        Some(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A percentage rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000.
/// 500 bps = 5% (the conventional GST rate); keeping rates integral avoids
/// the same float drift the cents representation avoids for amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent(u32);

impl Percent {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as a plain two-decimal amount ("450.00", "-5.50").
///
/// Currency symbols and locale formatting are the presentation layer's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(20_050);
        assert_eq!(money.cents(), 20_050);
        assert_eq!(money.major(), 200);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(200, 50).cents(), 20_050);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(45_000)), "450.00");
        assert_eq!(format!("{}", Money::from_cents(2_250)), "22.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.times(3).cents(), 3000);
    }

    #[test]
    fn test_percent_of_exact() {
        // 450.00 at 5% = 22.50, no rounding needed
        let subtotal = Money::from_cents(45_000);
        assert_eq!(subtotal.percent_of(Percent::from_bps(500)).cents(), 2_250);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 10.00 at 8.25% = 0.825 → 0.83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.percent_of(Percent::from_bps(825)).cents(), 83);

        // 1.01 at 50% = 0.505 → 0.51 (the half-up boundary)
        let odd = Money::from_cents(101);
        assert_eq!(odd.percent_of(Percent::from_bps(5000)).cents(), 51);
    }

    #[test]
    fn test_percent_of_zero_rate() {
        let amount = Money::from_cents(12_345);
        assert_eq!(amount.percent_of(Percent::zero()).cents(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("200"), Some(Money::from_cents(20_000)));
        assert_eq!(Money::parse("200.5"), Some(Money::from_cents(20_050)));
        assert_eq!(Money::parse("200.50"), Some(Money::from_cents(20_050)));
        assert_eq!(Money::parse(" 50.00 "), Some(Money::from_cents(5_000)));
        assert_eq!(Money::parse(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse("0"), Some(Money::zero()));
        assert_eq!(Money::parse("-3"), Some(Money::from_cents(-300)));
    }

    #[test]
    fn test_parse_rounds_third_digit_half_up() {
        assert_eq!(Money::parse("0.005"), Some(Money::from_cents(1)));
        assert_eq!(Money::parse("0.004"), Some(Money::from_cents(0)));
        assert_eq!(Money::parse("2.675"), Some(Money::from_cents(268)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("."), None);
        assert_eq!(Money::parse("free"), None);
        assert_eq!(Money::parse("12.3.4"), None);
        assert_eq!(Money::parse("1e3"), None);
    }

    #[test]
    fn test_percent_constructors() {
        assert_eq!(Percent::from_bps(500).bps(), 500);
        assert_eq!(Percent::from_percentage(5.0).bps(), 500);
        assert_eq!(Percent::from_percentage(8.25).bps(), 825);
        assert!((Percent::from_bps(825).percentage() - 8.25).abs() < 0.001);
        assert!(Percent::zero().is_zero());
    }
}
