//! Money - Exact Currency Amounts
//!
//! Amounts are kept as `Decimal` so that sums like `299.99 + 399.99` come out
//! exact. Display always rounds to cents and prefixes the currency symbol.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol used for every formatted amount
pub const CURRENCY_SYMBOL: &str = "$";

/// An exact currency amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a decimal amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from integer cents
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The raw decimal amount
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Round to whole cents, halves away from zero
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiply by a rate and round to cents (tax, commission, ...)
    pub fn apply_rate(self, rate: Decimal) -> Self {
        Self(self.0 * rate).round_cents()
    }

    /// Whether the amount is exactly zero
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Whether the amount is strictly positive
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Lossy conversion for progress and chart math
    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Format without the currency symbol, e.g. `699.98`
    pub fn plain(self) -> String {
        format!("{:.2}", self.round_cents().0.abs())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_cents();
        if rounded.0.is_sign_negative() && !rounded.0.is_zero() {
            write!(f, "-{CURRENCY_SYMBOL}{}", rounded.plain())
        } else {
            write!(f, "{CURRENCY_SYMBOL}{}", rounded.plain())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_two_decimals_with_symbol() {
        assert_eq!(Money::new(dec!(699.98)).to_string(), "$699.98");
        assert_eq!(Money::new(dec!(5)).to_string(), "$5.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn negative_amounts_prefix_minus() {
        assert_eq!(Money::new(dec!(-12.5)).to_string(), "-$12.50");
    }

    #[test]
    fn sums_are_exact() {
        let total: Money = [Money::new(dec!(299.99)), Money::new(dec!(399.99))]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(dec!(699.98)));
    }

    #[test]
    fn rate_rounds_half_away_from_zero() {
        assert_eq!(
            Money::new(dec!(229.98)).apply_rate(dec!(0.08)),
            Money::new(dec!(18.40))
        );
        // 0.125 * 1 -> 0.13
        assert_eq!(
            Money::new(dec!(0.125)).round_cents(),
            Money::new(dec!(0.13))
        );
    }

    #[test]
    fn from_cents_matches_decimal() {
        assert_eq!(Money::from_cents(29999), Money::new(dec!(299.99)));
        assert_eq!(Money::from_cents(29999) * 3, Money::new(dec!(899.97)));
    }
}
