//! Currency amounts and tax rates.

use std::iter::Sum;
use std::ops::Add;

/// Amount of money in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Highest price a single menu item may carry ($1,000,000). Keeps a full
    /// order and its tax far from the `u64` limit.
    pub const MAX_ITEM_PRICE: Self = Self(100_000_000);

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a dollar value, rounding to the nearest cent.
    ///
    /// Returns `None` for negative or non-finite values.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        let cents = (dollars * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Sales tax rate, stored in basis points (1/100 of a percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxRate(u32);

impl TaxRate {
    const BASIS_POINTS_PER_UNIT: u64 = 10_000;

    /// Rate applied when nothing is configured.
    pub const DEFAULT: Self = Self(800);

    /// Creates a rate from basis points (`800` is 8%).
    #[must_use]
    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self(basis_points)
    }

    /// Creates a rate from a fraction (`0.08` is 8%).
    ///
    /// Returns `None` for negative, non-finite or absurdly large values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        Some(Self((fraction * 10_000.0).round() as u32))
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Computes tax on an amount, rounding half-up to the cent.
    ///
    /// Saturates at the largest representable amount.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn apply(self, amount: Money) -> Money {
        let per_unit = Self::BASIS_POINTS_PER_UNIT as u128;
        let tax = (amount.0 as u128 * self.0 as u128 + per_unit / 2) / per_unit;
        if tax > u64::MAX as u128 {
            Money(u64::MAX)
        } else {
            Money(tax as u64)
        }
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{fraction:02}%")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "$0.00" ; "zero")]
    #[test_case(50, "$0.50" ; "cents_only")]
    #[test_case(850, "$8.50" ; "dollars_and_cents")]
    #[test_case(1205, "$12.05" ; "leading_zero_cents")]
    fn test_money_display(cents: u64, expected: &str) {
        assert_eq!(Money::from_cents(cents).to_string(), expected);
    }

    #[test]
    fn test_money_from_dollars_rounds_to_cent() {
        assert_eq!(Money::from_dollars(5.5), Some(Money::from_cents(550)));
        assert_eq!(Money::from_dollars(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_dollars(-1.0), None);
        assert_eq!(Money::from_dollars(f64::NAN), None);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [500, 200, 150].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(850));
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let rate = TaxRate::DEFAULT;
        assert_eq!(rate.apply(Money::from_cents(850)), Money::from_cents(68));
        // 7.25% of $2.00 is 14.5 cents
        assert_eq!(
            TaxRate::from_basis_points(725).apply(Money::from_cents(200)),
            Money::from_cents(15)
        );
        assert_eq!(rate.apply(Money::ZERO), Money::ZERO);
    }

    #[test]
    fn test_tax_on_huge_amounts_saturates() {
        let huge = Money::from_dollars(1.0e15).unwrap();
        assert_eq!(TaxRate::DEFAULT.apply(huge), Money::from_cents(8_000_000_000_000_000));

        let max = Money::from_cents(u64::MAX);
        assert_eq!(TaxRate::from_basis_points(10_000).apply(max), max);
        assert_eq!(TaxRate::from_basis_points(u32::MAX).apply(max), max);
    }

    #[test]
    fn test_tax_on_largest_order_is_exact() {
        let subtotal = Money::MAX_ITEM_PRICE + Money::MAX_ITEM_PRICE + Money::MAX_ITEM_PRICE;
        assert_eq!(subtotal, Money::from_cents(300_000_000));
        assert_eq!(TaxRate::DEFAULT.apply(subtotal), Money::from_cents(24_000_000));
    }

    #[test]
    fn test_tax_rate_from_fraction() {
        assert_eq!(TaxRate::from_fraction(0.08), Some(TaxRate::DEFAULT));
        assert_eq!(TaxRate::from_fraction(0.0725).map(TaxRate::basis_points), Some(725));
        assert_eq!(TaxRate::from_fraction(-0.1), None);
        assert_eq!(TaxRate::from_fraction(1.5), None);
    }

    #[test_case(800, "8%" ; "whole_percent")]
    #[test_case(725, "7.25%" ; "fractional_percent")]
    fn test_tax_rate_display(basis_points: u32, expected: &str) {
        assert_eq!(TaxRate::from_basis_points(basis_points).to_string(), expected);
    }
}
