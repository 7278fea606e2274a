//! Money amounts for cart lines and totals
//!
//! Prices are held in integer cents so that summing a cart never picks up
//! floating-point error. Only `Display` converts to dollars.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Saturates at `u64::MAX` cents, like `Add`.
    pub const fn from_dollars(dollars: u64) -> Self {
        Price(dollars.saturating_mul(100))
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_dollars(10).to_string(), "$10.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(123_405).to_string(), "$1234.05");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_dollars(10), Price::from_cents(250), Price::ZERO];
        assert_eq!(prices.iter().sum::<Price>(), Price::from_cents(1250));
        assert_eq!(Vec::<Price>::new().into_iter().sum::<Price>(), Price::ZERO);
    }

    #[test]
    fn test_add_saturates() {
        let max = Price::from_cents(u64::MAX);
        assert_eq!(max + Price::from_cents(1), max);
    }

    #[test]
    fn test_from_dollars_saturates() {
        assert_eq!(Price::from_dollars(u64::MAX).cents(), u64::MAX);
        assert_eq!(Price::from_dollars(u64::MAX / 100 + 1).cents(), u64::MAX);
        assert_eq!(Price::from_dollars(u64::MAX / 100).cents(), u64::MAX / 100 * 100);
    }
}
