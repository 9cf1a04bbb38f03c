//! Fixed-point price with 18 implied decimal digits.

use core::fmt;

use crate::math::mul_div;

/// Scale factor for 18-decimal fixed-point prices.
pub const E18: u128 = 1_000_000_000_000_000_000;

/// A price scaled by 10^18 (units of quote per unit of base).
///
/// The zero price is a meaningful value rather than an error: downstream
/// deviation math maps a zero price on either side of the comparison to
/// the maximum representable deviation, which forces a fail verdict. This
/// is what lets "no pool" and "oracle has nothing" flow through the guard
/// as degraded data instead of exceptions.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{PriceE18, E18};
///
/// // 2 000 000 quote units per 1 000 000 base units → price 2.0
/// let price = PriceE18::from_ratio(2_000_000, 1_000_000);
/// assert_eq!(price.get(), 2 * E18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PriceE18(u128);

impl PriceE18 {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// A price ratio of exactly 1.0.
    pub const ONE: Self = Self(E18);

    /// Creates a price from a raw 1e18-scaled value.
    #[must_use]
    pub const fn from_raw(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw 1e18-scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes `numerator * 1e18 / denominator` with floor rounding.
    ///
    /// A zero denominator yields [`PriceE18::ZERO`], and a result beyond
    /// `u128::MAX` saturates. Both extremes land far outside any sane
    /// deviation limit, so the verdict they produce is a fail either way.
    #[must_use]
    pub fn from_ratio(numerator: u128, denominator: u128) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        match mul_div(numerator, E18, denominator) {
            Some(v) => Self(v),
            None => Self(u128::MAX),
        }
    }
}

impl fmt::Display for PriceE18 {
    /// Formats the price as a decimal with the 1e18 scale divided out,
    /// e.g. `2.000000000000000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / E18, self.0 % E18)
    }
}
