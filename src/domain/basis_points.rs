//! Basis-point representation for deviation thresholds.

use core::fmt;

/// One hundred percent, in basis points.
const MAX_BPS: u16 = 10_000;

/// A deviation threshold expressed in basis points (1 bp = 0.01%).
///
/// All `u16` values are technically valid policy inputs; values above
/// 10 000 simply mean "more than 100% deviation allowed". A threshold of
/// zero has a defined meaning at the configuration boundary: inside a pair
/// override it means *inherit the default*, never a literal zero limit
/// (see [`Override`](crate::policy::Override)).
///
/// # Examples
///
/// ```
/// use swapguard::domain::BasisPoints;
///
/// let limit = BasisPoints::new(400);
/// assert_eq!(limit.get(), 400);
/// assert!(limit.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the threshold is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns the larger of two thresholds.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
