//! Pool reserves re-expressed in the caller's orientation.

use core::fmt;

use super::PriceE18;

/// The two-sided reserves of a constant-product pool, already reordered
/// from the pool's native `(slot0, slot1)` storage into the caller's
/// requested `(base, quote)` orientation.
///
/// Computed fresh per query and never persisted. A missing pool is modelled
/// as [`OrientedReserves::absent`] — the absence of a market is a valid,
/// non-exceptional outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientedReserves {
    pool_exists: bool,
    reserve_base: u128,
    reserve_quote: u128,
}

impl OrientedReserves {
    /// Reserves for an existing pool, in `(base, quote)` order.
    #[must_use]
    pub const fn new(reserve_base: u128, reserve_quote: u128) -> Self {
        Self {
            pool_exists: true,
            reserve_base,
            reserve_quote,
        }
    }

    /// The "no pool" value: zero reserves, `pool_exists() == false`.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            pool_exists: false,
            reserve_base: 0,
            reserve_quote: 0,
        }
    }

    /// Returns `true` if a pool exists for the pair.
    #[must_use]
    pub const fn pool_exists(&self) -> bool {
        self.pool_exists
    }

    /// Returns the reserve of the base asset.
    #[must_use]
    pub const fn reserve_base(&self) -> u128 {
        self.reserve_base
    }

    /// Returns the reserve of the quote asset.
    #[must_use]
    pub const fn reserve_quote(&self) -> u128 {
        self.reserve_quote
    }

    /// The instantaneous mid price implied by the reserve ratio:
    /// `reserve_quote * 1e18 / reserve_base`.
    ///
    /// A missing pool or a zero base reserve yields [`PriceE18::ZERO`],
    /// which downstream deviation math turns into a fail verdict.
    #[must_use]
    pub fn mid_price(&self) -> PriceE18 {
        if !self.pool_exists {
            return PriceE18::ZERO;
        }
        PriceE18::from_ratio(self.reserve_quote, self.reserve_base)
    }
}

impl fmt::Display for OrientedReserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pool_exists {
            write!(f, "(base={}, quote={})", self.reserve_base, self.reserve_quote)
        } else {
            write!(f, "(no pool)")
        }
    }
}
