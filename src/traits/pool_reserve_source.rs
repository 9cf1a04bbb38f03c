//! Pool discovery and reserve lookup abstraction.

use core::fmt;

use crate::domain::AssetId;

/// Opaque handle naming a pool inside a [`PoolReserveSource`].
///
/// Handles are only meaningful to the source that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolHandle(u64);

impl PoolHandle {
    /// Wraps a source-local pool index.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the source-local index.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

/// Raw pool reserves in the pool's own storage order.
///
/// `slot0_asset` names which asset `slot0` belongs to; the guard reorders
/// the pair into the caller's `(base, quote)` orientation before any math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    slot0_asset: AssetId,
    slot0: u128,
    slot1: u128,
}

impl PoolReserves {
    /// Reserves as stored by the pool.
    #[must_use]
    pub const fn new(slot0_asset: AssetId, slot0: u128, slot1: u128) -> Self {
        Self {
            slot0_asset,
            slot0,
            slot1,
        }
    }

    /// Returns the asset held in slot 0.
    #[must_use]
    pub const fn slot0_asset(&self) -> AssetId {
        self.slot0_asset
    }

    /// Returns the slot-0 reserve.
    #[must_use]
    pub const fn slot0(&self) -> u128 {
        self.slot0
    }

    /// Returns the slot-1 reserve.
    #[must_use]
    pub const fn slot1(&self) -> u128 {
        self.slot1
    }
}

/// Looks up constant-product pools and their current reserves.
///
/// A pair without a pool is an ordinary outcome: `pool` returns `None` and
/// the guard degrades to a fail verdict instead of erroring.
pub trait PoolReserveSource {
    /// The pool trading `a` against `b`, if one exists. Orientation of the
    /// arguments does not matter.
    fn pool(&self, a: AssetId, b: AssetId) -> Option<PoolHandle>;

    /// Current reserves of a pool previously returned by [`Self::pool`].
    fn reserves(&self, handle: PoolHandle) -> PoolReserves;
}
