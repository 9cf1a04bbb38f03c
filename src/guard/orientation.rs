//! Reserve orientation normalization.
//!
//! Pools store reserves in their own slot order; callers think in
//! `(base, quote)`. This module bridges the two so all downstream math can
//! assume the caller's orientation.

use crate::domain::{AssetId, OrientedReserves};
use crate::traits::PoolReserveSource;

/// Looks up the pool for `(base, quote)` and reorders its reserves into the
/// caller's orientation.
///
/// Which slot belongs to `base` is decided by comparing slot-0's asset to
/// `base`; the pair being a two-asset pool, the other slot is `quote`. A
/// missing pool yields [`OrientedReserves::absent`].
#[must_use]
pub fn oriented_reserves(
    source: &dyn PoolReserveSource,
    base: AssetId,
    quote: AssetId,
) -> OrientedReserves {
    let Some(handle) = source.pool(base, quote) else {
        return OrientedReserves::absent();
    };
    let raw = source.reserves(handle);
    if raw.slot0_asset() == base {
        OrientedReserves::new(raw.slot0(), raw.slot1())
    } else {
        OrientedReserves::new(raw.slot1(), raw.slot0())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemoryPoolSource;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn forward_orientation() {
        let mut pools = MemoryPoolSource::new();
        pools.add_pool(asset(1), asset(2), 10, 20);
        let r = oriented_reserves(&pools, asset(1), asset(2));
        assert!(r.pool_exists());
        assert_eq!(r.reserve_base(), 10);
        assert_eq!(r.reserve_quote(), 20);
    }

    #[test]
    fn reversed_orientation_swaps_slots() {
        let mut pools = MemoryPoolSource::new();
        pools.add_pool(asset(1), asset(2), 10, 20);
        let r = oriented_reserves(&pools, asset(2), asset(1));
        assert_eq!(r.reserve_base(), 20);
        assert_eq!(r.reserve_quote(), 10);
    }

    #[test]
    fn missing_pool_is_absent() {
        let pools = MemoryPoolSource::new();
        let r = oriented_reserves(&pools, asset(1), asset(2));
        assert!(!r.pool_exists());
    }

    #[test]
    fn mid_prices_are_reciprocal() {
        let mut pools = MemoryPoolSource::new();
        pools.add_pool(asset(1), asset(2), 1_000_000, 2_000_000);
        let fwd = oriented_reserves(&pools, asset(1), asset(2)).mid_price();
        let rev = oriented_reserves(&pools, asset(2), asset(1)).mid_price();
        assert_eq!(fwd.get(), 2 * crate::domain::E18);
        assert_eq!(rev.get(), crate::domain::E18 / 2);
    }
}
