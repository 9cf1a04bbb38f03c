//! In-memory price and pool sources.
//!
//! Suitable for tests and for embedders that push data into the guard
//! instead of wiring it to live infrastructure.

use std::collections::HashMap;

use crate::domain::{AssetId, PriceQuote};
use crate::traits::{PoolHandle, PoolReserveSource, PoolReserves, ReferencePriceSource};

/// A [`ReferencePriceSource`] backed by a map of ordered pairs.
///
/// Prices are directional: `(base, quote)` and `(quote, base)` are
/// independent entries. A pair with no entry answers [`PriceQuote::empty`].
#[derive(Debug, Default)]
pub struct StaticPriceSource {
    prices: HashMap<(AssetId, AssetId), PriceQuote>,
}

impl StaticPriceSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quote for the ordered `(base, quote)` pair.
    pub fn set_price(&mut self, base: AssetId, quote: AssetId, quote_record: PriceQuote) {
        self.prices.insert((base, quote), quote_record);
    }
}

impl ReferencePriceSource for StaticPriceSource {
    fn latest_price(&self, base: AssetId, quote: AssetId) -> PriceQuote {
        self.prices
            .get(&(base, quote))
            .copied()
            .unwrap_or_else(PriceQuote::empty)
    }
}

/// A [`PoolReserveSource`] backed by a vector of pools.
///
/// Pool handles are indices into the vector; reserves are stored exactly as
/// given to [`add_pool`](Self::add_pool), with the first asset in slot 0.
#[derive(Debug, Default)]
pub struct MemoryPoolSource {
    pools: Vec<(AssetId, AssetId, u128, u128)>,
}

impl MemoryPoolSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pool holding `reserve0` of `asset0` and `reserve1` of
    /// `asset1`. A later registration for the same pair shadows the
    /// earlier one.
    pub fn add_pool(&mut self, asset0: AssetId, asset1: AssetId, reserve0: u128, reserve1: u128) {
        self.pools.push((asset0, asset1, reserve0, reserve1));
    }

    /// Updates the reserves of the pool trading `a` against `b`, if any.
    pub fn set_reserves(&mut self, a: AssetId, b: AssetId, reserve0: u128, reserve1: u128) {
        if let Some(handle) = self.pool(a, b) {
            let idx = handle.get() as usize;
            self.pools[idx].2 = reserve0;
            self.pools[idx].3 = reserve1;
        }
    }
}

impl PoolReserveSource for MemoryPoolSource {
    fn pool(&self, a: AssetId, b: AssetId) -> Option<PoolHandle> {
        // Last registration wins.
        self.pools
            .iter()
            .rposition(|&(a0, a1, _, _)| (a0 == a && a1 == b) || (a0 == b && a1 == a))
            .map(|idx| PoolHandle::new(idx as u64))
    }

    fn reserves(&self, handle: PoolHandle) -> PoolReserves {
        match self.pools.get(handle.get() as usize) {
            Some(&(asset0, _, reserve0, reserve1)) => {
                PoolReserves::new(asset0, reserve0, reserve1)
            }
            // Unknown handles behave like an empty pool.
            None => PoolReserves::new(AssetId::zero(), 0, 0),
        }
    }
}
