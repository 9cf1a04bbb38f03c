//! The guard façade: policy, oracle, pool, and clock composed into three
//! read-only queries and a small administrative surface.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::{AssetId, PairKey, PriceQuote};
use crate::error::GuardError;
use crate::guard::orientation::oriented_reserves;
use crate::guard::verdict::{ExactOutCheck, PriceCheck, SwapCheck};
use crate::math::{deviation_bps, quote_exact_in, quote_exact_out};
use crate::policy::{Defaults, PairOverride, PolicyStore, ResolvedPolicy};
use crate::traits::{Clock, PoolReserveSource, ReferencePriceSource};

/// Boxed reference price source shared across threads.
pub type DynPriceSource = Box<dyn ReferencePriceSource + Send + Sync>;

/// Pre-trade price-safety guard over a constant-product pool universe.
///
/// Each query is a single linear computation over one consistent snapshot
/// of policy, reserves, and oracle price. Policy and the price source sit
/// behind single-writer, multiple-reader locks; administrative mutations
/// are the only writers.
///
/// Queries never fail on market conditions. A missing pool, zero reserves,
/// a stale oracle, or an infeasible exact-out request all come back as
/// ordinary result fields with `ok=false`. Errors are reserved for
/// malformed requests and failed authorization.
pub struct SwapGuard {
    policy: RwLock<PolicyStore>,
    price_source: RwLock<DynPriceSource>,
    reserve_source: Box<dyn PoolReserveSource + Send + Sync>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl SwapGuard {
    /// Creates a guard administered by `admin`, with empty (all-zero)
    /// defaults until [`set_defaults`](Self::set_defaults) is called.
    ///
    /// # Errors
    ///
    /// [`GuardError::InvalidAsset`] if `admin` is the null identity.
    pub fn new(
        admin: AssetId,
        price_source: DynPriceSource,
        reserve_source: Box<dyn PoolReserveSource + Send + Sync>,
        clock: Box<dyn Clock + Send + Sync>,
    ) -> crate::error::Result<Self> {
        Ok(Self {
            policy: RwLock::new(PolicyStore::new(admin)?),
            price_source: RwLock::new(price_source),
            reserve_source,
            clock,
        })
    }

    // -- queries --------------------------------------------------------------

    /// Read-only price snapshot for `(base, quote)`.
    ///
    /// A pair with no pool returns zeroed price fields and `stale=true`:
    /// the absence of a market means the pair cannot be trusted. No oracle
    /// is consulted in that case, so the reported `limit_bps` is the
    /// dynamic-source limit, without the Fixed-source relaxation.
    ///
    /// # Errors
    ///
    /// [`GuardError::InvalidAsset`] / [`GuardError::InvalidPath`] if the
    /// pair is malformed.
    pub fn check_price_now(&self, base: AssetId, quote: AssetId) -> crate::error::Result<PriceCheck> {
        let key = PairKey::new(base, quote)?;
        let policy = self.read_policy().resolve_policy(&key);

        let reserves = oriented_reserves(self.reserve_source.as_ref(), base, quote);
        if !reserves.pool_exists() {
            return Ok(PriceCheck::no_pool(policy.hard_bps()));
        }

        let oracle = self.latest_price(base, quote);
        let stale = oracle.is_stale(self.clock.now(), policy.stale_sec());
        Ok(PriceCheck::new(
            reserves.mid_price(),
            oracle.price(),
            oracle.updated_at(),
            stale,
            policy.limit_bps(oracle.source()),
            oracle.is_fixed(),
        ))
    }

    /// Checks a proposed exact-in swap of `amount_in` along `path`.
    ///
    /// A stale reference price short-circuits to `ok=false` without
    /// touching the pool. Otherwise the simulated execution price is
    /// compared to the oracle price against the resolved limit.
    ///
    /// # Errors
    ///
    /// Structural errors only: malformed path or a zero amount.
    pub fn check_swap_exact_in(
        &self,
        path: &[AssetId],
        amount_in: u128,
    ) -> crate::error::Result<SwapCheck> {
        let (base, quote) = validate_path(path)?;
        if amount_in == 0 {
            return Err(GuardError::InvalidQuantity("amount_in must be non-zero"));
        }

        let key = PairKey::new(base, quote)?;
        let policy = self.read_policy().resolve_policy(&key);
        let oracle = self.latest_price(base, quote);
        let limit = policy.limit_bps(oracle.source());

        if oracle.is_stale(self.clock.now(), policy.stale_sec()) {
            debug!(%base, %quote, updated_at = oracle.updated_at(), "exact-in check short-circuited on stale price");
            return Ok(SwapCheck::stale_price(limit, oracle.price()));
        }

        let reserves = oriented_reserves(self.reserve_source.as_ref(), base, quote);
        let sim = quote_exact_in(&reserves, amount_in);
        let dev = deviation_bps(sim.execution_price(), oracle.price());
        let ok = dev <= u64::from(limit.get());
        debug!(%base, %quote, amount_in, dev, limit = %limit, ok, "exact-in check");
        Ok(SwapCheck::new(
            ok,
            dev,
            limit,
            false,
            sim.mid_after(),
            oracle.price(),
        ))
    }

    /// Checks a proposed exact-out swap for `amount_out` along `path`.
    ///
    /// Same staleness short-circuit as exact-in. An output the pool cannot
    /// pay is infeasible: `ok=false` with `amount_in_needed=0`.
    ///
    /// # Errors
    ///
    /// Structural errors only: malformed path or a zero amount.
    pub fn check_swap_exact_out(
        &self,
        path: &[AssetId],
        amount_out: u128,
    ) -> crate::error::Result<ExactOutCheck> {
        let (base, quote) = validate_path(path)?;
        if amount_out == 0 {
            return Err(GuardError::InvalidQuantity("amount_out must be non-zero"));
        }

        let key = PairKey::new(base, quote)?;
        let policy = self.read_policy().resolve_policy(&key);
        let oracle = self.latest_price(base, quote);
        let limit = policy.limit_bps(oracle.source());

        if oracle.is_stale(self.clock.now(), policy.stale_sec()) {
            debug!(%base, %quote, updated_at = oracle.updated_at(), "exact-out check short-circuited on stale price");
            return Ok(ExactOutCheck::new(
                SwapCheck::stale_price(limit, oracle.price()),
                0,
            ));
        }

        let reserves = oriented_reserves(self.reserve_source.as_ref(), base, quote);
        let sim = quote_exact_out(&reserves, amount_out);
        let dev = deviation_bps(sim.execution_price(), oracle.price());
        let ok = sim.feasible() && dev <= u64::from(limit.get());
        debug!(%base, %quote, amount_out, dev, limit = %limit, ok, "exact-out check");
        Ok(ExactOutCheck::new(
            SwapCheck::new(ok, dev, limit, false, sim.mid_after(), oracle.price()),
            sim.amount_in(),
        ))
    }

    // -- administration -------------------------------------------------------

    /// Atomically replaces the global defaults.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] if `caller` is not the administrator.
    pub fn set_defaults(&self, caller: AssetId, defaults: Defaults) -> crate::error::Result<()> {
        self.write_policy().set_defaults(caller, defaults)
    }

    /// Writes the override record for the canonical `(a, b)` pair.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] if `caller` is not the administrator;
    /// [`GuardError::InvalidAsset`] / [`GuardError::InvalidPath`] if the
    /// pair is malformed.
    pub fn set_pair_override(
        &self,
        caller: AssetId,
        a: AssetId,
        b: AssetId,
        record: PairOverride,
    ) -> crate::error::Result<()> {
        self.write_policy().set_pair_override(caller, a, b, record)
    }

    /// Swaps the reference price source.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] if `caller` is not the administrator.
    pub fn set_price_source(
        &self,
        caller: AssetId,
        source: DynPriceSource,
    ) -> crate::error::Result<()> {
        self.read_policy().authorize(caller)?;
        *self
            .price_source
            .write()
            .unwrap_or_else(PoisonError::into_inner) = source;
        info!("reference price source replaced");
        Ok(())
    }

    /// Resolves the effective policy for a pair without running a check.
    ///
    /// # Errors
    ///
    /// [`GuardError::InvalidAsset`] / [`GuardError::InvalidPath`] if the
    /// pair is malformed.
    pub fn resolve_policy(&self, a: AssetId, b: AssetId) -> crate::error::Result<ResolvedPolicy> {
        let key = PairKey::new(a, b)?;
        Ok(self.read_policy().resolve_policy(&key))
    }

    // -- internals ------------------------------------------------------------

    fn latest_price(&self, base: AssetId, quote: AssetId) -> PriceQuote {
        self.price_source
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .latest_price(base, quote)
    }

    fn read_policy(&self) -> RwLockReadGuard<'_, PolicyStore> {
        self.policy.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_policy(&self) -> RwLockWriteGuard<'_, PolicyStore> {
        self.policy.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validates a swap path: exactly two distinct, non-null entries.
fn validate_path(path: &[AssetId]) -> crate::error::Result<(AssetId, AssetId)> {
    let [base, quote] = path else {
        return Err(GuardError::InvalidPath("path must have exactly two assets"));
    };
    if base.is_zero() || quote.is_zero() {
        return Err(GuardError::InvalidAsset("path assets must be non-null"));
    }
    if base == quote {
        return Err(GuardError::InvalidPath("path assets must be distinct"));
    }
    Ok((*base, *quote))
}
