//! Query result records.
//!
//! All degraded-data outcomes (missing pool, zero reserves, stale oracle,
//! infeasible exact-out) are expressed through these records rather than
//! through errors: the guard advises, it does not throw on adverse market
//! conditions.

use crate::domain::{BasisPoints, PriceE18};

/// Read-only price snapshot for a pair, from [`check_price_now`](crate::guard::SwapGuard::check_price_now).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCheck {
    dex_mid: PriceE18,
    oracle_price: PriceE18,
    updated_at: u64,
    stale: bool,
    limit_bps: BasisPoints,
    source_fixed: bool,
}

impl PriceCheck {
    pub(crate) const fn new(
        dex_mid: PriceE18,
        oracle_price: PriceE18,
        updated_at: u64,
        stale: bool,
        limit_bps: BasisPoints,
        source_fixed: bool,
    ) -> Self {
        Self {
            dex_mid,
            oracle_price,
            updated_at,
            stale,
            limit_bps,
            source_fixed,
        }
    }

    /// Snapshot for a pair with no pool: price fields zeroed, `stale=true`.
    pub(crate) const fn no_pool(limit_bps: BasisPoints) -> Self {
        Self {
            dex_mid: PriceE18::ZERO,
            oracle_price: PriceE18::ZERO,
            updated_at: 0,
            stale: true,
            limit_bps,
            source_fixed: false,
        }
    }

    /// Pool mid price implied by the reserve ratio.
    #[must_use]
    pub const fn dex_mid(&self) -> PriceE18 {
        self.dex_mid
    }

    /// Reference price of base in quote.
    #[must_use]
    pub const fn oracle_price(&self) -> PriceE18 {
        self.oracle_price
    }

    /// Reference price update timestamp, seconds since epoch.
    #[must_use]
    pub const fn updated_at(&self) -> u64 {
        self.updated_at
    }

    /// `true` when the reference price cannot be trusted.
    #[must_use]
    pub const fn stale(&self) -> bool {
        self.stale
    }

    /// Effective deviation limit for this pair and source.
    #[must_use]
    pub const fn limit_bps(&self) -> BasisPoints {
        self.limit_bps
    }

    /// `true` when the reference price is administratively pinned.
    #[must_use]
    pub const fn source_fixed(&self) -> bool {
        self.source_fixed
    }
}

/// Verdict of an exact-in swap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCheck {
    ok: bool,
    dev_bps: u64,
    limit_bps: BasisPoints,
    stale: bool,
    dex_after: PriceE18,
    oracle_price: PriceE18,
}

impl SwapCheck {
    pub(crate) const fn new(
        ok: bool,
        dev_bps: u64,
        limit_bps: BasisPoints,
        stale: bool,
        dex_after: PriceE18,
        oracle_price: PriceE18,
    ) -> Self {
        Self {
            ok,
            dev_bps,
            limit_bps,
            stale,
            dex_after,
            oracle_price,
        }
    }

    /// Short-circuit verdict for a stale reference price: no AMM math was
    /// computed, pool-derived fields stay zeroed.
    pub(crate) const fn stale_price(limit_bps: BasisPoints, oracle_price: PriceE18) -> Self {
        Self {
            ok: false,
            dev_bps: 0,
            limit_bps,
            stale: true,
            dex_after: PriceE18::ZERO,
            oracle_price,
        }
    }

    /// `true` when the trade passed the deviation check.
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.ok
    }

    /// Measured deviation of the execution price from the oracle, in bps.
    #[must_use]
    pub const fn dev_bps(&self) -> u64 {
        self.dev_bps
    }

    /// Limit the deviation was compared against.
    #[must_use]
    pub const fn limit_bps(&self) -> BasisPoints {
        self.limit_bps
    }

    /// `true` when the verdict failed on reference-price staleness.
    #[must_use]
    pub const fn stale(&self) -> bool {
        self.stale
    }

    /// Pool mid price after the simulated trade (diagnostic).
    #[must_use]
    pub const fn dex_after(&self) -> PriceE18 {
        self.dex_after
    }

    /// Reference price used for the comparison.
    #[must_use]
    pub const fn oracle_price(&self) -> PriceE18 {
        self.oracle_price
    }
}

/// Verdict of an exact-out swap check: a [`SwapCheck`] plus the input the
/// pool would require (zero when the trade is infeasible).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactOutCheck {
    check: SwapCheck,
    amount_in_needed: u128,
}

impl ExactOutCheck {
    pub(crate) const fn new(check: SwapCheck, amount_in_needed: u128) -> Self {
        Self {
            check,
            amount_in_needed,
        }
    }

    /// `true` when the trade is feasible and passed the deviation check.
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.check.ok()
    }

    /// Measured deviation in bps.
    #[must_use]
    pub const fn dev_bps(&self) -> u64 {
        self.check.dev_bps()
    }

    /// Limit the deviation was compared against.
    #[must_use]
    pub const fn limit_bps(&self) -> BasisPoints {
        self.check.limit_bps()
    }

    /// `true` when the verdict failed on reference-price staleness.
    #[must_use]
    pub const fn stale(&self) -> bool {
        self.check.stale()
    }

    /// Pool mid price after the simulated trade (diagnostic).
    #[must_use]
    pub const fn dex_after(&self) -> PriceE18 {
        self.check.dex_after()
    }

    /// Reference price used for the comparison.
    #[must_use]
    pub const fn oracle_price(&self) -> PriceE18 {
        self.check.oracle_price()
    }

    /// Input amount the pool requires for the requested output; zero when
    /// the trade is infeasible or the check short-circuited on staleness.
    #[must_use]
    pub const fn amount_in_needed(&self) -> u128 {
        self.amount_in_needed
    }
}
