//! Global fallback policy.

use core::fmt;

use crate::domain::BasisPoints;

/// Global policy thresholds applied when no per-pair override supersedes
/// them.
///
/// Values are policy inputs, not validated for range: zero is a legal
/// setting with defined meaning (a zero `hard_bps` tolerates no deviation
/// at all; a zero `stale_sec` trusts only same-second dynamic quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Defaults {
    hard_bps: BasisPoints,
    hard_bps_fixed: BasisPoints,
    stale_sec: u32,
}

impl Defaults {
    /// Creates a new set of global thresholds.
    #[must_use]
    pub const fn new(hard_bps: BasisPoints, hard_bps_fixed: BasisPoints, stale_sec: u32) -> Self {
        Self {
            hard_bps,
            hard_bps_fixed,
            stale_sec,
        }
    }

    /// Deviation limit for dynamically sourced reference prices.
    #[must_use]
    pub const fn hard_bps(&self) -> BasisPoints {
        self.hard_bps
    }

    /// Relaxed limit floor for administratively pinned reference prices.
    #[must_use]
    pub const fn hard_bps_fixed(&self) -> BasisPoints {
        self.hard_bps_fixed
    }

    /// Staleness window for dynamic quotes, in seconds.
    #[must_use]
    pub const fn stale_sec(&self) -> u32 {
        self.stale_sec
    }
}

impl fmt::Display for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hard={} fixed={} stale={}s",
            self.hard_bps, self.hard_bps_fixed, self.stale_sec
        )
    }
}
