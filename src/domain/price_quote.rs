//! Reference price quote with freshness metadata.

use core::fmt;

use super::PriceE18;

/// Classification of where a reference price came from.
///
/// The classification drives the staleness rule and the effective
/// deviation limit: administratively pinned prices are trusted
/// indefinitely and checked against a relaxed tolerance, while feed-derived
/// prices age out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceSource {
    /// Administratively pinned; never considered stale.
    Fixed,
    /// Derived from live feeds; subject to the staleness window.
    Dynamic,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Dynamic => write!(f, "Dynamic"),
        }
    }
}

/// A reference price for an ordered `(base, quote)` pair, plus the metadata
/// needed to decide whether it can still be trusted.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{PriceE18, PriceQuote, PriceSource};
///
/// let quote = PriceQuote::new(PriceE18::from_ratio(2, 1), 1_700_000_000, PriceSource::Dynamic);
/// assert!(!quote.is_stale(1_700_000_050, 60));
/// assert!(quote.is_stale(1_700_000_061, 60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceQuote {
    price: PriceE18,
    updated_at: u64,
    source: PriceSource,
}

impl PriceQuote {
    /// Creates a new quote.
    #[must_use]
    pub const fn new(price: PriceE18, updated_at: u64, source: PriceSource) -> Self {
        Self {
            price,
            updated_at,
            source,
        }
    }

    /// An empty quote: zero price, epoch timestamp, dynamic source.
    ///
    /// This is what a [`ReferencePriceSource`](crate::traits::ReferencePriceSource)
    /// returns when it has nothing to report for a pair; it is maximally
    /// stale and maximally deviant by construction.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            price: PriceE18::ZERO,
            updated_at: 0,
            source: PriceSource::Dynamic,
        }
    }

    /// Returns the 1e18-scaled price.
    #[must_use]
    pub const fn price(&self) -> PriceE18 {
        self.price
    }

    /// Returns the update timestamp (seconds since epoch).
    #[must_use]
    pub const fn updated_at(&self) -> u64 {
        self.updated_at
    }

    /// Returns the source classification.
    #[must_use]
    pub const fn source(&self) -> PriceSource {
        self.source
    }

    /// Returns `true` if the quote comes from a pinned source.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self.source, PriceSource::Fixed)
    }

    /// Decides staleness against a window of `stale_sec` seconds.
    ///
    /// A [`PriceSource::Fixed`] quote is never stale, regardless of age.
    /// A [`PriceSource::Dynamic`] quote is stale when
    /// `now − updated_at > stale_sec` (saturating on clock skew).
    #[must_use]
    pub const fn is_stale(&self, now: u64, stale_sec: u32) -> bool {
        match self.source {
            PriceSource::Fixed => false,
            PriceSource::Dynamic => now.saturating_sub(self.updated_at) > stale_sec as u64,
        }
    }
}
