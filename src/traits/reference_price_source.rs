//! Reference (oracle) price source abstraction.

use crate::domain::{AssetId, PriceQuote};

/// Supplies the trusted reference price for an ordered `(base, quote)` pair.
///
/// Implementations must answer for any pair: when nothing is known for the
/// requested orientation they return [`PriceQuote::empty`], which the guard
/// treats as maximally stale and maximally deviant. Returning a quote is
/// never an error; data quality is judged by the caller.
pub trait ReferencePriceSource {
    /// The latest reference price of `base` denominated in `quote`.
    fn latest_price(&self, base: AssetId, quote: AssetId) -> PriceQuote;
}
