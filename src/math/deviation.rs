//! Relative price deviation in basis points.

use crate::domain::PriceE18;
use crate::math::mul_div;

/// Denominator of a basis point: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Sentinel deviation for incomparable prices.
///
/// Returned when either side of the comparison is zero (missing oracle
/// quote, empty pool). No configurable limit reaches this value, so it
/// always produces a fail verdict.
pub const DEVIATION_MAX: u64 = u64::MAX;

/// Computes `|dex − oracle| · 10_000 / oracle`, the relative deviation of
/// the DEX price from the reference price in basis points.
///
/// Either price being zero yields [`DEVIATION_MAX`]: a zero price means
/// there is nothing meaningful to compare, and the guard must fail closed.
/// Results beyond `u64::MAX` saturate to the sentinel as well.
#[must_use]
pub fn deviation_bps(dex: PriceE18, oracle: PriceE18) -> u64 {
    if dex.is_zero() || oracle.is_zero() {
        return DEVIATION_MAX;
    }
    let diff = dex.get().abs_diff(oracle.get());
    match mul_div(diff, BPS_DENOMINATOR, oracle.get()) {
        Some(bps) if bps <= u64::MAX as u128 => bps as u64,
        _ => DEVIATION_MAX,
    }
}
