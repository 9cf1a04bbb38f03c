//! Overflow-safe `a * b / d` helpers.
//!
//! Uses a 256-bit intermediate so that the product of two `u128` values
//! never wraps, in the style of Uniswap's `mulDiv`. Callers pick the
//! rounding direction explicitly.

use ethnum::U256;

/// Computes `floor(a * b / divisor)`.
///
/// Returns `None` if `divisor` is zero or the result exceeds `u128::MAX`.
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let prod = U256::from(a) * U256::from(b);
    let result = prod / U256::from(divisor);
    if result > U256::from(u128::MAX) {
        return None;
    }
    Some(result.as_u128())
}

/// Computes `ceil(a * b / divisor)`.
///
/// Returns `None` if `divisor` is zero or the result exceeds `u128::MAX`.
#[must_use]
pub fn mul_div_up(a: u128, b: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let prod = U256::from(a) * U256::from(b);
    let div = U256::from(divisor);
    let (q, r) = (prod / div, prod % div);
    let result = if r == U256::ZERO { q } else { q + U256::ONE };
    if result > U256::from(u128::MAX) {
        return None;
    }
    Some(result.as_u128())
}
