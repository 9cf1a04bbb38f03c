//! Constant-product quote math (`x · y = k` with a 997/1000 fee).
//!
//! These functions *simulate* a swap against a reserve snapshot; they never
//! mutate anything. The fee is deducted from the input amount before the
//! pricing formula is applied, following the standard two-asset AMM
//! convention:
//!
//! ```text
//! exact-in :  out = floor(in·997·Rq / (Rb·1000 + in·997))
//! exact-out:  in  = ceil(Rb·out·1000 / ((Rq − out)·997))
//! ```
//!
//! The price compared against the reference oracle is the *execution*
//! price `out·1e18 / in` — the realized average price of the simulated
//! trade — not the post-trade mid price, which is reported separately as
//! a diagnostic.

use ethnum::U256;

use crate::domain::{OrientedReserves, PriceE18};

/// Swap fee numerator (997/1000 = 0.3% fee).
pub const FEE_NUMERATOR: u128 = 997;

/// Swap fee denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Result of simulating an exact-input swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactInQuote {
    amount_out: u128,
    execution_price: PriceE18,
    mid_after: PriceE18,
}

impl ExactInQuote {
    /// Returns the output amount the pool would pay.
    #[must_use]
    pub const fn amount_out(&self) -> u128 {
        self.amount_out
    }

    /// Returns the realized average price `out·1e18 / in`.
    #[must_use]
    pub const fn execution_price(&self) -> PriceE18 {
        self.execution_price
    }

    /// Returns the pool mid price after the simulated trade.
    #[must_use]
    pub const fn mid_after(&self) -> PriceE18 {
        self.mid_after
    }
}

/// Result of simulating an exact-output swap.
///
/// `feasible == false` means the pool cannot pay `amount_out` at all
/// (the request meets or exceeds the quote-side reserve, or the required
/// input does not fit in a `u128`). Infeasibility is an ordinary outcome,
/// not an error: `amount_in` is reported as zero and the caller fails the
/// verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactOutQuote {
    feasible: bool,
    amount_in: u128,
    execution_price: PriceE18,
    mid_after: PriceE18,
}

impl ExactOutQuote {
    /// Returns `true` if the pool can satisfy the requested output.
    #[must_use]
    pub const fn feasible(&self) -> bool {
        self.feasible
    }

    /// Returns the input amount required (zero when infeasible).
    #[must_use]
    pub const fn amount_in(&self) -> u128 {
        self.amount_in
    }

    /// Returns the realized average price `out·1e18 / in`.
    #[must_use]
    pub const fn execution_price(&self) -> PriceE18 {
        self.execution_price
    }

    /// Returns the pool mid price after the simulated trade.
    #[must_use]
    pub const fn mid_after(&self) -> PriceE18 {
        self.mid_after
    }

    const fn infeasible() -> Self {
        Self {
            feasible: false,
            amount_in: 0,
            execution_price: PriceE18::ZERO,
            mid_after: PriceE18::ZERO,
        }
    }
}

/// Simulates selling `amount_in` of base for quote.
///
/// Zero or absent reserves flow through as a zero output and therefore a
/// zero execution price — the deviation comparison turns that into a fail
/// verdict without any special-casing here.
#[must_use]
pub fn quote_exact_in(reserves: &OrientedReserves, amount_in: u128) -> ExactInQuote {
    let rb = reserves.reserve_base();
    let rq = reserves.reserve_quote();

    // in·997 and the denominator fit in 256 bits for any u128 inputs; the
    // full numerator does not when both the input and the quote reserve
    // approach u128::MAX, so it is checked and degrades to a zero output.
    let in_with_fee = U256::from(amount_in) * U256::from(FEE_NUMERATOR);
    let denominator = U256::from(rb) * U256::from(FEE_DENOMINATOR) + in_with_fee;

    let amount_out = match in_with_fee.checked_mul(U256::from(rq)) {
        Some(numerator) if denominator != U256::ZERO => {
            // out < Rq always holds, so the cast is lossless.
            (numerator / denominator).as_u128()
        }
        _ => 0,
    };

    ExactInQuote {
        amount_out,
        execution_price: PriceE18::from_ratio(amount_out, amount_in),
        mid_after: PriceE18::from_ratio(rq - amount_out, rb.saturating_add(amount_in)),
    }
}

/// Simulates buying exactly `amount_out` of quote with base.
#[must_use]
pub fn quote_exact_out(reserves: &OrientedReserves, amount_out: u128) -> ExactOutQuote {
    let rb = reserves.reserve_base();
    let rq = reserves.reserve_quote();

    if amount_out >= rq {
        return ExactOutQuote::infeasible();
    }

    // rb·out fits in 256 bits; the extra fee factor can overflow at the
    // u128 extremes, which makes the trade infeasible like any other
    // input the pool cannot price.
    let Some(numerator) = (U256::from(rb) * U256::from(amount_out))
        .checked_mul(U256::from(FEE_DENOMINATOR))
    else {
        return ExactOutQuote::infeasible();
    };
    let denominator = U256::from(rq - amount_out) * U256::from(FEE_NUMERATOR);

    let (q, r) = (numerator / denominator, numerator % denominator);
    let required = if r == U256::ZERO { q } else { q + U256::ONE };
    if required > U256::from(u128::MAX) {
        return ExactOutQuote::infeasible();
    }
    let amount_in = required.as_u128();

    ExactOutQuote {
        feasible: true,
        amount_in,
        execution_price: PriceE18::from_ratio(amount_out, amount_in),
        mid_after: PriceE18::from_ratio(rq - amount_out, rb.saturating_add(amount_in)),
    }
}
