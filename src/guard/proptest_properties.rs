//! Property-based tests using `proptest` for guard invariant validation.
//!
//! Covers:
//!
//! 1. **Policy symmetry** — resolution is independent of argument order.
//! 2. **Orientation reciprocity** — mid prices of the two orientations are
//!    reciprocals up to fixed-point truncation.
//! 3. **Exact-out consistency** — feeding the required input back through
//!    exact-in yields at least the requested output.
//! 4. **Verdict soundness** — `ok` is exactly `dev_bps <= limit` for fresh
//!    dynamic quotes.
//! 5. **Fixed quotes never go stale**, at any age and any window.

use proptest::prelude::*;

use crate::domain::{
    AssetId, BasisPoints, OrientedReserves, PriceE18, PriceQuote, PriceSource, E18,
};
use crate::error::Result;
use crate::math::{deviation_bps, quote_exact_in, quote_exact_out};
use crate::policy::{Defaults, PairOverride};
use crate::sources::{FixedClock, MemoryPoolSource, StaticPriceSource};

use super::SwapGuard;

fn asset(byte: u8) -> AssetId {
    AssetId::from_bytes([byte; 32])
}

fn admin() -> AssetId {
    asset(9)
}

fn build_guard(
    pools: MemoryPoolSource,
    prices: StaticPriceSource,
    now: u64,
    defaults: Defaults,
) -> Result<SwapGuard> {
    let guard = SwapGuard::new(
        admin(),
        Box::new(prices),
        Box::new(pools),
        Box::new(FixedClock::new(now)),
    )?;
    guard.set_defaults(admin(), defaults)?;
    Ok(guard)
}

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

fn bps_strategy() -> impl Strategy<Value = u16> {
    0u16..=10_000u16
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_policy_resolution_symmetric(
        hard in bps_strategy(),
        stale in 0u32..=86_400,
        enabled in any::<bool>(),
    ) {
        let guard = build_guard(
            MemoryPoolSource::new(),
            StaticPriceSource::new(),
            0,
            Defaults::new(BasisPoints::new(400), BasisPoints::new(800), 60),
        );
        let Ok(guard) = guard else {
            return Err(TestCaseError::fail("guard construction"));
        };
        prop_assert!(guard
            .set_pair_override(
                admin(),
                asset(1),
                asset(2),
                PairOverride::from_raw(BasisPoints::new(hard), stale, enabled),
            )
            .is_ok());

        let (Ok(fwd), Ok(rev)) = (
            guard.resolve_policy(asset(1), asset(2)),
            guard.resolve_policy(asset(2), asset(1)),
        ) else {
            return Err(TestCaseError::fail("resolution"));
        };
        prop_assert_eq!(fwd, rev);
    }

    #[test]
    fn prop_mid_prices_reciprocal(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
    ) {
        let fwd = OrientedReserves::new(rb, rq).mid_price();
        let rev = OrientedReserves::new(rq, rb).mid_price();
        // fwd · rev ≈ 1e36. Each side truncates at most one unit, so the
        // product undershoots by less than fwd + rev + 2.
        let Some(product) = fwd.get().checked_mul(rev.get()) else {
            return Err(TestCaseError::fail("product overflow"));
        };
        let target = E18 * E18;
        prop_assert!(product <= target);
        prop_assert!(target - product < fwd.get() + rev.get() + 2);
    }

    #[test]
    fn prop_exact_out_then_in_covers_request(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        out_frac in 1u128..=100,
    ) {
        let reserves = OrientedReserves::new(rb, rq);
        let amount_out = (rq * out_frac / 200).max(1);
        let quote = quote_exact_out(&reserves, amount_out);
        prop_assert!(quote.feasible());
        let back = quote_exact_in(&reserves, quote.amount_in());
        prop_assert!(back.amount_out() >= amount_out);
    }

    #[test]
    fn prop_exact_in_output_monotonic(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        amount in 1u128..=1_000_000,
    ) {
        let reserves = OrientedReserves::new(rb, rq);
        let small = quote_exact_in(&reserves, amount);
        let large = quote_exact_in(&reserves, amount + 1);
        prop_assert!(large.amount_out() >= small.amount_out());
        prop_assert!(large.amount_out() < rq);
    }

    #[test]
    fn prop_verdict_matches_deviation(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        oracle_raw in (E18 / 10)..=(10 * E18),
        limit in bps_strategy(),
    ) {
        let mut pools = MemoryPoolSource::new();
        pools.add_pool(asset(1), asset(2), rb, rq);
        let mut prices = StaticPriceSource::new();
        let oracle = PriceE18::from_raw(oracle_raw);
        prices.set_price(
            asset(1),
            asset(2),
            PriceQuote::new(oracle, 1_000, PriceSource::Dynamic),
        );
        let guard = build_guard(
            pools,
            prices,
            1_000,
            Defaults::new(BasisPoints::new(limit), BasisPoints::new(limit), 60),
        );
        let Ok(guard) = guard else {
            return Err(TestCaseError::fail("guard construction"));
        };

        let amount_in = (rb / 1_000).max(1);
        let Ok(check) = guard.check_swap_exact_in(&[asset(1), asset(2)], amount_in) else {
            return Err(TestCaseError::fail("check"));
        };
        let expected = quote_exact_in(&OrientedReserves::new(rb, rq), amount_in);
        let dev = deviation_bps(expected.execution_price(), oracle);
        prop_assert_eq!(check.dev_bps(), dev);
        prop_assert_eq!(check.ok(), dev <= u64::from(limit));
    }

    #[test]
    fn prop_fixed_quotes_never_stale(
        updated_at in any::<u64>(),
        now in any::<u64>(),
        window in any::<u32>(),
    ) {
        let quote = PriceQuote::new(PriceE18::ONE, updated_at, PriceSource::Fixed);
        prop_assert!(!quote.is_stale(now, window));
    }
}
