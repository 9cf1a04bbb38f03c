//! # SwapGuard
//!
//! Pre-trade price-safety guard for constant-product AMM swaps.
//!
//! Given a proposed exchange between two assets on a constant-product
//! liquidity pool, the guard decides whether the pool's current or
//! post-trade price is consistent with an independent reference price,
//! within a configurable tolerance, and whether that reference price is
//! fresh enough to trust. It is meant for front-ends and routing services
//! that want to block trades likely caused by price manipulation or stale
//! oracle data, without moving funds or executing trades itself.
//!
//! The guard advises, it does not throw: a missing pool, zero reserves, a
//! stale oracle, or an infeasible exact-out request all come back as
//! ordinary result fields (`ok=false`, `stale=true`, zeroed prices).
//! Errors are reserved for malformed requests and failed authorization.
//!
//! # Quick Start
//!
//! ```rust
//! use swapguard::domain::{AssetId, BasisPoints, PriceE18, PriceQuote, PriceSource, E18};
//! use swapguard::guard::SwapGuard;
//! use swapguard::policy::Defaults;
//! use swapguard::sources::{FixedClock, MemoryPoolSource, StaticPriceSource};
//!
//! let weth = AssetId::from_bytes([1u8; 32]);
//! let usdc = AssetId::from_bytes([2u8; 32]);
//! let admin = AssetId::from_bytes([9u8; 32]);
//!
//! // A pool priced at 2.0 USDC per WETH, and an oracle that agrees.
//! let mut pools = MemoryPoolSource::new();
//! pools.add_pool(weth, usdc, 1_000_000, 2_000_000);
//! let mut prices = StaticPriceSource::new();
//! prices.set_price(
//!     weth,
//!     usdc,
//!     PriceQuote::new(PriceE18::from_raw(2 * E18), 990, PriceSource::Dynamic),
//! );
//!
//! let guard = SwapGuard::new(
//!     admin,
//!     Box::new(prices),
//!     Box::new(pools),
//!     Box::new(FixedClock::new(1_000)),
//! )
//! .expect("non-null admin");
//!
//! // Tolerate 4% deviation for dynamic quotes, 8% for pinned ones,
//! // and trust dynamic quotes for 60 seconds.
//! guard
//!     .set_defaults(
//!         admin,
//!         Defaults::new(BasisPoints::new(400), BasisPoints::new(800), 60),
//!     )
//!     .expect("caller is admin");
//!
//! let check = guard
//!     .check_swap_exact_in(&[weth, usdc], 1_000)
//!     .expect("well-formed request");
//! assert!(check.ok());
//! assert!(check.dev_bps() <= 400);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  front-end / router asking "is this trade safe?"
//! └──────┬──────┘
//!        │ check_price_now / check_swap_exact_in / check_swap_exact_out
//!        ▼
//! ┌─────────────┐
//! │  SwapGuard   │  validates path, resolves policy, composes the verdict
//! └──────┬──────┘
//!        │ ReferencePriceSource + PoolReserveSource + Clock
//!        ▼
//! ┌─────────────┐
//! │   Policy     │  Defaults ⊕ PairOverride → ResolvedPolicy
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Math      │  constant-product quotes, deviation in bps
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`AssetId`](domain::AssetId), [`PairKey`](domain::PairKey), [`PriceE18`](domain::PriceE18), [`PriceQuote`](domain::PriceQuote), … |
//! | [`traits`] | Collaborator seams: [`ReferencePriceSource`](traits::ReferencePriceSource), [`PoolReserveSource`](traits::PoolReserveSource), [`Clock`](traits::Clock) |
//! | [`policy`] | [`Defaults`](policy::Defaults), [`PairOverride`](policy::PairOverride), and the [`PolicyStore`](policy::PolicyStore) merge |
//! | [`guard`]  | The [`SwapGuard`](guard::SwapGuard) façade, orientation normalization, verdict records |
//! | [`math`]   | Constant-product swap simulation, `mul_div`, deviation measurement |
//! | [`sources`] | In-memory collaborator implementations and clocks |
//! | [`error`]  | [`GuardError`](error::GuardError) for malformed requests and authorization |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod guard;
pub mod math;
pub mod policy;
pub mod prelude;
pub mod sources;
pub mod traits;
