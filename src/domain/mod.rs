//! Fundamental domain value types used throughout the guard.
//!
//! This module contains the core value types that model the guard's
//! domain: asset identifiers, canonical pair keys, basis-point thresholds,
//! 1e18 fixed-point prices, reference quotes, and oriented pool reserves.
//! All types are newtypes or small structs with validated constructors.

mod asset_id;
mod basis_points;
mod pair_key;
mod price_e18;
mod price_quote;
mod reserves;

pub use asset_id::AssetId;
pub use basis_points::BasisPoints;
pub use pair_key::PairKey;
pub use price_e18::{E18, PriceE18};
pub use price_quote::{PriceQuote, PriceSource};
pub use reserves::OrientedReserves;
