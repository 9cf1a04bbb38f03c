//! The guard façade and its supporting pieces: orientation normalization
//! and the query result records.

mod orientation;
mod swap_guard;
mod verdict;

#[cfg(test)]
mod proptest_properties;

pub use orientation::oriented_reserves;
pub use swap_guard::{DynPriceSource, SwapGuard};
pub use verdict::{ExactOutCheck, PriceCheck, SwapCheck};
