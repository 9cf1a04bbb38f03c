//! Seams between the guard and its environment.
//!
//! The guard core is pure; everything environmental arrives through these
//! three traits: reference prices, pool reserves, and time. In-memory
//! implementations suitable for tests and embedding live in
//! [`crate::sources`].

mod clock;
mod pool_reserve_source;
mod reference_price_source;

pub use clock::Clock;
pub use pool_reserve_source::{PoolHandle, PoolReserveSource, PoolReserves};
pub use reference_price_source::ReferencePriceSource;
