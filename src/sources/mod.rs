//! Ready-made implementations of the guard's collaborator traits.

mod clock;
mod memory;

pub use clock::{FixedClock, SystemClock};
pub use memory::{MemoryPoolSource, StaticPriceSource};
