//! Policy configuration: global defaults, per-pair overrides, and the
//! merge that produces the effective thresholds for a query.

mod defaults;
mod pair_override;
mod store;

pub use defaults::Defaults;
pub use pair_override::{Override, PairOverride};
pub use store::{PolicyStore, ResolvedPolicy};
