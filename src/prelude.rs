//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use swapguard::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AssetId, BasisPoints, OrientedReserves, PairKey, PriceE18, PriceQuote, PriceSource, E18,
};

// Re-export collaborator traits
pub use crate::traits::{Clock, PoolReserveSource, ReferencePriceSource};

// Re-export policy configuration
pub use crate::policy::{Defaults, Override, PairOverride, ResolvedPolicy};

// Re-export the guard façade and verdicts
pub use crate::guard::{ExactOutCheck, PriceCheck, SwapCheck, SwapGuard};

// Re-export error types
pub use crate::error::{GuardError, Result};
