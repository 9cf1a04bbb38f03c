//! Unified error types for the swap guard.
//!
//! Only *structural* and *authorization* failures are errors: a malformed
//! path, a null asset identifier, a zero trade amount, or an administrative
//! mutation from the wrong caller. Adverse market conditions — missing
//! pools, zero reserves, stale reference prices, infeasible exact-out
//! requests — are ordinary result fields on the check types, never errors.

use thiserror::Error;

/// Error type for all fallible guard operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    /// The swap path is malformed: wrong length, duplicate assets, or a
    /// null asset identifier.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// An asset identifier is invalid in this position (e.g. the null
    /// address passed to an administrative setter).
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A quantity violates a structural invariant (e.g. a zero amount).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// An administrative mutation was attempted by a caller other than
    /// the recorded administrator. State is left unchanged.
    #[error("caller is not the policy administrator")]
    Unauthorized,
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, GuardError>;
