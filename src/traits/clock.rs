//! Time source abstraction.

/// Provides the current time in seconds since the Unix epoch.
///
/// The guard never reads the system clock directly; injecting the clock
/// keeps staleness decisions deterministic under test.
pub trait Clock {
    /// Current time, seconds since epoch.
    fn now(&self) -> u64;
}
