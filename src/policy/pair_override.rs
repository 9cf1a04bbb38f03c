//! Per-pair policy overrides with field-level inheritance.

use core::fmt;

use crate::domain::BasisPoints;

/// A single override field: either inherit the global default or pin a
/// value for this pair.
///
/// The administrative wire format encodes "inherit" as a literal zero;
/// modelling the merge as a three-valued choice keeps that encoding detail
/// out of the resolution logic and leaves room for a genuine zero setting
/// later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override<T> {
    /// Fall back to the corresponding [`Defaults`](super::Defaults) field.
    Inherit,
    /// Use this value for the pair.
    Set(T),
}

impl<T: Copy> Override<T> {
    /// Resolves against the default value.
    #[must_use]
    pub fn resolve(&self, default: T) -> T {
        match self {
            Self::Inherit => default,
            Self::Set(value) => *value,
        }
    }
}

/// A per-pair policy record, keyed by canonical pair identity in the
/// [`PolicyStore`](super::PolicyStore).
///
/// A disabled record behaves exactly as if it were absent: resolution falls
/// back to the global defaults for every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOverride {
    hard_bps: Override<BasisPoints>,
    stale_sec: Override<u32>,
    enabled: bool,
}

impl PairOverride {
    /// Builds a record from the administrative encoding, where a zero field
    /// means "inherit the default" rather than a literal zero threshold.
    #[must_use]
    pub const fn from_raw(hard_bps: BasisPoints, stale_sec: u32, enabled: bool) -> Self {
        Self {
            hard_bps: if hard_bps.is_zero() {
                Override::Inherit
            } else {
                Override::Set(hard_bps)
            },
            stale_sec: if stale_sec == 0 {
                Override::Inherit
            } else {
                Override::Set(stale_sec)
            },
            enabled,
        }
    }

    /// Builds a record with explicit per-field choices.
    #[must_use]
    pub const fn new(hard_bps: Override<BasisPoints>, stale_sec: Override<u32>, enabled: bool) -> Self {
        Self {
            hard_bps,
            stale_sec,
            enabled,
        }
    }

    /// Returns the deviation-limit choice.
    #[must_use]
    pub const fn hard_bps(&self) -> Override<BasisPoints> {
        self.hard_bps
    }

    /// Returns the staleness-window choice.
    #[must_use]
    pub const fn stale_sec(&self) -> Override<u32> {
        self.stale_sec
    }

    /// Returns `true` if the record participates in resolution.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Display for PairOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hard: &dyn fmt::Display = match &self.hard_bps {
            Override::Inherit => &"inherit",
            Override::Set(v) => v,
        };
        let stale: &dyn fmt::Display = match &self.stale_sec {
            Override::Inherit => &"inherit",
            Override::Set(v) => v,
        };
        write!(
            f,
            "hard={hard} stale={stale} enabled={}",
            self.enabled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fields_mean_inherit() {
        let o = PairOverride::from_raw(BasisPoints::ZERO, 0, true);
        assert_eq!(o.hard_bps(), Override::Inherit);
        assert_eq!(o.stale_sec(), Override::Inherit);
        assert!(o.enabled());
    }

    #[test]
    fn nonzero_fields_are_set() {
        let o = PairOverride::from_raw(BasisPoints::new(250), 30, true);
        assert_eq!(o.hard_bps(), Override::Set(BasisPoints::new(250)));
        assert_eq!(o.stale_sec(), Override::Set(30));
    }

    #[test]
    fn mixed_fields_resolve_independently() {
        let o = PairOverride::from_raw(BasisPoints::new(250), 0, true);
        assert_eq!(o.hard_bps().resolve(BasisPoints::new(400)).get(), 250);
        assert_eq!(o.stale_sec().resolve(60), 60);
    }

    #[test]
    fn resolve_set_ignores_default() {
        assert_eq!(Override::Set(7u32).resolve(99), 7);
        assert_eq!(Override::<u32>::Inherit.resolve(99), 99);
    }

    #[test]
    fn display() {
        let o = PairOverride::from_raw(BasisPoints::new(250), 0, true);
        assert_eq!(format!("{o}"), "hard=250bp stale=inherit enabled=true");
    }
}
