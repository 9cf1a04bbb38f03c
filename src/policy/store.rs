//! Policy storage and per-pair resolution.

use std::collections::HashMap;

use tracing::info;

use crate::domain::{AssetId, BasisPoints, PairKey, PriceSource};
use crate::error::GuardError;
use crate::policy::{Defaults, PairOverride};

/// The effective thresholds for one pair and one query, after merging
/// [`Defaults`] with any enabled [`PairOverride`].
///
/// `hard_bps_fixed` is carried along so the final limit can be relaxed for
/// administratively pinned prices at verdict time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPolicy {
    hard_bps: BasisPoints,
    hard_bps_fixed: BasisPoints,
    stale_sec: u32,
}

impl ResolvedPolicy {
    /// Returns the pair's deviation limit before source relaxation.
    #[must_use]
    pub const fn hard_bps(&self) -> BasisPoints {
        self.hard_bps
    }

    /// Returns the staleness window in seconds.
    #[must_use]
    pub const fn stale_sec(&self) -> u32 {
        self.stale_sec
    }

    /// The limit actually enforced for a quote of the given source.
    ///
    /// Pinned prices are trusted with a relaxed tolerance: the limit is the
    /// larger of the pair's `hard_bps` and the global `hard_bps_fixed`.
    /// Dynamic prices use the pair's `hard_bps` unchanged.
    #[must_use]
    pub const fn limit_bps(&self, source: PriceSource) -> BasisPoints {
        match source {
            PriceSource::Fixed => self.hard_bps.max(self.hard_bps_fixed),
            PriceSource::Dynamic => self.hard_bps,
        }
    }
}

/// Owner of the global [`Defaults`] and the per-pair override map.
///
/// Mutations are restricted to the administrative identity given at
/// construction; everything else reads. The store itself is not
/// synchronized — [`SwapGuard`](crate::guard::SwapGuard) wraps it in a
/// single-writer, multiple-reader lock.
#[derive(Debug)]
pub struct PolicyStore {
    admin: AssetId,
    defaults: Defaults,
    overrides: HashMap<PairKey, PairOverride>,
}

impl PolicyStore {
    /// Creates an empty store administered by `admin`.
    ///
    /// # Errors
    ///
    /// [`GuardError::InvalidAsset`] if `admin` is the null identity.
    pub fn new(admin: AssetId) -> crate::error::Result<Self> {
        if admin.is_zero() {
            return Err(GuardError::InvalidAsset("admin must be a non-null identity"));
        }
        Ok(Self {
            admin,
            defaults: Defaults::default(),
            overrides: HashMap::new(),
        })
    }

    /// Returns the current global defaults.
    #[must_use]
    pub const fn defaults(&self) -> Defaults {
        self.defaults
    }

    /// Returns the stored override for a pair, enabled or not.
    #[must_use]
    pub fn pair_override(&self, key: &PairKey) -> Option<PairOverride> {
        self.overrides.get(key).copied()
    }

    /// Replaces the global defaults.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] if `caller` is not the administrator;
    /// the store is left unchanged.
    pub fn set_defaults(&mut self, caller: AssetId, defaults: Defaults) -> crate::error::Result<()> {
        self.authorize(caller)?;
        self.defaults = defaults;
        info!(%defaults, "policy defaults updated");
        Ok(())
    }

    /// Writes the override record for the canonical `(a, b)` pair.
    ///
    /// Writing a disabled record is how an override is retired; the record
    /// stays in the map but no longer participates in resolution.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] if `caller` is not the administrator.
    /// [`GuardError::InvalidAsset`] / [`GuardError::InvalidPath`] if the
    /// pair is malformed. The store is left unchanged on any error.
    pub fn set_pair_override(
        &mut self,
        caller: AssetId,
        a: AssetId,
        b: AssetId,
        record: PairOverride,
    ) -> crate::error::Result<()> {
        self.authorize(caller)?;
        let key = PairKey::new(a, b)?;
        self.overrides.insert(key, record);
        info!(lo = %key.lo(), hi = %key.hi(), %record, "pair override updated");
        Ok(())
    }

    /// Merges defaults and any enabled override into the effective policy
    /// for a pair.
    ///
    /// Resolution is field-by-field: an override field set to "inherit"
    /// falls back to the corresponding default, independently of the other
    /// fields. A disabled or absent override yields the defaults directly.
    #[must_use]
    pub fn resolve_policy(&self, key: &PairKey) -> ResolvedPolicy {
        let (hard_bps, stale_sec) = match self.overrides.get(key) {
            Some(record) if record.enabled() => (
                record.hard_bps().resolve(self.defaults.hard_bps()),
                record.stale_sec().resolve(self.defaults.stale_sec()),
            ),
            _ => (self.defaults.hard_bps(), self.defaults.stale_sec()),
        };
        ResolvedPolicy {
            hard_bps,
            hard_bps_fixed: self.defaults.hard_bps_fixed(),
            stale_sec,
        }
    }

    /// Checks that `caller` holds the administrative capability.
    ///
    /// # Errors
    ///
    /// [`GuardError::Unauthorized`] otherwise.
    pub fn authorize(&self, caller: AssetId) -> crate::error::Result<()> {
        if caller == self.admin {
            Ok(())
        } else {
            Err(GuardError::Unauthorized)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn store() -> PolicyStore {
        let Ok(mut s) = PolicyStore::new(asset(9)) else {
            panic!("expected Ok");
        };
        let Ok(()) = s.set_defaults(
            asset(9),
            Defaults::new(BasisPoints::new(400), BasisPoints::new(800), 60),
        ) else {
            panic!("expected Ok");
        };
        s
    }

    fn key(a: u8, b: u8) -> PairKey {
        let Ok(k) = PairKey::new(asset(a), asset(b)) else {
            panic!("expected Ok");
        };
        k
    }

    #[test]
    fn rejects_null_admin() {
        assert!(matches!(
            PolicyStore::new(AssetId::zero()),
            Err(GuardError::InvalidAsset(_))
        ));
    }

    #[test]
    fn no_override_uses_defaults() {
        let s = store();
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.hard_bps().get(), 400);
        assert_eq!(p.stale_sec(), 60);
    }

    #[test]
    fn enabled_override_supersedes() {
        let mut s = store();
        let Ok(()) = s.set_pair_override(
            asset(9),
            asset(1),
            asset(2),
            PairOverride::from_raw(BasisPoints::new(250), 30, true),
        ) else {
            panic!("expected Ok");
        };
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.hard_bps().get(), 250);
        assert_eq!(p.stale_sec(), 30);
    }

    #[test]
    fn zero_override_fields_inherit() {
        let mut s = store();
        let Ok(()) = s.set_pair_override(
            asset(9),
            asset(1),
            asset(2),
            PairOverride::from_raw(BasisPoints::ZERO, 30, true),
        ) else {
            panic!("expected Ok");
        };
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.hard_bps().get(), 400);
        assert_eq!(p.stale_sec(), 30);
    }

    #[test]
    fn disabled_override_ignored() {
        let mut s = store();
        let Ok(()) = s.set_pair_override(
            asset(9),
            asset(1),
            asset(2),
            PairOverride::from_raw(BasisPoints::new(250), 30, false),
        ) else {
            panic!("expected Ok");
        };
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.hard_bps().get(), 400);
        assert_eq!(p.stale_sec(), 60);
    }

    #[test]
    fn resolution_is_symmetric() {
        let mut s = store();
        let Ok(()) = s.set_pair_override(
            asset(9),
            asset(2),
            asset(1),
            PairOverride::from_raw(BasisPoints::new(250), 30, true),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(s.resolve_policy(&key(1, 2)), s.resolve_policy(&key(2, 1)));
        assert_eq!(s.resolve_policy(&key(1, 2)).hard_bps().get(), 250);
    }

    #[test]
    fn unauthorized_set_defaults_leaves_state() {
        let mut s = store();
        let result = s.set_defaults(
            asset(8),
            Defaults::new(BasisPoints::new(1), BasisPoints::new(1), 1),
        );
        assert!(matches!(result, Err(GuardError::Unauthorized)));
        assert_eq!(s.defaults().hard_bps().get(), 400);
    }

    #[test]
    fn unauthorized_set_override_leaves_state() {
        let mut s = store();
        let result = s.set_pair_override(
            asset(8),
            asset(1),
            asset(2),
            PairOverride::from_raw(BasisPoints::new(1), 1, true),
        );
        assert!(matches!(result, Err(GuardError::Unauthorized)));
        assert!(s.pair_override(&key(1, 2)).is_none());
    }

    #[test]
    fn malformed_pair_rejected() {
        let mut s = store();
        let result = s.set_pair_override(
            asset(9),
            asset(1),
            asset(1),
            PairOverride::from_raw(BasisPoints::new(1), 1, true),
        );
        assert!(matches!(result, Err(GuardError::InvalidPath(_))));
    }

    #[test]
    fn fixed_source_relaxes_limit() {
        let s = store();
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.limit_bps(PriceSource::Dynamic).get(), 400);
        assert_eq!(p.limit_bps(PriceSource::Fixed).get(), 800);
    }

    #[test]
    fn fixed_limit_keeps_larger_pair_setting() {
        let mut s = store();
        let Ok(()) = s.set_pair_override(
            asset(9),
            asset(1),
            asset(2),
            PairOverride::from_raw(BasisPoints::new(900), 0, true),
        ) else {
            panic!("expected Ok");
        };
        let p = s.resolve_policy(&key(1, 2));
        assert_eq!(p.limit_bps(PriceSource::Fixed).get(), 900);
    }

    #[test]
    fn last_writer_wins_per_key() {
        let mut s = store();
        for stale in [10, 20, 30] {
            let Ok(()) = s.set_pair_override(
                asset(9),
                asset(1),
                asset(2),
                PairOverride::from_raw(BasisPoints::new(250), stale, true),
            ) else {
                panic!("expected Ok");
            };
        }
        assert_eq!(s.resolve_policy(&key(1, 2)).stale_sec(), 30);
    }
}
