//! Canonical unordered pair key over two assets.

use super::AssetId;
use crate::error::GuardError;

/// An unordered pair of distinct assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees that `lo() < hi()`, so
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` produce the same key.
/// Per-pair policy overrides are stored under this key, which is what makes
/// policy resolution symmetric in the call-site argument order.
///
/// # Examples
///
/// ```
/// use swapguard::domain::{AssetId, PairKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let k1 = PairKey::new(a, b).expect("distinct assets");
/// let k2 = PairKey::new(b, a).expect("distinct assets");
/// assert_eq!(k1, k2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    lo: AssetId,
    hi: AssetId,
}

impl PairKey {
    /// Creates a new canonically-ordered `PairKey`.
    ///
    /// # Errors
    ///
    /// - [`GuardError::InvalidAsset`] if either asset is the null id.
    /// - [`GuardError::InvalidPath`] if both assets are identical.
    pub fn new(a: AssetId, b: AssetId) -> crate::error::Result<Self> {
        if a.is_zero() || b.is_zero() {
            return Err(GuardError::InvalidAsset("pair key requires non-null assets"));
        }
        if a == b {
            return Err(GuardError::InvalidPath(
                "pair key requires two distinct assets",
            ));
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { lo, hi })
    }

    /// Returns the lower asset identifier.
    #[must_use]
    pub const fn lo(&self) -> AssetId {
        self.lo
    }

    /// Returns the higher asset identifier.
    #[must_use]
    pub const fn hi(&self) -> AssetId {
        self.hi
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.lo == *asset || self.hi == *asset
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn preserves_sorted_order() {
        let Ok(key) = PairKey::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(key.lo(), asset(1));
        assert_eq!(key.hi(), asset(2));
    }

    #[test]
    fn auto_sorts_reversed_input() {
        let Ok(key) = PairKey::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(key.lo(), asset(1));
        assert_eq!(key.hi(), asset(2));
    }

    #[test]
    fn symmetric_construction() {
        let (Ok(k1), Ok(k2)) = (
            PairKey::new(asset(1), asset(2)),
            PairKey::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(k1, k2);
    }

    #[test]
    fn rejects_identical_assets() {
        let result = PairKey::new(asset(1), asset(1));
        assert!(matches!(result, Err(GuardError::InvalidPath(_))));
    }

    #[test]
    fn rejects_null_asset() {
        let result = PairKey::new(AssetId::zero(), asset(1));
        assert!(matches!(result, Err(GuardError::InvalidAsset(_))));
        let result = PairKey::new(asset(1), AssetId::zero());
        assert!(matches!(result, Err(GuardError::InvalidAsset(_))));
    }

    #[test]
    fn contains_both_members() {
        let Ok(key) = PairKey::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(key.contains(&asset(1)));
        assert!(key.contains(&asset(2)));
        assert!(!key.contains(&asset(3)));
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;
        let Ok(key) = PairKey::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let Ok(reversed) = PairKey::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        let mut map = HashMap::new();
        map.insert(key, 42u32);
        assert_eq!(map.get(&reversed), Some(&42));
    }
}
