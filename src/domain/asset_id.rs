//! Chain-agnostic asset identifier.

use core::fmt;

/// A generic, chain-agnostic identifier for a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// considered valid identifiers, so construction is infallible. The
/// all-zero identifier is the *null* sentinel: it is rejected wherever an
/// actual asset is required (swap paths, pair keys, the administrator id).
///
/// # Examples
///
/// ```
/// use swapguard::domain::AssetId;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(asset.as_bytes(), [1u8; 32]);
/// assert!(!asset.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero (null) identifier.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null identifier.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AssetId {
    /// Formats the identifier as the first four bytes in hex, e.g. `01010101…`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
