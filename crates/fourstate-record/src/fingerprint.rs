//! Content fingerprints for the two artifacts of a verification pair
//!
//! Recorded run outcomes are only valid for the exact test and fix content
//! they were observed under. Fingerprinting the two artifacts lets the
//! record detect edits and clear the dependent outcomes automatically.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte content hash (Blake3)
///
/// Immutable and cheap to clone (Copy). Serialized as hex in human-readable
/// formats, raw bytes otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a hash from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Compute the Blake3 hash of arbitrary content
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Self::new(*hash.as_bytes())
    }

    /// Create a hash from a byte slice
    ///
    /// # Errors
    /// Returns an error if the slice is not exactly 32 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FingerprintError> {
        if bytes.len() != 32 {
            return Err(FingerprintError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ContentHash {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ContentHashVisitor;

        impl<'de> serde::de::Visitor<'de> for ContentHashVisitor {
            type Value = ContentHash;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 32-byte hash as hex string or byte array")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ContentHash::from_str(v).map_err(E::custom)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ContentHash::from_slice(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(ContentHashVisitor)
        } else {
            deserializer.deserialize_bytes(ContentHashVisitor)
        }
    }
}

/// Errors for fingerprint construction
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// Byte slice of the wrong length
    #[error("invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Invalid hex encoding
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// The two editable artifacts of a verification pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// The new test
    Test,
    /// The production-code fix
    Fix,
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Test => write!(f, "test"),
            ArtifactKind::Fix => write!(f, "fix"),
        }
    }
}

/// Current content hashes of a pair's test and fix artifacts
///
/// Each artifact is tracked lazily: an artifact not yet observed holds no
/// hash, and its first observation is never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairFingerprint {
    /// Hash of the test content, once observed
    pub test: Option<ContentHash>,
    /// Hash of the fix content, once observed
    pub fix: Option<ContentHash>,
}

impl PairFingerprint {
    /// Fingerprint with neither artifact observed yet
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            test: None,
            fix: None,
        }
    }

    /// Fingerprint from raw artifact contents
    #[inline]
    #[must_use]
    pub fn compute(test_content: &[u8], fix_content: &[u8]) -> Self {
        Self {
            test: Some(ContentHash::compute(test_content)),
            fix: Some(ContentHash::compute(fix_content)),
        }
    }

    /// Hash of one artifact, if observed
    #[inline]
    #[must_use]
    pub const fn hash_of(&self, kind: ArtifactKind) -> Option<ContentHash> {
        match kind {
            ArtifactKind::Test => self.test,
            ArtifactKind::Fix => self.fix,
        }
    }

    /// Record one artifact's current hash, returning whether it drifted
    /// from a previously observed hash
    pub fn update(&mut self, kind: ArtifactKind, hash: ContentHash) -> bool {
        let slot = match kind {
            ArtifactKind::Test => &mut self.test,
            ArtifactKind::Fix => &mut self.fix,
        };
        let changed = matches!(slot, Some(old) if *old != hash);
        *slot = Some(hash);
        changed
    }
}
