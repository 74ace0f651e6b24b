use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for commitment schemes
pub trait CommitmentScheme {
    type Secret;
    type Commitment;

    fn commit(secret: &Self::Secret) -> Self::Commitment;
    fn verify(commitment: &Self::Commitment, secret: &Self::Secret) -> bool;
}

/// Published digest of a server seed, hex-encoded.
///
/// Sent to the player as `hashedServerSeed`. Comparison is plain string
/// equality, so a digest in another letter case does not match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(String);

impl Commitment {
    pub fn from_hex(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn into_hex(self) -> String {
        self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
