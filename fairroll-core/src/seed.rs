use crate::{DiceError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes behind every generated seed (32 hex characters).
pub const SEED_BYTES: usize = 16;

/// Secret chosen by the server for a single roll.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerSeed(String);

impl ServerSeed {
    /// Fresh seed from the operating system RNG
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        random_hex(rng).map(Self)
    }

    /// Wrap a seed revealed by a server. No format check is applied so that
    /// the verifier can be fed whatever the server actually sent.
    pub fn revealed(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-scoped value supplied by the player with every bet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientSeed(String);

impl ClientSeed {
    pub fn new(seed: impl Into<String>) -> Result<Self> {
        let seed = seed.into();
        if seed.is_empty() {
            return Err(DiceError::invalid_seed("client seed is empty"));
        }
        Ok(Self(seed))
    }

    /// New session seed, formatted the same way as server seeds
    pub fn random() -> Result<Self> {
        Self::random_with(&mut OsRng)
    }

    pub fn random_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        random_hex(rng).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClientSeed {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ClientSeed> for String {
    fn from(seed: ClientSeed) -> Self {
        seed.0
    }
}

impl fmt::Display for ClientSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn random_hex<R: RngCore + CryptoRng>(rng: &mut R) -> Result<String> {
    let mut bytes = [0u8; SEED_BYTES];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
