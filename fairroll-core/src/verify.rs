//! Player-side fairness checks.
//!
//! `verify` only proves the server did not swap its seed after publishing the
//! commitment. `verify_roll` and `verify_proof` additionally recompute the
//! roll from both seeds, which is what actually ties the reported face to the
//! commitment.

use crate::commitment::sha256_hex;
use crate::roll::roll_from_seeds;
use crate::types::RollResponse;
use crate::{ClientSeed, Commitment, RollOutcome, ServerSeed};
use serde::{Deserialize, Serialize};

/// Check that `commitment` is the digest of `server_seed`. Empty inputs never verify.
pub fn verify(server_seed: &str, commitment: &str) -> bool {
    if server_seed.is_empty() || commitment.is_empty() {
        return false;
    }
    sha256_hex(server_seed) == commitment
}

/// Check that the two seeds produce the reported face.
pub fn verify_roll(server_seed: &str, client_seed: &str, reported_roll: u8) -> bool {
    if server_seed.is_empty() || client_seed.is_empty() {
        return false;
    }
    RollOutcome::new(reported_roll)
        .map_or(false, |roll| roll_from_seeds(server_seed, client_seed) == roll)
}

/// Everything a player keeps from one roll to audit it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollProof {
    pub server_seed: String,
    pub hashed_server_seed: String,
    pub client_seed: String,
    pub roll: u8,
}

impl RollProof {
    pub fn from_response(response: &RollResponse, client_seed: &ClientSeed) -> Self {
        Self {
            server_seed: response.server_seed.as_str().to_string(),
            hashed_server_seed: response.hashed_server_seed.as_hex().to_string(),
            client_seed: client_seed.as_str().to_string(),
            roll: response.roll.value(),
        }
    }

    pub fn server_seed(&self) -> ServerSeed {
        ServerSeed::revealed(self.server_seed.clone())
    }

    pub fn commitment(&self) -> Commitment {
        Commitment::from_hex(self.hashed_server_seed.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// The revealed seed hashes to the published commitment
    pub commitment_valid: bool,
    /// The seeds reproduce the reported roll
    pub roll_valid: bool,
}

impl Verification {
    pub fn is_fair(&self) -> bool {
        self.commitment_valid && self.roll_valid
    }
}

pub fn verify_proof(proof: &RollProof) -> Verification {
    let verification = Verification {
        commitment_valid: verify(&proof.server_seed, &proof.hashed_server_seed),
        roll_valid: verify_roll(&proof.server_seed, &proof.client_seed, proof.roll),
    };

    if !verification.is_fair() {
        tracing::warn!(
            "Fairness check failed for commitment {}: {:?}",
            proof.hashed_server_seed,
            verification
        );
    }

    verification
}
