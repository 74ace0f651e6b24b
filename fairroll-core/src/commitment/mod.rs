pub mod scheme;

pub use scheme::{Commitment, CommitmentScheme};

use crate::{Result, ServerSeed};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

/// SHA-256 commitment over the hex text of the server seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCommitment;

impl CommitmentScheme for HashCommitment {
    type Secret = ServerSeed;
    type Commitment = Commitment;

    fn commit(secret: &ServerSeed) -> Commitment {
        Commitment::from_hex(sha256_hex(secret.as_str()))
    }

    fn verify(commitment: &Commitment, secret: &ServerSeed) -> bool {
        Self::commit(secret).as_hex() == commitment.as_hex()
    }
}

/// Hex-encoded SHA-256 of the UTF-8 bytes of `data`.
pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fresh server seed and its commitment
pub fn generate() -> Result<(ServerSeed, Commitment)> {
    generate_with(&mut OsRng)
}

pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<(ServerSeed, Commitment)> {
    let seed = ServerSeed::generate_with(rng)?;
    let commitment = HashCommitment::commit(&seed);

    tracing::debug!("Generated server seed commitment {}", commitment);
    Ok((seed, commitment))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "00112233445566778899aabbccddeeff";
    const SEED_COMMITMENT: &str =
        "5947d7c33d783f94b3b4c1a96ebc8991ed28f1b069b71e03376cba8caa98a720";

    #[test]
    fn test_commitment_scheme() {
        let (seed, commitment) = generate().unwrap();

        assert!(HashCommitment::verify(&commitment, &seed));
        assert!(!HashCommitment::verify(
            &commitment,
            &ServerSeed::revealed("wrong secret")
        ));
    }

    #[test]
    fn test_known_commitment() {
        let commitment = HashCommitment::commit(&ServerSeed::revealed(SEED));
        assert_eq!(commitment.as_hex(), SEED_COMMITMENT);
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let seed = ServerSeed::revealed(SEED);
        assert_eq!(HashCommitment::commit(&seed), HashCommitment::commit(&seed));
    }

    #[test]
    fn test_generated_commitment_shape() {
        let (seed, commitment) = generate().unwrap();
        assert_eq!(seed.as_str().len(), 32);
        assert_eq!(commitment.as_hex().len(), 64);
        assert_eq!(commitment, HashCommitment::commit(&seed));
    }
}
