//! Roll derivation from a server seed and a client seed.
//!
//! The roll is the first 24 bits of `sha256(server_seed || client_seed)`
//! reduced modulo 6. Since 2^24 mod 6 = 4, faces 1-4 are very slightly more
//! likely than 5 and 6. This is kept as-is so that rolls stay reproducible
//! by any verifier using the same formula.

use crate::{ClientSeed, ServerSeed};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

pub const FACES: u8 = 6;

/// Highest face that still loses the bet.
const LOSING_MAX: u8 = 3;

/// A die face in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RollOutcome(u8);

impl RollOutcome {
    pub fn new(face: u8) -> Option<Self> {
        (1..=FACES).contains(&face).then_some(Self(face))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn outcome(self) -> Outcome {
        if self.0 > LOSING_MAX {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn is_win(self) -> bool {
        self.outcome() == Outcome::Win
    }
}

impl TryFrom<u8> for RollOutcome {
    type Error = String;

    fn try_from(face: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(face).ok_or_else(|| format!("roll {} is outside 1..={}", face, FACES))
    }
}

impl From<RollOutcome> for u8 {
    fn from(roll: RollOutcome) -> Self {
        roll.0
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
        }
    }
}

/// Derive the roll for a pair of seeds. Pure: no other input is involved.
pub fn evaluate(server_seed: &ServerSeed, client_seed: &ClientSeed) -> RollOutcome {
    roll_from_seeds(server_seed.as_str(), client_seed.as_str())
}

pub(crate) fn roll_from_seeds(server_seed: &str, client_seed: &str) -> RollOutcome {
    let mut hasher = Sha256::new();
    hasher.update(server_seed.as_bytes());
    hasher.update(client_seed.as_bytes());
    let digest = hasher.finalize();

    // first 6 hex digits of the digest == its first 3 bytes
    let prefix = u32::from_be_bytes([0, digest[0], digest[1], digest[2]]);

    RollOutcome((prefix % u32::from(FACES)) as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::sha256_hex;

    const SEED: &str = "00112233445566778899aabbccddeeff";

    fn roll(server: &str, client: &str) -> u8 {
        evaluate(
            &ServerSeed::revealed(server),
            &ClientSeed::new(client).unwrap(),
        )
        .value()
    }

    #[test]
    fn test_golden_vector() {
        // sha256(SEED + "ff") = add2282c..., 0xadd228 = 11391528 = 6 * 1898588
        assert_eq!(
            sha256_hex(&format!("{}ff", SEED)),
            "add2282c25243ccc26b8c8fafdc0da13707a0b27b896da26cb44036b29bccefd"
        );
        assert_eq!(roll(SEED, "ff"), 1);
    }

    #[test]
    fn test_known_rolls() {
        assert_eq!(roll(SEED, "00"), 5);
        assert_eq!(roll(SEED, "01"), 4);
        assert_eq!(roll(SEED, "02"), 3);
        assert_eq!(roll(SEED, "04"), 6);
        assert_eq!(roll(SEED, "alice"), 4);
    }

    #[test]
    fn test_prefix_uses_three_leading_bytes() {
        // 0x59349a = 5846170, 5846170 % 6 = 4
        assert!(sha256_hex(&format!("{}00", SEED)).starts_with("59349a"));
        assert_eq!((0x59349a_u32 % 6 + 1) as u8, roll(SEED, "00"));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for client in ["ff", "00", "session-seed"] {
            assert_eq!(roll(SEED, client), roll(SEED, client));
        }
    }

    #[test]
    fn test_rolls_stay_in_range() {
        for i in 0..500 {
            let face = roll(SEED, &format!("{:x}", i));
            assert!((1..=FACES).contains(&face), "face {} out of range", face);
        }
    }

    #[test]
    fn test_win_threshold() {
        let faces: Vec<Outcome> = (1..=FACES)
            .map(|f| RollOutcome::new(f).unwrap().outcome())
            .collect();
        assert_eq!(
            faces,
            vec![
                Outcome::Lose,
                Outcome::Lose,
                Outcome::Lose,
                Outcome::Win,
                Outcome::Win,
                Outcome::Win
            ]
        );
        assert_eq!(Outcome::Win.message(), "You win!");
        assert_eq!(Outcome::Lose.message(), "You lose!");
    }

    #[test]
    fn test_roll_outcome_bounds() {
        assert!(RollOutcome::new(0).is_none());
        assert!(RollOutcome::new(7).is_none());
        assert!(serde_json::from_str::<RollOutcome>("9").is_err());
        assert_eq!(serde_json::from_str::<RollOutcome>("6").unwrap().value(), 6);
    }
}
