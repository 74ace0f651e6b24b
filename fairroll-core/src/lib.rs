//! fairroll core - provably-fair dice rolls
//!
//! The server commits to a random seed by publishing its SHA-256 digest,
//! combines it with a seed chosen by the player to derive a die face, and
//! reveals the seed together with the result. The player can then check the
//! commitment and recompute the roll on their own.

pub mod commitment;
pub mod error;
pub mod game;
pub mod roll;
pub mod seed;
pub mod types;
pub mod verify;

pub use commitment::{generate, generate_with, Commitment, CommitmentScheme, HashCommitment};
pub use error::{DiceError, Result, INTERNAL_ERROR_MESSAGE};
pub use game::{play, play_with, settle, validate_bet, BetRecord, ValidBet};
pub use roll::{evaluate, Outcome, RollOutcome};
pub use seed::{ClientSeed, ServerSeed};
pub use types::{BetRequest, ErrorBody, RollResponse};
pub use verify::{verify, verify_proof, verify_roll, RollProof, Verification};
