use crate::commitment::generate_with;
use crate::roll::{evaluate, Outcome, RollOutcome};
use crate::types::{BetRequest, RollResponse};
use crate::{ClientSeed, DiceError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A bet that passed every precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBet {
    pub bet_amount: f64,
    pub balance: f64,
    pub client_seed: ClientSeed,
}

/// Outcome of one bet. Only lives for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub bet_amount: f64,
    pub balance: f64,
    pub roll: RollOutcome,
    pub outcome: Outcome,
    pub new_balance: f64,
}

impl BetRecord {
    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Check a request in the order the player sees problems: balance, bet,
/// then client seed.
pub fn validate_bet(request: &BetRequest) -> Result<ValidBet> {
    let balance = positive(request.balance).ok_or(DiceError::InsufficientBalance)?;
    let bet_amount = positive(request.bet_amount).ok_or(DiceError::MissingBetAmount)?;

    let client_seed = request
        .client_seed
        .as_deref()
        .filter(|seed| !seed.is_empty())
        .ok_or(DiceError::InvalidInput)
        .and_then(ClientSeed::new)?;

    Ok(ValidBet {
        bet_amount,
        balance,
        client_seed,
    })
}

/// Apply a roll to a balance: win adds the bet, lose subtracts it.
pub fn settle(balance: f64, bet_amount: f64, roll: RollOutcome) -> BetRecord {
    let outcome = roll.outcome();
    let new_balance = match outcome {
        Outcome::Win => balance + bet_amount,
        Outcome::Lose => balance - bet_amount,
    };

    BetRecord {
        bet_amount,
        balance,
        roll,
        outcome,
        new_balance,
    }
}

/// Validate, commit, roll and settle a bet in one go
pub fn play(request: &BetRequest) -> Result<RollResponse> {
    play_with(request, &mut OsRng)
}

pub fn play_with<R: RngCore + CryptoRng>(request: &BetRequest, rng: &mut R) -> Result<RollResponse> {
    let bet = validate_bet(request)?;

    let (server_seed, commitment) = generate_with(rng)?;
    let roll = evaluate(&server_seed, &bet.client_seed);
    let record = settle(bet.balance, bet.bet_amount, roll);

    tracing::info!(
        "Rolled {} for bet {}: balance {} -> {} ({:?})",
        record.roll,
        record.bet_amount,
        record.balance,
        record.new_balance,
        record.outcome
    );

    Ok(RollResponse {
        roll: record.roll,
        message: record.message().to_string(),
        new_balance: record.new_balance,
        hashed_server_seed: commitment,
        server_seed,
    })
}
