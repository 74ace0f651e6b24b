use crate::{Commitment, RollOutcome, ServerSeed};
use serde::{Deserialize, Serialize};

/// Body of a roll request.
///
/// Every field is optional on the wire: a missing value is rejected by
/// validation with the same message as a zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_seed: Option<String>,
}

impl BetRequest {
    pub fn new(bet_amount: f64, balance: f64, client_seed: impl Into<String>) -> Self {
        Self {
            bet_amount: Some(bet_amount),
            balance: Some(balance),
            client_seed: Some(client_seed.into()),
        }
    }
}

/// Successful roll, with the commitment and the revealed seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResponse {
    pub roll: RollOutcome,
    pub message: String,
    pub new_balance: f64,
    pub hashed_server_seed: Commitment,
    pub server_seed: ServerSeed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
