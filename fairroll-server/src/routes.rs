use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use fairroll_core::{BetRequest, DiceError, RollResponse};

/// `POST` handler for a single roll.
///
/// A body that is not valid JSON for a [`BetRequest`] gets the same
/// rejection as a request with no client seed.
pub async fn roll_dice(
    payload: Result<Json<BetRequest>, JsonRejection>,
) -> Result<Json<RollResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Malformed roll request: {}", rejection);
        DiceError::InvalidInput
    })?;

    let response = fairroll_core::play(&request)?;
    tracing::debug!(
        "Revealing server seed {} for commitment {}",
        response.server_seed,
        response.hashed_server_seed
    );

    Ok(Json(response))
}
