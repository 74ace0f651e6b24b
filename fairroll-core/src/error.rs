use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiceError>;

/// Generic message shown to clients for any failure that is not their fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("Insufficient balance.")]
    InsufficientBalance,

    #[error("Please select a bet amount.")]
    MissingBetAmount,

    #[error("Invalid input. Please try again.")]
    InvalidInput,

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DiceError {
    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::Entropy(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    /// True for errors caused by the caller's input, which are safe to echo back.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance
                | Self::MissingBetAmount
                | Self::InvalidInput
                | Self::InvalidSeed(_)
        )
    }

    /// Message suitable for an end user. Internal details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidSeed(_) => Self::InvalidInput.to_string(),
            e if e.is_validation() => e.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<rand::Error> for DiceError {
    fn from(err: rand::Error) -> Self {
        DiceError::Entropy(err.to_string())
    }
}
