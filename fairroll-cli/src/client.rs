use fairroll_core::{BetRequest, ErrorBody, RollResponse};
use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000/api/roll-dice";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server refused the bet; the message is meant for the player.
    #[error("{0}")]
    Rejected(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct DiceClient {
    http: reqwest::Client,
    url: String,
}

impl DiceClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn roll(&self, request: &BetRequest) -> Result<RollResponse, ClientError> {
        tracing::debug!("POST {}", self.url);
        let response = self.http.post(&self.url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };

        if status.is_client_error() {
            Err(ClientError::Rejected(message))
        } else {
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
