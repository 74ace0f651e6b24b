use chrono::{DateTime, Utc};
use fairroll_core::{ClientSeed, RollProof, RollResponse};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Balance given to a brand new session.
pub const STARTING_BALANCE: u64 = 1000;

/// Rolls kept in the session file; older ones are dropped.
pub const MAX_HISTORY: usize = 50;

const SESSION_FILE: &str = "session.json";

/// Client-held game state: the session seed, the balance and past rolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub client_seed: ClientSeed,
    pub balance: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub rolls: Vec<RollRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub bet_amount: u64,
    pub balance_before: u64,
    pub balance_after: u64,
    pub message: String,
    pub proof: RollProof,
    #[serde(default)]
    pub verified: Option<bool>,
}

impl Session {
    pub fn new() -> fairroll_core::Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            client_seed: ClientSeed::random()?,
            balance: STARTING_BALANCE,
            created_at: Utc::now(),
            rolls: Vec::new(),
        })
    }

    /// Replace the client seed. Past rolls keep the seed they were made with.
    pub fn rotate_seed(&mut self) -> fairroll_core::Result<()> {
        self.client_seed = ClientSeed::random()?;
        tracing::info!("Rotated client seed for session {}", self.id);
        Ok(())
    }

    /// Apply a server response. The balance is kept as a whole number.
    pub fn record_roll(&mut self, bet_amount: u64, response: &RollResponse) -> &RollRecord {
        let balance_before = self.balance;
        self.balance = whole_balance(response.new_balance);

        self.rolls.push(RollRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            bet_amount,
            balance_before,
            balance_after: self.balance,
            message: response.message.clone(),
            proof: RollProof::from_response(response, &self.client_seed),
            verified: None,
        });

        if self.rolls.len() > MAX_HISTORY {
            let excess = self.rolls.len() - MAX_HISTORY;
            self.rolls.drain(..excess);
        }

        &self.rolls[self.rolls.len() - 1]
    }

    pub fn last_roll(&self) -> Option<&RollRecord> {
        self.rolls.last()
    }

    pub fn last_roll_mut(&mut self) -> Option<&mut RollRecord> {
        self.rolls.last_mut()
    }
}

fn whole_balance(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

/// JSON file holding the [`Session`] under the data directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, or start a new one when none exists.
    pub fn load(&self) -> anyhow::Result<Session> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            match serde_json::from_str(&content) {
                Ok(session) => return Ok(session),
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable session file {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
        }

        let session = Session::new()?;
        tracing::debug!("Started session {}", session.id);
        self.save(&session)?;
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
