use crate::client::DiceClient;
use crate::session::{RollRecord, SessionStore, STARTING_BALANCE};
use anyhow::bail;
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use fairroll_core::{verify_proof, BetRequest, RollProof, Verification};

#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the session balance
    Show,
    /// Set the session balance
    Set {
        /// New balance
        amount: u64,
    },
    /// Reset the balance to the starting amount
    Reset,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Revealed server seed (defaults to the last roll)
    #[arg(long, requires_all = ["commitment", "client_seed", "roll"])]
    pub server_seed: Option<String>,
    /// Published commitment (hashedServerSeed)
    #[arg(long, requires = "server_seed")]
    pub commitment: Option<String>,
    /// Client seed used for the roll
    #[arg(long, requires = "server_seed")]
    pub client_seed: Option<String>,
    /// Reported roll
    #[arg(long, requires = "server_seed")]
    pub roll: Option<u8>,
}

impl VerifyArgs {
    fn explicit_proof(&self) -> Option<RollProof> {
        match (&self.server_seed, &self.commitment, &self.client_seed, self.roll) {
            (Some(server_seed), Some(commitment), Some(client_seed), Some(roll)) => {
                Some(RollProof {
                    server_seed: server_seed.clone(),
                    hashed_server_seed: commitment.clone(),
                    client_seed: client_seed.clone(),
                    roll,
                })
            }
            _ => None,
        }
    }
}

pub fn show_seed(store: &SessionStore, rotate: bool) -> anyhow::Result<()> {
    let mut session = store.load()?;

    if rotate {
        session.rotate_seed()?;
        store.save(&session)?;
        println!("Client seed rotated.");
    }

    println!("Session: {}", session.id);
    println!("Session file: {}", store.path().display());
    println!("Client seed: {}", session.client_seed);

    if let Some(last) = session.last_roll() {
        if last.proof.client_seed != session.client_seed.as_str() {
            println!("Last roll used client seed {}", last.proof.client_seed);
        }
    }
    Ok(())
}

pub fn handle_balance_command(cmd: BalanceCommands, store: &SessionStore) -> anyhow::Result<()> {
    let mut session = store.load()?;

    match cmd {
        BalanceCommands::Show => {}
        BalanceCommands::Set { amount } => {
            session.balance = amount;
            store.save(&session)?;
        }
        BalanceCommands::Reset => {
            session.balance = STARTING_BALANCE;
            store.save(&session)?;
        }
    }

    println!("Balance: ${}", session.balance);
    Ok(())
}

/// Pre-checks done before contacting the server
pub fn check_bet(balance: u64, amount: u64) -> anyhow::Result<()> {
    if balance == 0 {
        bail!("Insufficient balance.");
    }
    if amount == 0 {
        bail!("Please select a bet amount");
    }
    if amount > balance {
        bail!("Bet amount exceeds balance.");
    }
    Ok(())
}

fn prompt_bet(balance: u64) -> anyhow::Result<u64> {
    let amount = dialoguer::Input::<u64>::new()
        .with_prompt(format!("Bet amount (1-{})", balance))
        .interact_text()?;
    Ok(amount)
}

pub async fn roll(
    store: &SessionStore,
    client: &DiceClient,
    amount: Option<u64>,
) -> anyhow::Result<()> {
    let mut session = store.load()?;

    if session.balance == 0 {
        bail!("Insufficient balance.");
    }

    let amount = match amount {
        Some(amount) => amount,
        None => prompt_bet(session.balance)?,
    };
    check_bet(session.balance, amount)?;

    let request = BetRequest::new(
        amount as f64,
        session.balance as f64,
        session.client_seed.as_str(),
    );
    let response = client.roll(&request).await?;

    let record = session.record_roll(amount, &response).clone();
    store.save(&session)?;

    println!("Rolled: {}", response.roll);
    println!("{}", record.message);
    println!("Bet Amount: ${}", record.bet_amount);
    println!("Balance: ${} -> ${}", record.balance_before, record.balance_after);
    println!("Hashed server seed: {}", record.proof.hashed_server_seed);
    println!("Server seed: {}", record.proof.server_seed);
    println!();
    println!("Check fairness with: fairroll verify");

    Ok(())
}

pub fn verify(store: &SessionStore, args: VerifyArgs) -> anyhow::Result<()> {
    if let Some(proof) = args.explicit_proof() {
        let result = verify_proof(&proof);
        print_verification(&proof, &result);
        return finish_verification(&result);
    }

    let mut session = store.load()?;
    let Some(record) = session.last_roll_mut() else {
        bail!("No roll data available.");
    };

    let result = verify_proof(&record.proof);
    record.verified = Some(result.is_fair());
    print_verification(&record.proof, &result);
    store.save(&session)?;

    finish_verification(&result)
}

fn print_verification(proof: &RollProof, result: &Verification) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Check", "Value", "Result"]);
    table.add_row(vec![
        "Commitment".to_string(),
        proof.hashed_server_seed.clone(),
        pass_fail(result.commitment_valid).to_string(),
    ]);
    table.add_row(vec![
        "Roll".to_string(),
        proof.roll.to_string(),
        pass_fail(result.roll_valid).to_string(),
    ]);

    println!("Server seed: {}", proof.server_seed);
    println!("Client seed: {}", proof.client_seed);
    println!("{}", table);
}

fn finish_verification(result: &Verification) -> anyhow::Result<()> {
    if result.is_fair() {
        println!("Fairness verified: Roll is valid!");
        Ok(())
    } else {
        bail!("Fairness check failed: Something is wrong!")
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "FAIL"
    }
}

fn verified_label(record: &RollRecord) -> &'static str {
    match record.verified {
        Some(true) => "yes",
        Some(false) => "FAILED",
        None => "-",
    }
}

pub fn history(store: &SessionStore, limit: usize) -> anyhow::Result<()> {
    let session = store.load()?;

    if session.rolls.is_empty() {
        println!("No rolls yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Time", "Bet", "Roll", "Result", "Balance", "Commitment", "Verified",
    ]);

    for record in session.rolls.iter().rev().take(limit) {
        table.add_row(vec![
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("${}", record.bet_amount),
            record.proof.roll.to_string(),
            record.message.clone(),
            format!("${} -> ${}", record.balance_before, record.balance_after),
            record.proof.hashed_server_seed.chars().take(16).collect(),
            verified_label(record).to_string(),
        ]);
    }

    println!("Rolls for session {}:", session.id);
    println!("{}", table);
    Ok(())
}
