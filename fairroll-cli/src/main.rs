mod client;
mod commands;
mod session;

use clap::{Parser, Subcommand};
use client::{DiceClient, DEFAULT_SERVER_URL};
use session::SessionStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairroll")]
#[command(about = "Provably-fair dice game client")]
#[command(version)]
struct Cli {
    /// Data directory for the session file
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Roll endpoint of the dice server
    #[arg(short, long, global = true, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the session client seed
    Seed {
        /// Generate a new client seed
        #[arg(long)]
        rotate: bool,
    },
    /// Balance commands
    #[command(subcommand)]
    Balance(commands::BalanceCommands),
    /// Place a bet and roll the die
    Roll {
        /// Bet amount, prompted for when omitted
        amount: Option<u64>,
    },
    /// Check the fairness of the last roll or of explicit values
    Verify(commands::VerifyArgs),
    /// Show past rolls
    History {
        /// Number of rolls to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairroll={},fairroll_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fairroll")
    });

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    let store = SessionStore::new(&data_dir);
    let client = DiceClient::new(cli.server);

    // Execute command
    let result = match cli.command {
        Commands::Seed { rotate } => commands::show_seed(&store, rotate),
        Commands::Balance(cmd) => commands::handle_balance_command(cmd, &store),
        Commands::Roll { amount } => commands::roll(&store, &client, amount).await,
        Commands::Verify(args) => commands::verify(&store, args),
        Commands::History { limit } => commands::history(&store, limit),
    };

    if let Err(e) = result {
        if let Some(client::ClientError::Http(err)) = e.downcast_ref::<client::ClientError>() {
            eprintln!("Error: could not reach {}: {}", client.url(), err);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
