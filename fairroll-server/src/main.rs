use anyhow::Context;
use clap::Parser;
use fairroll_server::ServerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairroll-server")]
#[command(about = "Provably-fair dice roll server")]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Route serving roll requests, overrides the config file
    #[arg(short, long)]
    route: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)
            .await
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(route) = cli.route {
        config.route = route;
    }
    config.verbose |= cli.verbose;

    // Initialize logging
    let log_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairroll_server={},fairroll_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    fairroll_server::serve(config).await?;

    Ok(())
}
