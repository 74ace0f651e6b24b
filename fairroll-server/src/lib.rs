//! HTTP front for the fairroll dice game.
//!
//! The server is stateless: every request gets a fresh server seed, and the
//! seed is revealed in the same response as its commitment.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, Result, ServerError};

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

pub fn router(config: &ServerConfig) -> Router {
    Router::new().route(&config.route, post(routes::roll_dice))
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve_on(listener, config).await
}

pub async fn serve_on(listener: TcpListener, config: ServerConfig) -> Result<()> {
    config.validate()?;

    tracing::info!(
        "Dice server listening on http://{}{}",
        listener.local_addr()?,
        config.route
    );

    axum::serve(listener, router(&config)).await?;
    Ok(())
}
