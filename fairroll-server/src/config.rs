use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_ROUTE: &str = "/api/roll-dice";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub route: String,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            route: DEFAULT_ROUTE.to_string(),
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.route.is_empty() {
            return Err(ServerError::config("Route cannot be empty"));
        }

        if !self.route.starts_with('/') {
            return Err(ServerError::config(format!(
                "Route must start with '/': {}",
                self.route
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.route, "/api/roll-dice");
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_rejects_relative_route() {
        let config = ServerConfig {
            route: "roll".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("server.json");
        tokio::fs::write(&path, r#"{ "bind_addr": "0.0.0.0:8080" }"#)
            .await
            .unwrap();

        let config = ServerConfig::load(&path).await.unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.route, DEFAULT_ROUTE);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = ServerConfig::load(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(ServerError::Io(_))));
    }
}
