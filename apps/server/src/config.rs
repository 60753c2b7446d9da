use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub const DEFAULT_PROVIDERS_FILE: &str = "./providers.json";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub providers_file: PathBuf,
    /// Set when `LG_PROVIDERS_FILE` was given explicitly; a missing file is
    /// then a startup error instead of an empty registry.
    pub providers_file_required: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("LG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid LG_LISTEN_ADDR")?;
        let cors_allow = std::env::var("LG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("LG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let (providers_file, providers_file_required) = match std::env::var("LG_PROVIDERS_FILE") {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_PROVIDERS_FILE), false),
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            providers_file,
            providers_file_required,
        })
    }
}
