use std::{sync::Arc, time::Duration};

use crate::config::Config;
use lendgate_lending::{LendingService, ProviderRegistry, RegistryConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub lending_service: Arc<LendingService>,
}

impl AppState {
    /// Wire the lending service so a provider listing always answers before
    /// the request timeout fires.
    pub fn new(registry: ProviderRegistry, config: &Config) -> Arc<Self> {
        let lending_service = LendingService::with_listing_timeout(
            Arc::new(registry),
            listing_timeout(config.request_timeout),
        );
        Arc::new(Self {
            lending_service: Arc::new(lending_service),
        })
    }
}

/// Per-backend listing deadline: four fifths of the request timeout.
fn listing_timeout(request_timeout: Duration) -> Duration {
    request_timeout * 4 / 5
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let registry = load_registry(config)?;
    Ok(AppState::new(registry, config))
}

fn load_registry(config: &Config) -> anyhow::Result<ProviderRegistry> {
    let path = &config.providers_file;
    if !config.providers_file_required && !path.exists() {
        tracing::warn!(
            "Provider config {} not found, starting with no lending providers",
            path.display()
        );
        return Ok(ProviderRegistry::empty());
    }

    tracing::info!("Loading lending providers from {}", path.display());
    let registry_config = RegistryConfig::load(path)?;
    Ok(ProviderRegistry::from_config(&registry_config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deadline_is_below_request_timeout() {
        assert_eq!(
            listing_timeout(Duration::from_secs(30)),
            Duration::from_secs(24)
        );
        assert!(listing_timeout(Duration::from_millis(500)) < Duration::from_millis(500));
    }
}
