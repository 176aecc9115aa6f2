// src/bootstrap.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use crate::infrastructure::{repositories::InMemoryStore, time::SystemClock};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Loads configuration, installs logging and wires the services.
pub fn bootstrap() -> Result<Arc<ApplicationServices>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let services = build_services(&config, InMemoryStore::new());
    tracing::info!(
        slug_max_attempts = config.slug_max_attempts(),
        default_published = config.default_published(),
        "content services ready"
    );
    Ok(services)
}

/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

pub fn build_services(config: &AppConfig, store: InMemoryStore) -> Arc<ApplicationServices> {
    let store = Arc::new(store);
    Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        Arc::new(SystemClock),
        config.content_settings(),
    ))
}
