// src/config.rs
use crate::application::commands::content::ContentSettings;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    log_filter: String,
    slug_max_attempts: u32,
    default_published: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_slug_max_attempts() -> u32 {
    3
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("LOG_FILTER").unwrap_or_else(default_log_filter);

        let slug_max_attempts = match lookup("SLUG_MAX_ATTEMPTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!("SLUG_MAX_ATTEMPTS must be a number, got '{raw}'"))
            })?,
            None => default_slug_max_attempts(),
        };
        if slug_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        let default_published = match lookup("DEFAULT_PUBLISHED") {
            Some(raw) => parse_bool("DEFAULT_PUBLISHED", &raw)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            slug_max_attempts,
            default_published,
        })
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn slug_max_attempts(&self) -> u32 {
        self.slug_max_attempts
    }

    pub fn default_published(&self) -> bool {
        self.default_published
    }

    pub fn content_settings(&self) -> ContentSettings {
        ContentSettings {
            slug_max_attempts: self.slug_max_attempts,
            default_published: self.default_published,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            slug_max_attempts: default_slug_max_attempts(),
            default_published: true,
        }
    }
}
