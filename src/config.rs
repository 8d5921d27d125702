use std::{env, time::Duration};

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

const DEFAULT_PROMO_ENDS_AT: &str = "2026-11-29T23:59:59+01:00";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be an RFC 3339 timestamp, got '{value}': {source}")]
    InvalidTimestamp {
        name: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: String,
    pub submit_delay: Duration,
    pub session_idle: Duration,
    pub promo_ends_at: DateTime<FixedOffset>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "./static".to_string());
        let port = number(&lookup, "PORT", 8080u16)?;
        let submit_delay = Duration::from_millis(number(&lookup, "SUBMIT_DELAY_MS", 2000u64)?);
        let session_idle = minutes(&lookup, "SESSION_IDLE_MINUTES", 120)?;

        let promo_raw =
            lookup("PROMO_ENDS_AT").unwrap_or_else(|| DEFAULT_PROMO_ENDS_AT.to_string());
        let promo_ends_at = DateTime::parse_from_rfc3339(promo_raw.trim()).map_err(|source| {
            ConfigError::InvalidTimestamp {
                name: "PROMO_ENDS_AT",
                value: promo_raw.clone(),
                source,
            }
        })?;

        Ok(Self {
            bind_addr,
            port,
            static_dir,
            submit_delay,
            session_idle,
            promo_ends_at,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

fn minutes(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let minutes = number(lookup, name, default)?;
    minutes
        .checked_mul(60)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidNumber {
            name,
            value: minutes.to_string(),
        })
}
