//! Runtime settings for the storefront.
//!
//! Defaults suit the demo; each field can be overridden from a `STOREFRONT_*` environment
//! variable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_CHANNEL_BUFFER: &str = "STOREFRONT_CHANNEL_BUFFER";
pub const ENV_SEARCH_LIMIT: &str = "STOREFRONT_SEARCH_LIMIT";
pub const ENV_RECOMMENDATION_LIMIT: &str = "STOREFRONT_RECOMMENDATION_LIMIT";
pub const ENV_ENFORCE_STOCK: &str = "STOREFRONT_ENFORCE_STOCK";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("channel_buffer must be greater than zero")]
    ZeroChannelBuffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Capacity of every actor's request channel.
    pub channel_buffer: usize,
    /// Maximum number of `searchProducts` results.
    pub search_limit: usize,
    /// Maximum number of recommendations attached to a cart view.
    pub recommendation_limit: usize,
    /// Refuse adds and updates that would put more units in the cart than are in stock.
    pub enforce_stock: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            search_limit: 5,
            recommendation_limit: 3,
            enforce_stock: true,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by whatever `STOREFRONT_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        tracing::info!(?config, "Config loaded");
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_CHANNEL_BUFFER)? {
            config.channel_buffer = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_SEARCH_LIMIT)? {
            config.search_limit = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_RECOMMENDATION_LIMIT)? {
            config.recommendation_limit = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ENFORCE_STOCK)? {
            config.enforce_stock = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
