//! Server configuration from environment variables.

use std::net::SocketAddr;

use crate::network::{DEFAULT_NETWORK_URL, NetworkClientConfig};

/// Listen address.
pub const ADDR_VAR: &str = "NORIKAE_ADDR";
/// Transit feed URL.
pub const NETWORK_URL_VAR: &str = "NORIKAE_NETWORK_URL";
/// Transit feed timeout in seconds.
pub const FETCH_TIMEOUT_VAR: &str = "NORIKAE_FETCH_TIMEOUT_SECS";
/// Directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "NORIKAE_STATIC_DIR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub network: NetworkClientConfig,
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: ADDR_VAR,
                value: addr_value.clone(),
                reason: e.to_string(),
            })?;

        let mut network = NetworkClientConfig::new(
            get(NETWORK_URL_VAR).unwrap_or_else(|| DEFAULT_NETWORK_URL.to_string()),
        );

        if let Some(value) = get(FETCH_TIMEOUT_VAR) {
            let secs = value.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: FETCH_TIMEOUT_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: FETCH_TIMEOUT_VAR,
                    value,
                    reason: "must be at least 1 second".to_string(),
                });
            }
            network = network.with_timeout(secs);
        }

        let static_dir = get(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            addr,
            network,
            static_dir,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network: NetworkClientConfig::default(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}
