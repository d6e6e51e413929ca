//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_bind() -> String {
    String::from("127.0.0.1:8000")
}

/// Default page size for list endpoints.
const fn default_limit() -> i64 {
    100
}

const fn default_enable_cors() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address, `host:port`.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// `limit` applied by list endpoints when the query omits it.
    #[serde(default = "default_limit")]
    pub default_limit: i64,

    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            default_limit: default_limit(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl ServerConfig {
    /// Parse `bind` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `bind` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.bind".into(),
            reason: format!("{e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8000");
        assert_eq!(config.default_limit, 100);
        assert!(config.enable_cors);
    }

    #[test]
    fn socket_addr_parses_default() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn socket_addr_rejects_missing_port() {
        let config = ServerConfig {
            bind: "localhost".into(),
            ..Default::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert!(err.to_string().contains("server.bind"));
    }
}
