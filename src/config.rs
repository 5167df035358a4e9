//! Server configuration from environment variables (`.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DB_URI: &str = "sqlite://app.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Connection string; `DB_URI` env, default a local `app.db` file.
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    /// Load demo activities at startup when the activities table is empty.
    pub seed: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing keys fall back to defaults; present but
    /// unparsable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URI").unwrap_or_else(|| DEFAULT_DB_URI.into());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::DatabaseUrl(database_url));
        }

        let host = match lookup("HOST") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key: "HOST", value: v })?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HOST",
                value: DEFAULT_HOST.into(),
            })?,
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let seed = match lookup("CAMP_SEED") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidValue { key: "CAMP_SEED", value: v })?,
            None => false,
        };

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            seed,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DB_URI);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5555");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!config.seed);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DB_URI", "sqlite::memory:"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("CAMP_SEED", "true"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.max_connections, 2);
        assert!(config.seed);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "five")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn rejects_zero_connections() {
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let err = config_from(&[("DB_URI", "postgres://localhost/camp")]).unwrap_err();
        assert!(matches!(err, ConfigError::DatabaseUrl(_)));
    }
}
