//! Server configuration and environment variable handling.

use std::env;

/// Default dataset location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/bike_all_data.csv";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the bike-sharing dataset CSV
    pub data_path: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `BIKE_DATA_PATH` (optional, default: `data/bike_all_data.csv`): dataset CSV path
    /// - `HOST` (optional, default: `0.0.0.0`): server host
    /// - `PORT` (optional, default: `8080`): server port
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Tests inject values here instead of mutating the process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("BIKE_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT is not a valid port number: {}", raw))?,
            None => 8080,
        };

        Ok(Self {
            data_path,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = ServerConfig::from_lookup(|key| match key {
            "BIKE_DATA_PATH" => Some("/srv/bike.csv".to_string()),
            "HOST" => Some("127.0.0.1".to_string()),
            "PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.data_path, "/srv/bike.csv");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("eighty".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(err.contains("PORT"));
    }
}
