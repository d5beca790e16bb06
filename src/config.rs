// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Optional JSON file to seed the directory from instead of the
    /// built-in activities
    pub seed_path: Option<PathBuf>,
    /// Reject signups once an activity reaches `max_participants`
    pub enforce_capacity: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8000,
            frontend_url: "http://localhost:8000".to_string(),
            static_dir: PathBuf::from("static"),
            seed_path: None,
            enforce_capacity: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local
    /// development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8000,
        };

        let enforce_capacity = match env::var("ENFORCE_CAPACITY") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("ENFORCE_CAPACITY", raw))?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            seed_path: env::var("SEED_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            enforce_capacity,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; keep every env-mutating assertion in
    // one test so parallel tests don't race.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("ENFORCE_CAPACITY");
        env::remove_var("SEED_PATH");
        env::remove_var("FRONTEND_URL");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8000);
        assert!(config.enforce_capacity);
        assert!(config.seed_path.is_none());

        env::set_var("PORT", "9001");
        env::set_var("ENFORCE_CAPACITY", "false");
        env::set_var("SEED_PATH", "seed.json");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 9001);
        assert_eq!(config.frontend_url, "http://localhost:9001");
        assert!(!config.enforce_capacity);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));

        env::remove_var("PORT");
        env::set_var("ENFORCE_CAPACITY", "maybe");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("ENFORCE_CAPACITY", _))
        ));

        env::remove_var("ENFORCE_CAPACITY");
        env::remove_var("SEED_PATH");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
