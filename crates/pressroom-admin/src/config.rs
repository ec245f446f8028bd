// File: src/config.rs
// Purpose: Configuration parsing from pressroom.toml and the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "pressroom.toml";

/// Base path prefix stripped before route matching
pub const ENV_BASENAME: &str = "BASENAME";
/// Location of the backend API; the dashboard is gated on it
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
pub const ENV_PORT: &str = "PORT";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base path for all routes (e.g., "/admin"); empty means none
    #[serde(default)]
    pub base_path: String,

    /// Whether routes are case-insensitive (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

/// Backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: Option<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            case_insensitive: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./pressroom.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// `BASENAME` and `BACKEND_URL` replace their settings even when empty,
    /// so an exported empty `BACKEND_URL` unconfigures the dashboard.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_BASENAME) {
            self.routing.base_path = base;
        }

        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.backend.url = Some(url);
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {:?}", ENV_PORT, port))?;
        }

        Ok(self)
    }

    /// The backend location, if one is set and not blank
    pub fn backend_url(&self) -> Option<&str> {
        self.backend
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| env.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.base_path, "");
        assert!(config.routing.case_insensitive);
        assert_eq!(config.backend_url(), None);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert!(config.routing.case_insensitive);
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [server]
            port = 8080

            [routing]
            base_path = "/admin"
            case_insensitive = false

            [backend]
            url = "https://api.example.com"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.base_path, "/admin");
        assert!(!config.routing.case_insensitive);
        assert_eq!(config.backend_url(), Some("https://api.example.com"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_blank_backend_url_is_absent() {
        let mut config = Config::default();
        config.backend.url = Some("   ".to_string());
        assert_eq!(config.backend_url(), None);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_overrides(lookup(&[
                (ENV_BASENAME, "/shop"),
                (ENV_BACKEND_URL, " http://localhost:3001 "),
                (ENV_PORT, "4000"),
            ]))
            .unwrap();

        assert_eq!(config.routing.base_path, "/shop");
        assert_eq!(config.backend_url(), Some("http://localhost:3001"));
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_empty_env_backend_url_unconfigures() {
        let mut config = Config::default();
        config.backend.url = Some("http://from-file".to_string());

        let config = config
            .with_overrides(lookup(&[(ENV_BACKEND_URL, "")]))
            .unwrap();
        assert_eq!(config.backend_url(), None);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = Config::default().with_overrides(lookup(&[(ENV_PORT, "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("does-not-exist/pressroom.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
