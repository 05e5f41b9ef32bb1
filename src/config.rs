use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub listen: ListenConfig,

    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Kept as a string so hook port filters compare against the exact
    /// configured value
    #[serde(default = "default_port")]
    pub port: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HooksConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

/// Load config from file or use defaults
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig> {
    if let Some(path) = path {
        let content =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;

        let config: ServerConfig =
            toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    } else {
        Ok(ServerConfig {
            listen: ListenConfig::default(),
            hooks: HooksConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_no_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.listen.host, "127.0.0.1");
        assert_eq!(config.listen.port, "8080");
        assert_eq!(config.hooks.timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listen]\nport = \"5678\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.listen.port, "5678");
        assert_eq!(config.listen.host, "127.0.0.1");
        assert_eq!(config.hooks.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen = not toml").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
