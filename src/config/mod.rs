use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::client::ClientConfig;
use crate::error::{KenallError, Result};

const CONFIG_DIR_NAME: &str = ".kenall";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable that overrides the configured token.
pub const TOKEN_ENV_VAR: &str = "KENALL_AUTHORIZATION_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Authorization token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Config {
    /// Get the configuration directory path
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| KenallError::Config("Could not determine home directory".to_string()))?;

        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file full path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_path()?.join(CONFIG_FILE_NAME))
    }

    /// Initialize configuration directory and file
    pub fn initialize() -> Result<()> {
        Self::initialize_at(&Self::config_file_path()?)
    }

    /// Create `path` and its directory with owner-only permissions if missing.
    pub fn initialize_at(path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).map_err(|e| {
                    KenallError::Config(format!("Failed to create config directory: {}", e))
                })?;
                restrict_permissions(config_dir, 0o700)?;
            }
        }

        if !path.exists() {
            Self::default().save_to(path)?;
        }

        Ok(())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::initialize_at(&path)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| KenallError::Config(format!("Failed to read config file: {}", e)))?;

        // An empty file is a valid, empty configuration
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| KenallError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        Self::initialize_at(&path)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| KenallError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| KenallError::Config(format!("Failed to write config file: {}", e)))?;

        restrict_permissions(path, 0o600)
    }

    /// Token from the environment, falling back to the config file.
    pub fn token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| self.api.token.clone())
    }

    /// Build a client configuration; fails when no token is available.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let token = self.token().ok_or_else(|| {
            KenallError::Config(format!(
                "No token configured. Run 'kenall config set api.token YOUR_TOKEN' or set {}.",
                TOKEN_ENV_VAR
            ))
        })?;

        let mut config = ClientConfig::new(token);
        if let Some(endpoint) = &self.api.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.api.timeout {
            config.timeout = Some(Duration::from_secs(timeout));
        }

        Ok(config)
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.token" => {
                self.api.token = Some(value.to_string());
            }
            "api.endpoint" => {
                self.api.endpoint = Some(value.to_string());
            }
            "api.timeout" => {
                let seconds = value.parse::<u64>().map_err(|_| {
                    KenallError::Config(format!("Timeout must be a number of seconds: {}", value))
                })?;
                self.api.timeout = Some(seconds);
            }
            _ => {
                return Err(KenallError::Config(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Get a configuration value by key path
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.token" => self.api.token.clone(),
            "api.endpoint" => self.api.endpoint.clone(),
            "api.timeout" => self.api.timeout.map(|t| t.to_string()),
            _ => None,
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| KenallError::Config(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_and_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        Config::initialize_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut config = Config::default();
        config.set("api.token", "opencollector").unwrap();
        config.set("api.endpoint", "http://localhost:8080/v1").unwrap();
        config.set("api.timeout", "5").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("api.timeout"), Some("5".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        Config::default().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_timeout() {
        let mut config = Config::default();
        assert!(config.set("api.unknown", "x").is_err());
        assert!(config.set("api.timeout", "soon").is_err());
        assert_eq!(config.get("api.unknown"), None);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api: [not, a, map]").unwrap();

        assert!(matches!(Config::load_from(&path), Err(KenallError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_env_token_overrides_file() {
        let mut config = Config::default();
        config.api.token = Some("from-file".to_string());

        std::env::set_var(TOKEN_ENV_VAR, "from-env");
        assert_eq!(config.token(), Some("from-env".to_string()));

        std::env::remove_var(TOKEN_ENV_VAR);
        assert_eq!(config.token(), Some("from-file".to_string()));
    }

    #[test]
    #[serial]
    fn test_client_config() {
        std::env::remove_var(TOKEN_ENV_VAR);

        let mut config = Config::default();
        assert!(matches!(config.client_config(), Err(KenallError::Config(_))));

        config.api.token = Some("opencollector".to_string());
        config.api.endpoint = Some("http://localhost:8080/v1".to_string());
        config.api.timeout = Some(3);

        let client_config = config.client_config().unwrap();
        assert_eq!(client_config.token, "opencollector");
        assert_eq!(client_config.endpoint, "http://localhost:8080/v1");
        assert_eq!(client_config.timeout, Some(Duration::from_secs(3)));
    }
}
