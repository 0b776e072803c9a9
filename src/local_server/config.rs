//! Report server configuration
//!
//! Loads the port and database location from `settings.yaml` in the
//! configuration directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default port
pub const DEFAULT_PORT: u16 = 19836;

/// Default database file, relative to the configuration directory
pub const DEFAULT_DATABASE_FILENAME: &str = "catalogue.db";

/// Configuration file name
const CONFIG_FILENAME: &str = "settings.yaml";

/// Report server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// HTTP port, bound on 127.0.0.1
    #[serde(default = "default_port")]
    pub port: u16,
    /// SQLite catalogue database; relative paths resolve against the
    /// configuration directory
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILENAME)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_path: default_database_path(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the configuration directory
    ///
    /// # Returns
    /// The parsed configuration, or defaults if the file is missing or
    /// unreadable
    pub fn load(config_dir: &Path) -> Self {
        let config_path = Self::config_path(config_dir);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %config_path.display(), error = %e, "invalid settings, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Validate a port
    ///
    /// Ports must be in the non-privileged range 1024-65535
    pub fn validate_port(port: u16) -> Result<(), AppError> {
        if port < 1024 {
            return Err(AppError::Config(
                "Port must be >= 1024 (non-privileged ports)".to_string(),
            ));
        }
        Ok(())
    }

    /// Database file location with relative paths anchored at `config_dir`
    pub fn resolve_database_path(&self, config_dir: &Path) -> PathBuf {
        if self.database_path.is_absolute() {
            self.database_path.clone()
        } else {
            config_dir.join(&self.database_path)
        }
    }

    /// Full path of the configuration file
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_path, PathBuf::from("catalogue.db"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempdir().unwrap();
        let config = ServerConfig::load(dir.path());
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            ServerConfig::config_path(dir.path()),
            "port: 12345\ndatabase_path: /var/lib/catalogue/main.db\n",
        )
        .unwrap();

        let loaded = ServerConfig::load(dir.path());
        assert_eq!(
            loaded,
            ServerConfig {
                port: 12345,
                database_path: PathBuf::from("/var/lib/catalogue/main.db"),
            }
        );
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let dir = tempdir().unwrap();
        fs::write(ServerConfig::config_path(dir.path()), "port: 20000\n").unwrap();

        let loaded = ServerConfig::load(dir.path());
        assert_eq!(loaded.port, 20000);
        assert_eq!(loaded.database_path, PathBuf::from(DEFAULT_DATABASE_FILENAME));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(ServerConfig::config_path(dir.path()), "port: [not, a, port]\n").unwrap();

        assert_eq!(ServerConfig::load(dir.path()), ServerConfig::default());
    }

    #[test]
    fn test_resolve_database_path() {
        let dir = tempdir().unwrap();
        let relative = ServerConfig::default();
        assert_eq!(
            relative.resolve_database_path(dir.path()),
            dir.path().join("catalogue.db")
        );

        let absolute = ServerConfig {
            database_path: PathBuf::from("/data/catalogue.db"),
            ..Default::default()
        };
        assert_eq!(
            absolute.resolve_database_path(dir.path()),
            PathBuf::from("/data/catalogue.db")
        );
    }

    #[test]
    fn test_validate_port() {
        assert!(ServerConfig::validate_port(1024).is_ok());
        assert!(ServerConfig::validate_port(19836).is_ok());
        assert!(ServerConfig::validate_port(65535).is_ok());
        assert!(ServerConfig::validate_port(1023).is_err());
        assert!(ServerConfig::validate_port(80).is_err());
    }
}
