//! Configuration management for addressbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::DataLayout;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "addressbook";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ADDRESSBOOK_`)
/// 2. TOML config file at `~/.config/addressbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Session configuration.
    pub session: SessionConfig,
}

/// Where accounts, address books and preferences live on disk.
///
/// Relative paths resolve against the working directory, matching the
/// layout the application has always used (`accounts.txt`, `data/`,
/// `preferences.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Flat file holding one account record per line.
    pub accounts_file: PathBuf,
    /// Directory holding per-user address books and preferences.
    pub data_dir: PathBuf,
    /// Preferences file used while nobody is logged in.
    pub preferences_file: PathBuf,
    /// Address book used while nobody is logged in, unless the shared
    /// preferences name another one.
    pub default_address_book_file: PathBuf,
}

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Populate a missing address book with sample contacts.
    /// When disabled, a missing file starts as an empty address book.
    pub sample_data_on_first_login: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            accounts_file: PathBuf::from("accounts.txt"),
            data_dir: PathBuf::from("data"),
            preferences_file: PathBuf::from("preferences.json"),
            default_address_book_file: PathBuf::from("data").join("addressbook.json"),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_data_on_first_login: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("ADDRESSBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured path is empty.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("accounts_file", &self.storage.accounts_file),
            ("data_dir", &self.storage.data_dir),
            ("preferences_file", &self.storage.preferences_file),
            (
                "default_address_book_file",
                &self.storage.default_address_book_file,
            ),
        ];

        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        Ok(())
    }

    /// Build the on-disk data layout described by this configuration.
    #[must_use]
    pub fn data_layout(&self) -> DataLayout {
        DataLayout::new(
            self.storage.data_dir.clone(),
            self.storage.preferences_file.clone(),
            self.storage.default_address_book_file.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_storage_config() {
        let storage = StorageConfig::default();

        assert_eq!(storage.accounts_file, PathBuf::from("accounts.txt"));
        assert_eq!(storage.data_dir, PathBuf::from("data"));
        assert_eq!(storage.preferences_file, PathBuf::from("preferences.json"));
        assert_eq!(
            storage.default_address_book_file,
            PathBuf::from("data/addressbook.json")
        );
    }

    #[test]
    fn test_default_session_config() {
        assert!(SessionConfig::default().sample_data_on_first_login);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let mut config = Config::default();
        config.storage.data_dir = PathBuf::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("data_dir"));
    }

    #[test]
    fn test_validate_empty_accounts_file() {
        let mut config = Config::default();
        config.storage.accounts_file = PathBuf::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("accounts_file"));
    }

    #[test]
    fn test_data_layout_uses_storage_paths() {
        let mut config = Config::default();
        config.storage.data_dir = PathBuf::from("/srv/ab");

        let layout = config.data_layout();
        assert_eq!(layout.data_dir(), PathBuf::from("/srv/ab").as_path());
        assert_eq!(
            layout.shared_preferences_file(),
            PathBuf::from("preferences.json").as_path()
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("addressbook"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    // Loading reads ADDRESSBOOK_* variables, so every test that loads runs
    // inside a Jail to keep the environment isolated.

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .expect("defaults load");
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [storage]
                data_dir = "userdata"

                [session]
                sample_data_on_first_login = false
                "#,
            )?;

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .expect("config file loads");
            assert_eq!(config.storage.data_dir, PathBuf::from("userdata"));
            assert_eq!(config.storage.accounts_file, PathBuf::from("accounts.txt"));
            assert!(!config.session.sample_data_on_first_login);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("ADDRESSBOOK_STORAGE__DATA_DIR", "envdata");
            jail.set_env("ADDRESSBOOK_SESSION__SAMPLE_DATA_ON_FIRST_LOGIN", "false");

            let config = Config::load_from(Some(PathBuf::from("missing.toml")))
                .expect("env config loads");
            assert_eq!(config.storage.data_dir, PathBuf::from("envdata"));
            assert!(!config.session.sample_data_on_first_login);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [storage]
                data_dir = "filedata"
                accounts_file = "users.txt"
                "#,
            )?;
            jail.set_env("ADDRESSBOOK_STORAGE__DATA_DIR", "envdata");

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .expect("layered config loads");
            assert_eq!(config.storage.data_dir, PathBuf::from("envdata"));
            assert_eq!(config.storage.accounts_file, PathBuf::from("users.txt"));
            Ok(())
        });
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"accounts_file": "users.txt"}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.accounts_file, PathBuf::from("users.txt"));
        assert_eq!(storage.data_dir, PathBuf::from("data"));
    }
}
