//! User configuration and logging setup
//!
//! Settings come from `~/.monthwise/config.json` when it exists. The data
//! directory can be overridden by `MONTHWISE_DATA_DIR` and then by the
//! `--data-dir` flag.

use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use crate::types::{MonthwiseError, Result};

pub const CONFIG_FILE: &str = "config.json";
pub const DATA_DIR_ENV: &str = "MONTHWISE_DATA_DIR";
pub const LOG_ENV: &str = "MONTHWISE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "monthwise=warn";

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    default_user: Option<String>,
    log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub default_user: Option<String>,
    pub log_filter: String,
}

impl Config {
    /// `~/.monthwise`
    pub fn home() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| MonthwiseError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(".monthwise"))
    }

    /// Load from the user's home, applying the environment override
    pub fn load() -> Result<Self> {
        let env_data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::load_from(&Self::home()?, env_data_dir)
    }

    /// Load `<home>/config.json`, falling back to defaults when it is absent
    pub fn load_from(home: &Path, env_data_dir: Option<PathBuf>) -> Result<Self> {
        let path = home.join(CONFIG_FILE);
        let file = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str::<ConfigFile>(&content).map_err(|e| {
                MonthwiseError::Config(format!("invalid {}: {}", path.display(), e))
            })?
        } else {
            ConfigFile::default()
        };

        let data_dir = env_data_dir
            .or(file.data_dir)
            .unwrap_or_else(|| home.join("data"));

        Ok(Self {
            data_dir,
            default_user: file.default_user.filter(|u| !u.trim().is_empty()),
            log_filter: file
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Apply the `--data-dir` flag
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// The `--user` flag, else the configured default user
    pub fn resolve_user(&self, flag: Option<&str>) -> Result<String> {
        flag.filter(|u| !u.trim().is_empty())
            .map(str::to_string)
            .or_else(|| self.default_user.clone())
            .ok_or_else(|| {
                MonthwiseError::InvalidInput(
                    "no user given: pass --user or set default_user in config.json".into(),
                )
            })
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber once. `MONTHWISE_LOG` wins over `filter`.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(filter.unwrap_or(DEFAULT_LOG_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let home = TempDir::new().unwrap();

        let config = Config::load_from(home.path(), None).unwrap();

        assert_eq!(config.data_dir, home.path().join("data"));
        assert!(config.default_user.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_file_values() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(CONFIG_FILE),
            concat!(
                r#"{"data_dir": "/srv/ledger", "default_user": "asha", "#,
                r#""log_filter": "monthwise=debug"}"#
            ),
        )
        .unwrap();

        let config = Config::load_from(home.path(), None).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/ledger"));
        assert_eq!(config.default_user.as_deref(), Some("asha"));
        assert_eq!(config.log_filter, "monthwise=debug");
    }

    #[test]
    fn test_partial_file() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(CONFIG_FILE), r#"{"default_user": "ravi"}"#).unwrap();

        let config = Config::load_from(home.path(), None).unwrap();

        assert_eq!(config.data_dir, home.path().join("data"));
        assert_eq!(config.default_user.as_deref(), Some("ravi"));
    }

    #[test]
    fn test_override_order() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(CONFIG_FILE), r#"{"data_dir": "/from/file"}"#).unwrap();

        let env = Config::load_from(home.path(), Some(PathBuf::from("/from/env"))).unwrap();
        assert_eq!(env.data_dir, PathBuf::from("/from/env"));

        let flag = env.with_data_dir(Some(PathBuf::from("/from/flag")));
        assert_eq!(flag.data_dir, PathBuf::from("/from/flag"));

        let unchanged = flag.with_data_dir(None);
        assert_eq!(unchanged.data_dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(CONFIG_FILE), "{not json").unwrap();

        let err = Config::load_from(home.path(), None).unwrap_err();
        assert!(matches!(err, MonthwiseError::Config(_)));
    }

    // ========== resolve_user() tests ==========

    #[test]
    fn test_resolve_user() {
        let home = TempDir::new().unwrap();
        let mut config = Config::load_from(home.path(), None).unwrap();

        assert!(config.resolve_user(None).is_err());
        assert!(config.resolve_user(Some("  ")).is_err());
        assert_eq!(config.resolve_user(Some("asha")).unwrap(), "asha");

        config.default_user = Some("ravi".into());
        assert_eq!(config.resolve_user(None).unwrap(), "ravi");
        assert_eq!(config.resolve_user(Some("asha")).unwrap(), "asha");
    }
}
