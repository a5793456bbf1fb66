use crate::auth::{Credential, default_credentials};
use crate::errors::{AppError, AppResult};
use crate::source::{LedgerSource, cache::DEFAULT_TTL_MINUTES};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sheet file (.json or .csv); `None` uses the built-in sample.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "default_cache_minutes")]
    pub cache_minutes: i64,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
    #[serde(default = "default_credentials")]
    pub users: Vec<Credential>,
}

fn default_cache_minutes() -> i64 {
    DEFAULT_TTL_MINUTES
}
fn default_placeholder() -> String {
    "-".to_string()
}
fn default_audit_log() -> String {
    Config::audit_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            cache_minutes: default_cache_minutes(),
            placeholder: default_placeholder(),
            audit_log: default_audit_log(),
            users: default_credentials(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("guruledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".guruledger")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("guruledger.conf")
    }

    pub fn audit_file() -> PathBuf {
        Self::config_dir().join("guruledger.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.cache_ttl()?;
        Ok(cfg)
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(is_test: bool) -> AppResult<Self> {
        let cfg = Self::default();

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), serde_yaml::to_string(&cfg)?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(cfg)
    }

    pub fn ledger_source(&self) -> LedgerSource {
        match &self.source {
            Some(path) if !path.trim().is_empty() => LedgerSource::File(expand_tilde(path)),
            _ => LedgerSource::Sample,
        }
    }

    /// Freshness window of the ledger cache. Negative or out-of-range
    /// minutes are a configuration error.
    pub fn cache_ttl(&self) -> AppResult<Duration> {
        if self.cache_minutes < 0 {
            return Err(AppError::Config(
                "cache_minutes must not be negative".to_string(),
            ));
        }
        Duration::try_minutes(self.cache_minutes).ok_or_else(|| {
            AppError::Config(format!("cache_minutes {} is out of range", self.cache_minutes))
        })
    }
}
