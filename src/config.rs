//! Application configuration.
//!
//! Configuration is stored in `<config dir>/palletctl/config.yaml` and includes:
//! - The API base address of the pallet/pack backend
//! - The request timeout applied to every gateway call
//!
//! `PALLETCTL_CONFIG` points at an alternative file, and `PALLETCTL_API_BASE`
//! overrides the stored base address without touching the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PalletctlError, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const CONFIG_PATH_ENV: &str = "PALLETCTL_CONFIG";
pub const API_BASE_ENV: &str = "PALLETCTL_API_BASE";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["api_base", "request_timeout_secs"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the REST backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Where the effective base address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBaseSource {
    Flag,
    Env,
    File,
    Default,
}

impl fmt::Display for ApiBaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiBaseSource::Flag => write!(f, "--api-base"),
            ApiBaseSource::Env => write!(f, "{API_BASE_ENV}"),
            ApiBaseSource::File => write!(f, "config file"),
            ApiBaseSource::Default => write!(f, "default"),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        match directories::ProjectDirs::from("com", "palletctl", "palletctl") {
            Some(dirs) => dirs.config_dir().join("config.yaml"),
            None => PathBuf::from(".palletctl").join("config.yaml"),
        }
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Resolve the base address: flag, then environment, then file, then default.
    pub fn resolve_api_base(&self, flag: Option<&str>) -> Result<(Url, ApiBaseSource)> {
        let (raw, source) = if let Some(flag) = flag.filter(|f| !f.trim().is_empty()) {
            (flag.to_string(), ApiBaseSource::Flag)
        } else if let Ok(value) = env::var(API_BASE_ENV)
            && !value.trim().is_empty()
        {
            (value, ApiBaseSource::Env)
        } else if let Some(value) = self.api_base.as_ref().filter(|v| !v.trim().is_empty()) {
            (value.clone(), ApiBaseSource::File)
        } else {
            (DEFAULT_API_BASE.to_string(), ApiBaseSource::Default)
        };

        let url = parse_api_base(&raw)?;
        Ok((url, source))
    }

    /// Effective request timeout; never shorter than one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api_base" => Ok(self.api_base.clone()),
            "request_timeout_secs" => Ok(Some(self.request_timeout_secs.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_base" => {
                let url = parse_api_base(value)?;
                self.api_base = Some(url.as_str().trim_end_matches('/').to_string());
            }
            "request_timeout_secs" => {
                let secs: u64 = value.trim().parse().map_err(|_| {
                    PalletctlError::Config(format!(
                        "invalid value '{value}' for request_timeout_secs. Expected a whole number of seconds"
                    ))
                })?;
                if secs == 0 {
                    return Err(PalletctlError::Config(
                        "request_timeout_secs must be greater than zero".to_string(),
                    ));
                }
                self.request_timeout_secs = secs;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> PalletctlError {
    PalletctlError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

/// Parse and validate an API base address (must be http or https)
pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| PalletctlError::Config(format!("invalid API base '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PalletctlError::Config(format!(
            "invalid API base '{raw}': unsupported scheme '{other}'"
        ))),
    }
}
