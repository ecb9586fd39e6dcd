//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr, except for the interactive console which owns the
//! terminal; it logs to `palletctl.log` next to the config file instead.
//!
//! The filter comes from `PALLETCTL_LOG` (an `EnvFilter` directive) when set,
//! otherwise from the `-v` count:
//!
//! - 0: warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3+ (`-vvv`): trace

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;
use crate::error::{PalletctlError, Result};

pub const LOG_ENV: &str = "PALLETCTL_LOG";

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    /// Write to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            log_file: None,
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Log file used while the console is on screen
pub fn console_log_path() -> PathBuf {
    let config_path = Config::config_path();
    match config_path.parent() {
        Some(dir) => dir.join("palletctl.log"),
        None => PathBuf::from("palletctl.log"),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_with_writer(config, Mutex::new(file), false)
        }
        None => init_with_writer(config, io::stderr, true),
    }
}

fn init_with_writer<W>(config: &LogConfig, writer: W, ansi: bool) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(|e| PalletctlError::Other(format!("failed to initialise logging: {e}")))
}

/// `PALLETCTL_LOG` wins; otherwise our crate logs at `level` and dependencies at warn
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,palletctl={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(7).level, Level::TRACE);
    }

    #[test]
    fn test_with_log_file() {
        let config = LogConfig::from_verbosity(0).with_log_file(Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    #[serial_test::serial]
    fn test_console_log_path_sits_next_to_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(crate::config::CONFIG_PATH_ENV, &config_path) };
        let path = console_log_path();
        unsafe { std::env::remove_var(crate::config::CONFIG_PATH_ENV) };
        assert_eq!(path, dir.path().join("palletctl.log"));
    }
}
