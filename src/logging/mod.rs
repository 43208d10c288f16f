//! Diagnostic logging to disk.
//!
//! The terminal belongs to the page, so `tracing` output goes to a daily log
//! file named `greetpage_<date>.log` in the configured log directory
//! (default: `~/.local/share/greetpage/logs/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Expand a leading `~` to the home directory.
pub fn resolve_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if log_dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(log_dir)
}

fn log_file_path(dir: &Path, date: chrono::NaiveDate) -> PathBuf {
    dir.join(format!("greetpage_{}.log", date.format("%Y-%m-%d")))
}

/// Install the global `tracing` subscriber. Returns the log file path, or
/// `None` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    let level = config.level()?;
    let dir = resolve_log_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = log_file_path(&dir, chrono::Local::now().date_naive());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_dir_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_log_dir("~/logs/page"), home.join("logs/page"));
            assert_eq!(resolve_log_dir("~"), home);
        }
        assert_eq!(resolve_log_dir("/var/log/page"), PathBuf::from("/var/log/page"));
        assert_eq!(resolve_log_dir("logs"), PathBuf::from("logs"));
    }

    #[test]
    fn test_log_file_is_named_by_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            log_file_path(Path::new("/tmp/logs"), date),
            PathBuf::from("/tmp/logs/greetpage_2026-03-09.log")
        );
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(init(&config).unwrap(), None);
    }
}
