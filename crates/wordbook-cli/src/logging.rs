// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup for the `wb` binary.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "WORDBOOK_LOG";

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info and debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

/// Resolves the log level from the flag, then the environment, then `warn`.
///
/// # Errors
///
/// Returns an error if the chosen value is not a valid level.
pub fn resolve_log_level(flag: Option<&str>) -> Result<Level> {
    match flag {
        Some(level) => parse_log_level(level),
        None => match std::env::var(LOG_ENV) {
            Ok(level) => parse_log_level(&level),
            Err(_) => Ok(Level::WARN),
        },
    }
}

/// Installs a global fmt subscriber writing to stderr.
///
/// Installing twice is harmless; the first subscriber wins.
pub fn init_tracing(level: Level) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_flag_wins() {
        assert_eq!(resolve_log_level(Some("error")).unwrap(), Level::ERROR);
    }
}
