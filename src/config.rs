//! Configuration management for the address book bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::directory::BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window, one leap year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u64 = 366;

/// Configuration for the address book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Days ahead, inclusive, reported by `birthdays` (default: 7)
    pub birthday_window_days: u64,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS`: Birthday window (default: 7, max 366)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Don't fail when there is no .env file
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);

        let birthday_window_days = Self::parse_env_u64(
            "ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS",
            defaults.birthday_window_days,
        )?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            prompt,
            birthday_window_days,
            log_level,
        })
    }

    /// Birthday window as a signed day count for date arithmetic.
    pub fn birthday_window(&self) -> i64 {
        // Bounded by MAX_BIRTHDAY_WINDOW_DAYS once loaded
        i64::try_from(self.birthday_window_days).unwrap_or(BIRTHDAY_WINDOW_DAYS)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a command: ".to_string(),
            birthday_window_days: BIRTHDAY_WINDOW_DAYS as u64,
            log_level: "warn".to_string(),
        }
    }
}
