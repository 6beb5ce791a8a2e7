//! Build Configuration
//!
//! Settings are baked in at compile time from the environment:
//!
//! - `TODO_USER_ID`: owner of the todo list; unset, empty or `0` means no user
//! - `TODO_API_URL`: base URL of the todos service
//! - `TODO_LOG_LEVEL`: console log level (`error` .. `trace`)

use log::Level;

pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// How long an error stays in the banner
pub const ERROR_DISMISS_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TODO_USER_ID must be a positive integer, got {0:?}")]
    InvalidUserId(String),

    #[error("TODO_LOG_LEVEL must be one of error, warn, info, debug, trace; got {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub user_id: Option<u32>,
    pub api_url: &'static str,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            api_url: DEFAULT_API_URL,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Configuration compiled into this build
    ///
    /// Invalid values fall back to their defaults; the errors are returned so
    /// they can be logged once logging is up.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::parse(
            option_env!("TODO_USER_ID"),
            option_env!("TODO_API_URL"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    pub fn parse(
        user_id: Option<&str>,
        api_url: Option<&'static str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        match parse_user_id(user_id) {
            Ok(id) => config.user_id = id,
            Err(e) => errors.push(e),
        }

        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.trim_end_matches('/');
        }

        if let Some(raw) = log_level.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::InvalidLogLevel(raw.to_string())),
            }
        }

        (config, errors)
    }
}

fn parse_user_id(raw: Option<&str>) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(id) => Ok(Some(id)),
        Err(_) => Err(ConfigError::InvalidUserId(raw.to_string())),
    }
}
