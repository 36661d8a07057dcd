/// Configuration for catalog searches
///
/// Page size limits and the logging filter, loaded from the environment
/// (and a `.env` file when present).
use std::env;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE_VAR: &str = "TRENAKO_DEFAULT_PAGE_SIZE";
pub const MAX_PAGE_SIZE_VAR: &str = "TRENAKO_MAX_PAGE_SIZE";
pub const LOG_FILTER_VAR: &str = "TRENAKO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Page size used when a range request does not carry a count
    pub default_page_size: u32,

    /// Largest page a caller may ask for; bigger requests are clamped
    pub max_page_size: u32,

    /// Log level for this crate (`"debug"`, `"info"`, ...)
    pub log_filter: Option<String>,
}

impl SearchConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            log_filter: None,
        }
    }

    /// Loads `.env` (if any) and overrides the defaults from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new();

        if let Some(value) = read_var(DEFAULT_PAGE_SIZE_VAR) {
            config.default_page_size = parse_page_size(DEFAULT_PAGE_SIZE_VAR, &value)?;
        }
        if let Some(value) = read_var(MAX_PAGE_SIZE_VAR) {
            config.max_page_size = parse_page_size(MAX_PAGE_SIZE_VAR, &value)?;
        }
        config.log_filter = read_var(LOG_FILTER_VAR);

        config.validate()?;
        Ok(config)
    }

    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_max_page_size(mut self, size: u32) -> Self {
        self.max_page_size = size;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.default_page_size == 0 {
            return Err(AppError::ConfigError(
                "default_page_size must be > 0".to_string(),
            ));
        }

        if self.max_page_size == 0 {
            return Err(AppError::ConfigError("max_page_size must be > 0".to_string()));
        }

        if self.default_page_size > self.max_page_size {
            return Err(AppError::ConfigError(format!(
                "default_page_size ({}) cannot exceed max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }

        Ok(())
    }

    /// Caps a requested page size at `max_page_size`
    pub fn clamp_page_size(&self, count: u32) -> u32 {
        count.min(self.max_page_size)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_page_size(name: &str, value: &str) -> AppResult<u32> {
    value
        .parse::<u32>()
        .map_err(|e| AppError::ConfigError(format!("{} must be a positive integer: {}", name, e)))
}
