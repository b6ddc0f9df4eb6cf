// ============================================================================
// CONFIG - Compile-time client configuration
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Cadence shared by every polling hook
    pub poll_interval_ms: u32,
    pub toast_duration_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the settings baked in at build time (see build.rs and .env.example)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("POLL_INTERVAL_MS"),
            option_env!("TOAST_DURATION_MS"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        poll_interval_ms: Option<&str>,
        toast_duration_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            poll_interval_ms: poll_interval_ms
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.poll_interval_ms),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            log_level: log_level
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn trims_trailing_slash_and_rejects_zero_interval() {
        let config = AppConfig::from_values(
            Some("https://inventory.example.com/"),
            Some("0"),
            Some("2500"),
            Some("DEBUG"),
        );
        assert_eq!(config.api_base_url, "https://inventory.example.com");
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.toast_duration_ms, 2500);
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
