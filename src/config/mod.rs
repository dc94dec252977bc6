//! Configuration module for the menus widget.
//!
//! All configuration is loaded from environment variables with sensible defaults.

mod query;

pub use query::*;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Link used for the day title when there is no menu for the viewed date.
pub const DEFAULT_MENUS_URL: &str = "https://www.residenciasantiago.es/menus-1/";

/// What the `h`/`H` key does.
///
/// Observed behavior maps it to "today" alongside `t`; editor-style
/// navigation would pair it with `j`/`k` as "previous".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HKeyBinding {
    Today,
    Previous,
}

impl FromStr for HKeyBinding {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(HKeyBinding::Today),
            "previous" | "prev" => Ok(HKeyBinding::Previous),
            other => Err(AppError::Config(format!(
                "MENUS_H_KEY must be 'today' or 'previous', got '{}'",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the menu API (the `/api/menus` path is appended)
    pub api_url: String,
    /// Read menus from this JSON file instead of the API
    pub offline_file: Option<PathBuf>,
    /// Title link when the viewed date has no menu
    pub default_url: String,
    /// Target of the "show all" control
    pub all_url: String,
    /// Canonical page path, restored after a forced refresh
    pub page_path: String,
    /// The page's own query string, parsed once
    pub page_query: PageQuery,
    /// Whether a tap in the center zone triggers "show all"
    pub enable_middle_click: bool,
    pub h_key: HKeyBinding,
    /// Clicks this soon after a touch are ignored
    pub touch_debounce: Duration,
    pub http_timeout: Duration,
    /// Width of the terminal page in columns
    pub viewport_width: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000".to_string(),
            offline_file: None,
            default_url: DEFAULT_MENUS_URL.to_string(),
            all_url: "/menus".to_string(),
            page_path: "/hoy".to_string(),
            page_query: PageQuery::default(),
            enable_middle_click: false,
            h_key: HKeyBinding::Today,
            touch_debounce: Duration::from_millis(750),
            http_timeout: Duration::from_secs(10),
            viewport_width: 90,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("MENUS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let offline_file = var("MENUS_OFFLINE_FILE").map(PathBuf::from);

        let default_url = var("MENUS_DEFAULT_URL").unwrap_or(defaults.default_url);
        let all_url = var("MENUS_ALL_URL").unwrap_or(defaults.all_url);
        let page_path = var("MENUS_PAGE_PATH").unwrap_or(defaults.page_path);

        let page_query = var("MENUS_PAGE_QUERY")
            .map(|q| PageQuery::parse(&q))
            .transpose()?
            .unwrap_or_default();

        let enable_middle_click = match var("MENUS_ENABLE_MIDDLE_CLICK") {
            Some(raw) => parse_bool("MENUS_ENABLE_MIDDLE_CLICK", &raw)?,
            None => defaults.enable_middle_click,
        };

        let h_key = match var("MENUS_H_KEY") {
            Some(raw) => raw.parse()?,
            None => defaults.h_key,
        };

        let touch_debounce = match var("MENUS_TOUCH_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(parse_number("MENUS_TOUCH_DEBOUNCE_MS", &raw)?),
            None => defaults.touch_debounce,
        };

        let http_timeout = match var("MENUS_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("MENUS_HTTP_TIMEOUT_SECS", &raw)?),
            None => defaults.http_timeout,
        };

        let viewport_width = match var("MENUS_VIEWPORT_WIDTH") {
            Some(raw) => parse_number("MENUS_VIEWPORT_WIDTH", &raw)?,
            None => defaults.viewport_width,
        };

        let log_level = var("MENUS_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            api_url,
            offline_file,
            default_url,
            all_url,
            page_path,
            page_query,
            enable_middle_click,
            h_key,
            touch_debounce,
            http_timeout,
            viewport_width,
            log_level,
        })
    }

    /// Visible URL of the page on load: the canonical path plus the query, if any.
    pub fn page_location(&self) -> String {
        if self.page_query.raw().is_empty() {
            self.page_path.clone()
        } else {
            format!("{}?{}", self.page_path, self.page_query.raw())
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert!(config.offline_file.is_none());
        assert_eq!(config.default_url, DEFAULT_MENUS_URL);
        assert_eq!(config.all_url, "/menus");
        assert_eq!(config.page_path, "/hoy");
        assert!(!config.page_query.force_refresh());
        assert!(!config.enable_middle_click);
        assert_eq!(config.h_key, HKeyBinding::Today);
        assert_eq!(config.touch_debounce, Duration::from_millis(750));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MENUS_API_URL", "http://menus.local/"),
            ("MENUS_OFFLINE_FILE", "/tmp/menus.json"),
            ("MENUS_PAGE_QUERY", "?update"),
            ("MENUS_ENABLE_MIDDLE_CLICK", "yes"),
            ("MENUS_H_KEY", "previous"),
            ("MENUS_TOUCH_DEBOUNCE_MS", "300"),
            ("MENUS_VIEWPORT_WIDTH", "120"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "http://menus.local");
        assert_eq!(config.offline_file, Some(PathBuf::from("/tmp/menus.json")));
        assert!(config.page_query.force_refresh());
        assert!(config.enable_middle_click);
        assert_eq!(config.h_key, HKeyBinding::Previous);
        assert_eq!(config.touch_debounce, Duration::from_millis(300));
        assert_eq!(config.viewport_width, 120);
    }

    #[test]
    fn test_page_location() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.page_location(), "/hoy");

        let config = config_from(&[("MENUS_PAGE_QUERY", "?%75pdate")]).unwrap();
        assert!(config.page_query.force_refresh());
        assert_eq!(config.page_location(), "/hoy?%75pdate");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("MENUS_ALL_URL", "  "), ("MENUS_H_KEY", "")]).unwrap();
        assert_eq!(config.all_url, "/menus");
        assert_eq!(config.h_key, HKeyBinding::Today);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = config_from(&[("MENUS_H_KEY", "left")]).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        let err = config_from(&[("MENUS_TOUCH_DEBOUNCE_MS", "soon")]).unwrap_err();
        assert!(err.message().contains("MENUS_TOUCH_DEBOUNCE_MS"));

        assert!(config_from(&[("MENUS_ENABLE_MIDDLE_CLICK", "maybe")]).is_err());
    }
}
