use log::Level;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "careerboard_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Goal service host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Goal service port (e.g., 3000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Custom overrides live in localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| read_item(&storage, key));
        }

        settings
    }

    /// Apply overrides looked up by key (without the storage prefix).
    /// Unparseable values leave the current setting untouched.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = lookup("api_host") {
            self.api_host = api_host;
        }

        if let Some(port) = lookup("api_port").and_then(|v| v.parse::<u16>().ok()) {
            self.api_port = port;
        }

        if let Some(api_path) = lookup("api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = lookup("api_use_https") {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }

        if let Some(level) = lookup("log_level").and_then(|v| parse_log_level(&v)) {
            self.log_level = level;
        }

        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the base API URL (protocol + host + port)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_api_url() {
        let settings = AppSettings::default();

        assert_eq!(settings.api_base_url(), "http://localhost:3000/api/v1");
        assert_eq!(settings.api_url("/goals"), "http://localhost:3000/api/v1/goals");
    }

    #[test]
    fn test_overrides_are_applied() {
        let overrides: HashMap<&str, &str> = [
            ("api_host", "goals.example.com"),
            ("api_port", "443"),
            ("api_path", "/v2"),
            ("api_use_https", "TRUE"),
            ("log_level", "trace"),
            ("toast_duration_ms", "2500"),
        ]
        .into_iter()
        .collect();

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| overrides.get(key).map(|v| v.to_string()));

        assert_eq!(settings.api_base_url(), "https://goals.example.com:443/v2");
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.toast_duration_ms, 2500);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| match key {
            "api_port" => Some("not-a-port".to_string()),
            "log_level" => Some("loud".to_string()),
            _ => None,
        });

        assert_eq!(settings.api_port, 3000);
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_log_level("Debug"), Some(Level::Debug));
        assert_eq!(parse_log_level(""), None);
    }
}
