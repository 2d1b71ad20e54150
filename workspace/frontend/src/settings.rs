use log::Level;
use web_sys::window;

const LOG_LEVEL_KEY: &str = "portfolio_log_level";
const ANIMATIONS_KEY: &str = "portfolio_animations";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Play reveal and background animations
    pub animations_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            animations_enabled: true,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = is_local_host(&hostname);

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(animations)) = storage.get_item(ANIMATIONS_KEY) {
                    settings.animations_enabled = animations.to_lowercase() != "false";
                }
            }
        }

        settings
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

fn parse_level(value: &str) -> Option<Level> {
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

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_local_hosts_enable_debug() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("127.0.0.1"));
        assert!(!is_local_host("alexchen.dev"));
    }

    #[test]
    fn test_settings_default_before_init() {
        let settings = get_settings();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.animations_enabled);
        assert_eq!(settings.log_level, Level::Info);
    }
}
