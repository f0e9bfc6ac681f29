//! Configuration management for Robot Mouse

use std::path::PathBuf;
use tracing::warn;

/// Environment variable forcing the runtime identifier
pub const PLATFORM_ENV: &str = "ROBOT_MOUSE_PLATFORM";
/// Environment variable naming the screenshot directory
pub const SCREENSHOT_DIR_ENV: &str = "ROBOT_MOUSE_SCREENSHOT_DIR";
/// Environment variable for the delay between button press and release
pub const PRESS_RELEASE_DELAY_ENV: &str = "ROBOT_MOUSE_PRESS_RELEASE_DELAY_MS";

/// Configuration for a pointer device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Screenshot directory, accepted for compatibility with sibling libraries.
    /// Never consulted when choosing a backend.
    pub screenshot_directory: Option<PathBuf>,

    /// Runtime identifier to use instead of detecting it
    pub platform_override: Option<String>,

    /// Delay in milliseconds between button press and release
    pub press_release_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screenshot_directory: None,
            platform_override: None,
            press_release_delay_ms: 20,
        }
    }
}

impl Config {
    /// Build a Config from `ROBOT_MOUSE_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = std::env::var_os(SCREENSHOT_DIR_ENV) {
            config.screenshot_directory = Some(PathBuf::from(dir));
        }

        if let Ok(platform) = std::env::var(PLATFORM_ENV) {
            if !platform.trim().is_empty() {
                config.platform_override = Some(platform.trim().to_string());
            }
        }

        if let Ok(raw) = std::env::var(PRESS_RELEASE_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(delay) => config.press_release_delay_ms = delay,
                Err(e) => warn!(
                    "Ignoring {}={:?}: {}, using {}ms",
                    PRESS_RELEASE_DELAY_ENV, raw, e, config.press_release_delay_ms
                ),
            }
        }

        config
    }

    /// Set the screenshot directory
    pub fn with_screenshot_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_directory = Some(dir.into());
        self
    }

    /// Force the runtime identifier (e.g. `java1.8.0`, `cli`, `linux`)
    pub fn with_platform(mut self, identifier: impl Into<String>) -> Self {
        self.platform_override = Some(identifier.into());
        self
    }

    /// Set the delay between press and release of a click
    pub fn with_press_release_delay(mut self, delay_ms: u64) -> Self {
        self.press_release_delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(PLATFORM_ENV);
        std::env::remove_var(SCREENSHOT_DIR_ENV);
        std::env::remove_var(PRESS_RELEASE_DELAY_ENV);
    }

    #[test]
    fn builders_set_fields() {
        let config = Config::default()
            .with_screenshot_directory("/tmp/shots")
            .with_platform("cli")
            .with_press_release_delay(5);

        assert_eq!(config.screenshot_directory, Some(PathBuf::from("/tmp/shots")));
        assert_eq!(config.platform_override.as_deref(), Some("cli"));
        assert_eq!(config.press_release_delay_ms, 5);
    }

    #[test]
    #[serial]
    fn from_env_reads_variables() {
        clear_env();
        std::env::set_var(PLATFORM_ENV, " java17 ");
        std::env::set_var(SCREENSHOT_DIR_ENV, "/var/shots");
        std::env::set_var(PRESS_RELEASE_DELAY_ENV, "7");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.platform_override.as_deref(), Some("java17"));
        assert_eq!(config.screenshot_directory, Some(PathBuf::from("/var/shots")));
        assert_eq!(config.press_release_delay_ms, 7);
    }

    #[test]
    #[serial]
    fn malformed_delay_keeps_default() {
        clear_env();
        std::env::set_var(PRESS_RELEASE_DELAY_ENV, "soon");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config, Config::default());
    }
}
