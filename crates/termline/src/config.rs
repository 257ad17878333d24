//! Startup configuration for a [`Terminal`](crate::ui::Terminal).
//!
//! Every field can also be changed at runtime through the setters on
//! `Terminal`; this struct only fixes the initial values.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default directory for debug logs, relative to the working directory.
pub const DEFAULT_DEBUG_DIRECTORY: &str = "debug";

/// Default spinner tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Initial terminal settings. Deserializes from a table where every key is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Where `debug-log-<n>.txt` files are written
    pub debug_directory: PathBuf,
    /// Mirror log lines into the debug log
    pub debug_enabled: bool,
    /// Use a 24-hour clock in timestamps
    pub debug_military_time: bool,
    /// Prefix console log lines with the time of day
    pub timestamps_enabled: bool,
    /// Spinner frame interval
    pub tick_interval_ms: u64,
}

impl TerminalConfig {
    /// Spinner frame interval, at least one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Set [`TerminalConfig::debug_directory`].
    pub fn with_debug_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.debug_directory = directory.into();
        self
    }

    /// Set [`TerminalConfig::debug_enabled`].
    pub fn with_debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Set [`TerminalConfig::debug_military_time`].
    pub fn with_military_time(mut self, enabled: bool) -> Self {
        self.debug_military_time = enabled;
        self
    }

    /// Set [`TerminalConfig::timestamps_enabled`].
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps_enabled = enabled;
        self
    }

    /// Set the spinner frame interval, stored in whole milliseconds.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            debug_directory: PathBuf::from(DEFAULT_DEBUG_DIRECTORY),
            debug_enabled: false,
            debug_military_time: false,
            timestamps_enabled: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Runtime toggles held by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Capture log lines in the debug log
    pub debug_enabled: bool,
    /// 24-hour clock for debug lines and console timestamps
    pub military_time: bool,
    /// Prefix console log lines with the time of day
    pub timestamps_enabled: bool,
}

impl From<&TerminalConfig> for Settings {
    fn from(config: &TerminalConfig) -> Self {
        Self {
            debug_enabled: config.debug_enabled,
            military_time: config.debug_military_time,
            timestamps_enabled: config.timestamps_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.debug_directory, PathBuf::from("debug"));
        assert!(!config.debug_enabled);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = TerminalConfig::default().with_tick_interval(Duration::ZERO);
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_settings_from_config() {
        let config = TerminalConfig::default()
            .with_debug_enabled(true)
            .with_military_time(true);
        let settings = Settings::from(&config);
        assert!(settings.debug_enabled);
        assert!(settings.military_time);
        assert!(!settings.timestamps_enabled);
    }
}
