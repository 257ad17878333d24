//! Log line formatting
//!
//! Turns a [`LogEntry`] into up to two projections: the console line and
//! the debug-log line. Which of them exist depends on the current mode and
//! the debug setting, never on the caller.

use chrono::{DateTime, Local};

use super::theme::{Theme, strip_styles, stylize};
use crate::config::Settings;
use crate::severity::Severity;

/// One log call. Never stored; only its projections are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Picks the bullet color and the debug tag
    pub severity: Severity,
    /// Message text, may contain style codes
    pub text: String,
    /// Skip the console; only the debug log sees this entry
    pub debug_only: bool,
}

impl LogEntry {
    /// Entry for the console and, when enabled, the debug log.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            debug_only: false,
        }
    }

    /// Entry that only the debug log sees.
    pub fn debug(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            debug_only: true,
            ..Self::new(severity, text)
        }
    }
}

/// Rendered projections of a [`LogEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedEntry {
    /// Console line including the trailing newline
    pub console: Option<String>,
    /// Debug log entry without any line break
    pub debug: Option<String>,
}

/// `hh:mm:ss AM` or, for military time, `HH:mm:ss`.
pub fn format_clock(now: &DateTime<Local>, military: bool) -> String {
    if military {
        now.format("%H:%M:%S").to_string()
    } else {
        now.format("%I:%M:%S %p").to_string()
    }
}

/// `yyyy Mon dd`, e.g. `2024 Mar 07`.
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%Y %b %d").to_string()
}

/// Formats entries with one theme and one snapshot of the settings.
#[derive(Debug)]
pub struct LogFormatter<'a> {
    theme: &'a Theme,
    settings: Settings,
}

impl<'a> LogFormatter<'a> {
    /// Formatter for the current theme and settings.
    pub fn new(theme: &'a Theme, settings: Settings) -> Self {
        Self { theme, settings }
    }

    /// Produce the projections of `entry`.
    ///
    /// The console line is only produced when nothing is `blocking` and the
    /// entry is not debug-only. The debug line is produced whenever debug
    /// capture is enabled.
    pub fn format(&self, entry: &LogEntry, blocking: bool, now: &DateTime<Local>) -> FormattedEntry {
        FormattedEntry {
            console: (!blocking && !entry.debug_only).then(|| self.console_line(entry, now)),
            debug: self
                .settings
                .debug_enabled
                .then(|| self.debug_line(entry, now)),
        }
    }

    /// ` • [ time ] text\n`; the timestamp only when enabled.
    pub fn console_line(&self, entry: &LogEntry, now: &DateTime<Local>) -> String {
        let colors = &self.theme.colors;
        let bullet = stylize(self.theme.icons.bullet, entry.severity.color(colors));

        let stamp = if self.settings.timestamps_enabled {
            let clock = format_clock(now, self.settings.military_time);
            stylize(&format!("[ {clock} ]"), colors.neutral) + " "
        } else {
            String::new()
        };

        let text = match entry.severity {
            Severity::Notice => stylize(&entry.text, colors.warning),
            _ => entry.text.clone(),
        };

        format!(" {bullet} {stamp}{text}\n")
    }

    /// ` [ Standard ] [ 2024 Mar 07 ] [ 09:15:02 PM ] [ Info ] text`
    pub fn debug_line(&self, entry: &LogEntry, now: &DateTime<Local>) -> String {
        let kind = if entry.debug_only { "Debug" } else { "Standard" };
        format!(
            " [ {kind} ] [ {} ] [ {} ] [ {} ] {}",
            format_date(now),
            format_clock(now, self.settings.military_time),
            entry.severity.label(),
            strip_styles(&entry.text)
        )
    }
}
