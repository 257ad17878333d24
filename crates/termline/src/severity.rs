//! Message severities and animation end states.

use crossterm::style::Color;

use crate::ui::theme::ColorScheme;

/// Categorical importance of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral information
    Info,
    /// Completed work
    Success,
    /// Something worth attention
    Warning,
    /// A failure
    Error,
    /// Highlighted information, rendered amber throughout
    Notice,
}

impl Severity {
    /// Label used inside the debug log prefix tag (`[ <label> ]`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Notice => "Notice",
        }
    }

    /// Bullet color for this severity.
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Self::Info => colors.neutral,
            Self::Success => colors.success,
            Self::Warning | Self::Notice => colors.warning,
            Self::Error => colors.error,
        }
    }
}

/// Final state of an animation, picks the color of the end bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Neutral bullet
    #[default]
    Info,
    /// Green bullet
    Success,
    /// Amber bullet
    Warning,
    /// Red bullet
    Error,
}

impl State {
    /// End bullet color for this state.
    pub fn color(self, colors: &ColorScheme) -> Color {
        match self {
            Self::Info => colors.neutral,
            Self::Success => colors.success,
            Self::Warning => colors.warning,
            Self::Error => colors.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_shares_warning_color() {
        let colors = ColorScheme::default();
        assert_eq!(
            Severity::Notice.color(&colors),
            Severity::Warning.color(&colors)
        );
        assert_ne!(Severity::Notice.label(), Severity::Warning.label());
    }

    #[test]
    fn test_state_colors_match_severities() {
        let colors = ColorScheme::default();
        assert_eq!(State::Info.color(&colors), Severity::Info.color(&colors));
        assert_eq!(State::Success.color(&colors), colors.success);
        assert_eq!(State::Error.color(&colors), colors.error);
        assert_eq!(State::Warning.color(&colors), colors.warning);
    }
}
