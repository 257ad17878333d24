//! UI Theme - Design system constants
//!
//! This module defines all visual elements used in termline's output:
//! - Colors
//! - Glyphs (bullets, prompt marker, spinner frames)
//! - Styling helpers
//!
//! Styling is treated as an opaque `stylize(text, color) -> styled text`
//! capability; everything else works on plain text and measures lengths
//! after [`strip_styles`].

use crossterm::style::{Color, Stylize};
use regex::Regex;
use std::sync::LazyLock;

/// Spinner glyphs, cycled once per tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// CSI/SGR escape sequences as emitted by crossterm.
static STYLE_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("valid style code pattern"));

/// Default theme
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Glyphs
    pub icons: Icons,
}

/// Color scheme for UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Info bullets, timestamps, prompt marker and default answers
    pub neutral: Color,
    /// Success states
    pub success: Color,
    /// Warning and notice states
    pub warning: Color,
    /// Error states
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            neutral: Color::Rgb {
                r: 0x99,
                g: 0x99,
                b: 0x99,
            },
            success: Color::Rgb {
                r: 0x50,
                g: 0xff,
                b: 0xab,
            },
            warning: Color::Rgb {
                r: 0xff,
                g: 0xab,
                b: 0x00,
            },
            error: Color::Rgb {
                r: 0xff,
                g: 0x55,
                b: 0x55,
            },
        }
    }
}

/// Glyphs for log lines and prompts
#[derive(Debug, Clone)]
pub struct Icons {
    /// Log line and finished-animation bullet (•)
    pub bullet: &'static str,
    /// Prompt marker (>)
    pub prompt: &'static str,
    /// Spinner frames
    pub frames: [&'static str; 4],
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            bullet: "•",
            prompt: ">",
            frames: SPINNER_FRAMES,
        }
    }
}

/// Wrap `text` in the escape codes for `color`.
pub fn stylize(text: &str, color: Color) -> String {
    text.with(color).to_string()
}

/// Remove every style escape sequence from `text`.
pub fn strip_styles(text: &str) -> String {
    STYLE_CODES.replace_all(text, "").into_owned()
}

/// Visible width of `text` in characters, ignoring style codes.
pub fn visible_len(text: &str) -> usize {
    strip_styles(text).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_styles_roundtrip() {
        let colors = ColorScheme::default();
        let styled = stylize("hello", colors.success);
        assert_eq!(strip_styles(&styled), "hello");
    }

    #[test]
    fn test_strip_styles_plain_text_untouched() {
        assert_eq!(strip_styles("plain [ text ]"), "plain [ text ]");
    }

    #[test]
    fn test_strip_styles_handles_raw_sgr() {
        assert_eq!(strip_styles("\x1b[1;31mred\x1b[0m"), "red");
        assert_eq!(strip_styles("\x1b[38;2;255;171;0mamber\x1b[39m"), "amber");
    }

    #[test]
    fn test_visible_len_counts_chars() {
        let colors = ColorScheme::default();
        assert_eq!(visible_len(&stylize("•", colors.error)), 1);
    }

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.bullet, "•");
        assert_eq!(theme.icons.frames.len(), 4);
        assert_eq!(theme.icons.frames[3], "\\");
    }
}
