//! Spinner frame rendering
//!
//! Pure layout for a single animation line. No I/O happens here; the
//! engine decides when to write the result and with which line prefix.
//!
//! A frame is laid out as `" <glyph> <message>"` and fills the whole
//! terminal width: long messages are cut and end in `...`, short ones are
//! padded with spaces so a previous, longer frame leaves nothing behind.
//! Without a known width (piped output) the message is written as-is.

use crossterm::style::Color;

use super::theme::stylize;

/// Width of the `" <glyph> "` lead-in.
pub const FRAME_PREFIX_WIDTH: usize = 3;

/// Marker appended to truncated messages.
pub const ELLIPSIS: &str = "...";

/// Fit `message` into the `columns - 3` cells that follow the lead-in.
///
/// The result is always exactly `columns - 3` characters long.
pub fn layout_message(message: &str, columns: usize) -> String {
    let available = columns.saturating_sub(FRAME_PREFIX_WIDTH);
    let len = message.chars().count();

    if len > available {
        let keep = available.saturating_sub(ELLIPSIS.len());
        message
            .chars()
            .take(keep)
            .chain(ELLIPSIS.chars())
            .take(available)
            .collect()
    } else {
        let mut padded = String::with_capacity(message.len() + available - len);
        padded.push_str(message);
        padded.extend(std::iter::repeat_n(' ', available - len));
        padded
    }
}

/// Render one spinner line.
///
/// With `finish = Some(color)` the glyph is replaced by `bullet` styled in
/// `color`; this is the final frame written when an animation stops.
/// Visible length equals `columns` whenever `columns >= FRAME_PREFIX_WIDTH`.
pub fn render_frame(
    glyph: &str,
    bullet: &str,
    message: &str,
    columns: Option<usize>,
    finish: Option<Color>,
) -> String {
    let body = match columns {
        Some(columns) => layout_message(message, columns),
        None => message.to_string(),
    };
    match finish {
        Some(color) => format!(" {} {body}", stylize(bullet, color)),
        None => format!(" {glyph} {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{ColorScheme, visible_len};

    #[test]
    fn test_frame_fills_width_exactly() {
        for columns in 4..=120 {
            for message in ["", "x", "Loading your application's configuration"] {
                let line = render_frame("|", "•", message, Some(columns), None);
                assert_eq!(line.chars().count(), columns, "columns={columns} message={message:?}");
            }
        }
    }

    #[test]
    fn test_short_message_is_space_padded() {
        let line = render_frame("/", "•", "abc", Some(20), None);
        assert_eq!(line, format!(" / abc{}", " ".repeat(20 - 3 - 3)));
        assert!(line.ends_with(&" ".repeat(14)));
    }

    #[test]
    fn test_exact_fit_has_no_padding() {
        let line = render_frame("-", "•", "12345", Some(8), None);
        assert_eq!(line, " - 12345");
    }

    #[test]
    fn test_long_message_is_truncated_with_ellipsis() {
        let line = render_frame("|", "•", "abcdefghijklmnop", Some(12), None);
        assert_eq!(line, " | abcdef...");
        assert_eq!(line.chars().count(), 12);
    }

    #[test]
    fn test_narrow_terminal_cuts_ellipsis() {
        assert_eq!(render_frame("|", "•", "hello", Some(4), None), " | .");
        assert_eq!(render_frame("|", "•", "hello", Some(5), None), " | ..");
        assert_eq!(render_frame("|", "•", "hello", Some(6), None), " | ...");
        assert_eq!(render_frame("|", "•", "hello", Some(7), None), " | h...");
    }

    #[test]
    fn test_final_frame_uses_styled_bullet() {
        let colors = ColorScheme::default();
        let line = render_frame("|", "•", "done", Some(30), Some(colors.success));
        assert!(line.contains(&stylize("•", colors.success)));
        assert!(!line.contains('|'));
        assert_eq!(visible_len(&line), 30);
    }

    #[test]
    fn test_unknown_width_writes_full_message() {
        let message = "Failed to load the configuration because the file path provided was a directory";
        assert_eq!(render_frame("|", "•", message, None, None), format!(" | {message}"));

        let colors = ColorScheme::default();
        let line = render_frame("|", "•", message, None, Some(colors.error));
        assert_eq!(visible_len(&line), message.chars().count() + FRAME_PREFIX_WIDTH);
        assert!(line.ends_with("was a directory"));
    }

    #[test]
    fn test_layout_counts_chars_not_bytes() {
        let body = layout_message("héllo wörld", 10);
        assert_eq!(body.chars().count(), 7);
        assert_eq!(body, "héll...");
    }
}
