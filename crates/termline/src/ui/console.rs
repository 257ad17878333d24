//! Console services - text stream I/O behind small traits
//!
//! The engine never touches stdout or stdin directly. It writes through a
//! [`Console`] and the actor reads prompt answers through an
//! [`InputSource`], so both can be swapped for in-memory versions.
//!
//! Writes are flushed immediately: every write is one complete unit
//! (a frame, a log line, a prompt) and must appear atomically.

use crossterm::terminal;
use crossterm::tty::IsTty;
use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Write side of the terminal.
pub trait Console: Send {
    /// Write `text` as-is and flush.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Current terminal width in character cells.
    ///
    /// `None` when the output is not a terminal (piped or redirected); frames
    /// are then written without truncation or padding.
    fn columns(&self) -> Option<usize>;
}

/// Read side of the terminal: one line per call.
pub trait InputSource: Send {
    /// Block until a full line is available.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. The trailing line
    /// break is not included.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Console backed by the process stdout.
pub struct StdoutConsole {
    stdout: Stdout,
}

impl StdoutConsole {
    /// Wrap a stdout handle.
    pub fn new(stdout: Stdout) -> Self {
        Self { stdout }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl std::fmt::Debug for StdoutConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdoutConsole").finish_non_exhaustive()
    }
}

impl Console for StdoutConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    }

    fn columns(&self) -> Option<usize> {
        if !self.stdout.is_tty() {
            return None;
        }
        match terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(usize::from(cols)),
            _ => None,
        }
    }
}

/// Console that records everything into a shared string.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to the engine.
#[derive(Debug, Clone)]
pub struct MemoryConsole {
    buffer: Arc<Mutex<String>>,
    columns: Option<usize>,
}

impl MemoryConsole {
    /// In-memory terminal `columns` cells wide.
    pub fn new(columns: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(String::new())),
            columns: Some(columns),
        }
    }

    /// In-memory stream with no known width, like piped stdout.
    pub fn unmeasured() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(String::new())),
            columns: None,
        }
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop everything written so far.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::unmeasured()
    }
}

impl Console for MemoryConsole {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
        Ok(())
    }

    fn columns(&self) -> Option<usize> {
        self.columns
    }
}

/// Lines from the process stdin.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_break(&line).to_string()))
    }
}

/// Pre-recorded answers, handed out in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Answers handed out in the given order, then end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub fn trim_line_break(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new(40);
        let mut writer = console.clone();
        writer.write_str("\r | a").unwrap();
        writer.write_str("\n").unwrap();
        assert_eq!(console.contents(), "\r | a\n");
        assert_eq!(writer.columns(), Some(40));

        console.clear();
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn test_scripted_input_runs_dry() {
        let mut input = ScriptedInput::new(["y", ""]);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("y"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_trim_line_break() {
        assert_eq!(trim_line_break("answer\n"), "answer");
        assert_eq!(trim_line_break("answer\r\n"), "answer");
        assert_eq!(trim_line_break("answer"), "answer");
        assert_eq!(trim_line_break("a\rb\n"), "a\rb");
    }

    #[test]
    fn test_stdout_console_width_is_positive_when_known() {
        let console = StdoutConsole::default();
        assert_ne!(console.columns(), Some(0));
    }

    #[test]
    fn test_unmeasured_console_has_no_width() {
        assert_eq!(MemoryConsole::unmeasured().columns(), None);
        assert_eq!(MemoryConsole::default().columns(), None);
    }
}
