//! termline - terminal interaction engine
//!
//! Animated progress spinners, categorized log lines and interactive
//! prompts on one console, with optional mirroring of every log line into
//! a rotating debug log on disk.
//!
//! # Overview
//!
//! Output goes through a single owner so nothing ever interleaves: while a
//! spinner animates or a question waits for input, plain log lines are kept
//! off the console (they still reach the debug log when capture is on).
//!
//! # Architecture
//!
//! - **Actor Pattern**: A [`ui::Terminal`] handle sends events to one UI
//!   thread that owns all terminal state, ticks the spinner and collects
//!   prompt input.
//! - **Explicit Service**: The state lives in a [`ui::Engine`] value with a
//!   constructor and `reset()`; there is no ambient global state.
//! - **Injected I/O**: Console and input are traits, so everything runs
//!   against in-memory buffers in tests.
//!
//! # Debug Log Layout
//!
//! ```text
//! ./debug/
//! ├── debug-log-0.txt   # first run
//! ├── debug-log-1.txt   # second run
//! └── debug-log-2.txt   # this run
//! ```

pub mod config;
pub mod debug_log;
pub mod error;
pub mod severity;
pub mod ui;

// Re-exports for convenience
pub use config::TerminalConfig;
pub use error::DebugLogError;
pub use severity::{Severity, State};
pub use ui::{Reporter, Terminal};
