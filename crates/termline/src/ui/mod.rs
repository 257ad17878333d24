//! UI Module - Clean separation of terminal output concerns
//!
//! All rendering and mode logic lives here, isolated from the callers that
//! only want to say "show progress", "log this" or "ask that".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Callers   │  (config loaders, build steps, CLI commands)
//! └──────┬──────┘
//!        │ uses (directly or via Reporter)
//!        ▼
//! ┌─────────────┐
//! │  Terminal   │  Public API, cloneable handle
//! └──────┬──────┘
//!        │ sends events
//!        ▼
//! ┌─────────────┐
//! │    Actor    │  Single-threaded event loop, tick timer, input reader
//! └──────┬──────┘
//!        │ drives
//!        ▼
//! ┌─────────────┐
//! │   Engine    │  Mode coordinator + spinner + prompt + log formatter
//! └──────┬──────┘
//!        │ renders with
//!        ▼
//! ┌─────────────┐
//! │ Theme/Frame │  Colors, glyphs, frame layout
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`theme`] - Colors, glyphs and style helpers
//! - [`progress`] - Spinner frame layout
//! - [`console`] - Console and input services
//! - [`coordinator`] - Idle / Animating / Prompting state machine
//! - [`animation`] - Spinner state
//! - [`prompt`] - Question sessions and validation
//! - [`format`] - Console and debug projections of log entries
//! - [`engine`] - Everything above composed into one owned service
//! - [`actor`] - Message-passing event loop
//! - [`terminal`] - Public API
//! - [`reporter`] - Trait for dependency injection
//!
//! # Example
//!
//! ```no_run
//! use termline::config::TerminalConfig;
//! use termline::severity::State;
//! use termline::ui::Terminal;
//!
//! let terminal = Terminal::new(&TerminalConfig::default());
//!
//! terminal.animate("Fetching dependencies");
//! terminal.update_animation("Fetching dependencies (3/7)");
//! terminal.stop_animation(State::Success, Some("Fetched 7 dependencies"));
//!
//! if terminal.ask_yes_no("Build now?", true) == Some(true) {
//!     terminal.success("Build queued");
//! }
//! ```

pub mod actor;
pub mod animation;
pub mod console;
pub mod coordinator;
pub mod engine;
pub mod format;
pub mod progress;
pub mod prompt;
pub mod reporter;
pub mod terminal;
pub mod theme;

// Re-export main types for convenience
pub use console::{Console, InputSource, MemoryConsole, ScriptedInput};
pub use coordinator::{ModeTransition, OutputMode};
pub use engine::Engine;
pub use prompt::PromptSession;
pub use reporter::Reporter;
pub use terminal::Terminal;
pub use theme::Theme;
