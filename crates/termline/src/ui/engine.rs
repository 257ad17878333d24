//! Terminal Engine - the output state machine
//!
//! The engine owns every piece of terminal state: the output mode, the
//! spinner, the active prompt, the debug log and the runtime settings. It
//! is fully synchronous. Time and input come from outside:
//!
//! - the actor calls [`Engine::tick`] once per tick interval while a
//!   spinner runs;
//! - the actor calls [`Engine::submit_input`] with each line read while a
//!   prompt is active.
//!
//! Mode conflicts are resolved here and are silent: a rejected request
//! changes nothing and writes nothing.

use chrono::Local;
use std::path::{Path, PathBuf};

use super::animation::AnimationState;
use super::console::Console;
use super::coordinator::{Coordinator, ModeTransition, OutputMode};
use super::format::{LogEntry, LogFormatter};
use super::progress::render_frame;
use super::prompt::{PromptSession, PromptStep};
use super::theme::Theme;
use crate::config::{Settings, TerminalConfig};
use crate::debug_log::DebugLog;
use crate::error::DebugLogError;
use crate::severity::{Severity, State};

/// The terminal state machine, writing to a [`Console`].
pub struct Engine<C: Console> {
    console: C,
    theme: Theme,
    settings: Settings,
    coordinator: Coordinator,
    animation: AnimationState,
    prompt: Option<PromptSession>,
    debug_log: DebugLog,
}

impl<C: Console> Engine<C> {
    /// Idle engine with the default theme and the settings from `config`.
    pub fn new(console: C, config: &TerminalConfig) -> Self {
        Self {
            console,
            theme: Theme::default(),
            settings: Settings::from(config),
            coordinator: Coordinator::new(),
            animation: AnimationState::new(),
            prompt: None,
            debug_log: DebugLog::new(config.debug_directory.clone()),
        }
    }

    /// Replace the default theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Current output mode.
    pub fn mode(&self) -> OutputMode {
        self.coordinator.mode()
    }

    /// True while a spinner or prompt owns the line.
    pub fn is_blocking(&self) -> bool {
        self.coordinator.is_blocking()
    }

    /// Spinner state.
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Current runtime toggles.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Directory the debug log writes to.
    pub fn debug_directory(&self) -> &Path {
        self.debug_log.directory()
    }

    /// Debug log file of this run, once the first entry has been written.
    pub fn debug_log_path(&self) -> Option<PathBuf> {
        self.debug_log.current_path()
    }

    /// Move the debug log; the next entry starts a fresh file there.
    pub fn set_debug_directory(&mut self, directory: impl Into<PathBuf>) {
        self.debug_log.set_directory(directory);
    }

    /// Toggle the 24-hour clock.
    pub fn set_debug_military_time(&mut self, enabled: bool) {
        self.settings.military_time = enabled;
    }

    /// Toggle debug log capture.
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.settings.debug_enabled = enabled;
    }

    /// Toggle console timestamps.
    pub fn set_timestamps_enabled(&mut self, enabled: bool) {
        self.settings.timestamps_enabled = enabled;
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Print and/or capture a log entry.
    ///
    /// The console line is written before the debug log is touched, so a
    /// failing debug write never costs primary output.
    ///
    /// # Errors
    ///
    /// Returns the [`DebugLogError`] of a failed debug log append. The
    /// console line, if any, has already been written.
    pub fn log(&mut self, entry: &LogEntry) -> Result<(), DebugLogError> {
        let blocking = self.coordinator.is_blocking();
        self.emit(entry, blocking)
    }

    fn emit(&mut self, entry: &LogEntry, blocking: bool) -> Result<(), DebugLogError> {
        let now = Local::now();
        let formatted = LogFormatter::new(&self.theme, self.settings).format(entry, blocking, &now);

        if let Some(line) = formatted.console {
            self.write(&line);
        }
        if let Some(line) = formatted.debug {
            self.debug_log.append(&line, &now)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    /// Start a spinner with `message`.
    ///
    /// A spinner that is already running gets its final render (neutral
    /// bullet, current message) before the new one starts. Rejected while a
    /// prompt is active.
    pub fn animate(&mut self, message: impl Into<String>) -> ModeTransition {
        let transition = self.coordinator.try_enter(OutputMode::Animating);
        match transition {
            ModeTransition::Rejected => {
                tracing::debug!(mode = ?self.coordinator.mode(), "animation request ignored");
                return transition;
            }
            ModeTransition::EnteredAfterForceStop => {
                self.stop_animation(State::Info, None);
                self.coordinator.try_enter(OutputMode::Animating);
            }
            ModeTransition::Entered => {}
        }

        self.animation.start(message);
        transition
    }

    /// Advance one frame and redraw. Returns false if no spinner is running.
    pub fn tick(&mut self) -> bool {
        if !self.animation.is_running() {
            return false;
        }
        self.animation.advance();
        self.render_animation(None);
        true
    }

    /// Replace the spinner message and redraw the current frame.
    pub fn update_animation(&mut self, message: impl Into<String>) -> bool {
        if self.prompt.is_some() || !self.animation.update(message) {
            return false;
        }
        self.render_animation(None);
        true
    }

    /// Stop the spinner: final frame with a bullet colored by `state`, then
    /// a newline, then back to Idle. No-op if nothing is running.
    pub fn stop_animation(&mut self, state: State, message: Option<String>) -> bool {
        if !self.animation.stop(state, message) {
            return false;
        }

        let color = state.color(&self.theme.colors);
        self.render_animation(Some(color));
        self.write("\n");
        self.animation.mark_fully_stopped();
        self.coordinator.exit(OutputMode::Animating);
        true
    }

    fn render_animation(&mut self, finish: Option<crossterm::style::Color>) {
        let line = render_frame(
            self.animation.glyph(),
            self.theme.icons.bullet,
            self.animation.message(),
            self.console.columns(),
            finish,
        );
        self.write(&format!("\r{line}"));
    }

    // ------------------------------------------------------------------
    // Prompts
    // ------------------------------------------------------------------

    /// Enter Prompting mode and show the question.
    ///
    /// Returns false, without writing anything, unless the mode is Idle.
    pub fn begin_prompt(&mut self, session: PromptSession) -> bool {
        if self.coordinator.try_enter(OutputMode::Prompting) != ModeTransition::Entered {
            tracing::debug!(mode = ?self.coordinator.mode(), question = session.question(), "prompt refused");
            return false;
        }

        let question = session.render(&self.theme);
        self.prompt = Some(session);
        self.write(&question);
        true
    }

    /// Feed one line of input to the active prompt.
    ///
    /// Returns the accepted answer, or `None` if the answer was rejected (an
    /// error line is printed and the question is shown again) or no prompt
    /// is active. The mode stays Prompting across retries.
    pub fn submit_input(&mut self, line: &str) -> Option<String> {
        let step = self.prompt.as_ref()?.evaluate(line);

        match step {
            PromptStep::Accepted(answer) => {
                self.prompt = None;
                self.coordinator.exit(OutputMode::Prompting);
                Some(answer)
            }
            PromptStep::Retry(message) => {
                if let Err(e) = self.emit(&LogEntry::new(Severity::Error, message), false) {
                    tracing::warn!(error = %e, "debug log write failed");
                }
                if let Some(session) = &self.prompt {
                    let question = session.render(&self.theme);
                    self.write(&question);
                }
                None
            }
        }
    }

    /// True while a question waits for input.
    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// Abandon the active prompt, e.g. when input is exhausted.
    pub fn cancel_prompt(&mut self) -> bool {
        if self.prompt.take().is_none() {
            return false;
        }
        self.write("\n");
        self.coordinator.exit(OutputMode::Prompting);
        true
    }

    /// Force everything back to Idle: the spinner is stopped with a neutral
    /// bullet and any prompt is dropped.
    pub fn reset(&mut self) {
        self.stop_animation(State::Info, None);
        self.cancel_prompt();
        self.coordinator.reset();
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.console.write_str(text) {
            tracing::debug!(error = %e, "console write failed");
        }
    }
}

impl<C: Console> std::fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("mode", &self.coordinator.mode())
            .field("animation", &self.animation)
            .field("prompt", &self.prompt)
            .field("settings", &self.settings)
            .field("debug_log", &self.debug_log)
            .finish_non_exhaustive()
    }
}
