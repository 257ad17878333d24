//! Unified terminal interface.
//!
//! This module provides the main API that callers use. Every operation is
//! sent as an event to the UI actor for sequential processing, so calls
//! return immediately (except prompts, which wait for the answer).
//!
//! Mode conflicts are silent: logging while a spinner or prompt owns the
//! line prints nothing, `animate` during a prompt does nothing, and a
//! question asked while not idle returns `None`.

use super::actor::{UiActor, UiEvent};
use super::console::{Console, InputSource, StdinInput, StdoutConsole};
use super::format::LogEntry;
use super::prompt::{PromptSession, is_yes};
use crate::config::TerminalConfig;
use crate::severity::{Severity, State};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use tokio::sync::oneshot;

/// A cloneable handle to the terminal actor.
///
/// The actor shuts down when the last clone is dropped; a running spinner
/// is stopped first so the cursor ends on a fresh line.
#[derive(Clone, Debug)]
pub struct Terminal {
    sender: mpsc::Sender<UiEvent>,
    _actor: Arc<UiActor>,
}

impl Terminal {
    /// Terminal on the process stdout/stdin.
    pub fn new(config: &TerminalConfig) -> Self {
        Self::with_io(config, StdoutConsole::default(), StdinInput)
    }

    /// Terminal on custom console and input services.
    pub fn with_io<C, I>(config: &TerminalConfig, console: C, input: I) -> Self
    where
        C: Console + 'static,
        I: InputSource + 'static,
    {
        let actor = UiActor::spawn(config, console, input);
        Self {
            sender: actor.sender(),
            _actor: Arc::new(actor),
        }
    }

    fn send(&self, event: UiEvent) {
        let _ = self.sender.send(event);
    }

    fn entry(&self, severity: Severity, text: &str) {
        self.send(UiEvent::Log(LogEntry::new(severity, text)));
    }

    /// Log an info message.
    pub fn log(&self, text: &str) {
        self.entry(Severity::Info, text);
    }

    /// Log a success message.
    pub fn success(&self, text: &str) {
        self.entry(Severity::Success, text);
    }

    /// Log a warning message.
    pub fn warning(&self, text: &str) {
        self.entry(Severity::Warning, text);
    }

    /// Log an error message.
    pub fn error(&self, text: &str) {
        self.entry(Severity::Error, text);
    }

    /// Log a notice, highlighted in amber.
    pub fn notice(&self, text: &str) {
        self.entry(Severity::Notice, text);
    }

    /// Send a message to the debug log only.
    pub fn debug(&self, severity: Severity, text: &str) {
        self.send(UiEvent::Log(LogEntry::debug(severity, text)));
    }

    /// Start a spinner, stopping any running one first.
    pub fn animate(&self, message: &str) {
        self.send(UiEvent::Animate(message.to_string()));
    }

    /// Change the message of the running spinner.
    pub fn update_animation(&self, message: &str) {
        self.send(UiEvent::UpdateAnimation(message.to_string()));
    }

    /// Stop the running spinner, optionally with a new final message.
    pub fn stop_animation(&self, state: State, message: Option<&str>) {
        self.send(UiEvent::StopAnimation {
            state,
            message: message.map(str::to_string),
        });
    }

    /// Ask a question and block until it is answered.
    ///
    /// Returns `None` if the terminal was busy or input ran out.
    ///
    /// # Panics
    /// Panics when called from within an async runtime; use
    /// [`Terminal::ask_async`] there.
    pub fn ask(&self, session: PromptSession) -> Option<String> {
        let (reply, rx) = oneshot::channel();
        self.send(UiEvent::Ask { session, reply });
        rx.blocking_recv().ok().flatten()
    }

    /// Async version of [`Terminal::ask`].
    pub async fn ask_async(&self, session: PromptSession) -> Option<String> {
        let (reply, rx) = oneshot::channel();
        self.send(UiEvent::Ask { session, reply });
        rx.await.ok().flatten()
    }

    /// Ask for a string, shown with `default` in brackets.
    pub fn ask_string(&self, question: &str, default: Option<&str>) -> Option<String> {
        self.ask(string_session(question, default))
    }

    /// Async version of [`Terminal::ask_string`].
    pub async fn ask_string_async(&self, question: &str, default: Option<&str>) -> Option<String> {
        self.ask_async(string_session(question, default)).await
    }

    /// Ask a yes/no question; empty input picks `default`.
    pub fn ask_yes_no(&self, question: &str, default: bool) -> Option<bool> {
        self.ask(PromptSession::yes_no(question, default))
            .map(|answer| is_yes(&answer))
    }

    /// Async version of [`Terminal::ask_yes_no`].
    pub async fn ask_yes_no_async(&self, question: &str, default: bool) -> Option<bool> {
        self.ask_async(PromptSession::yes_no(question, default))
            .await
            .map(|answer| is_yes(&answer))
    }

    /// Move the debug log; the next entry starts a fresh file there.
    pub fn set_debug_directory(&self, directory: impl Into<PathBuf>) {
        self.send(UiEvent::SetDebugDirectory(directory.into()));
    }

    /// Toggle the 24-hour clock for debug lines and console timestamps.
    pub fn set_debug_military_time(&self, enabled: bool) {
        self.send(UiEvent::SetDebugMilitaryTime(enabled));
    }

    /// Toggle debug log capture.
    pub fn set_debug_enabled(&self, enabled: bool) {
        self.send(UiEvent::SetDebugEnabled(enabled));
    }

    /// Toggle the time of day in front of console log lines.
    pub fn set_timestamps_enabled(&self, enabled: bool) {
        self.send(UiEvent::SetTimestampsEnabled(enabled));
    }

    /// Stop any spinner and abandon any prompt.
    pub fn reset(&self) {
        self.send(UiEvent::Reset);
    }

    /// Block until all pending events are processed.
    pub fn wait(&self) {
        let (tx, rx) = oneshot::channel();
        self.send(UiEvent::Sync(tx));

        // Block effectively without spinning CPU
        let _ = rx.blocking_recv();
    }

    /// Async version of wait.
    pub async fn wait_async(&self) {
        let (tx, rx) = oneshot::channel();
        self.send(UiEvent::Sync(tx));

        let _ = rx.await;
    }
}

impl super::reporter::Reporter for Terminal {
    fn animate(&self, message: &str) {
        self.animate(message);
    }

    fn update_animation(&self, message: &str) {
        self.update_animation(message);
    }

    fn stop_animation(&self, state: State, message: Option<&str>) {
        self.stop_animation(state, message);
    }

    fn info(&self, msg: &str) {
        self.log(msg);
    }

    fn success(&self, msg: &str) {
        self.success(msg);
    }

    fn warning(&self, msg: &str) {
        self.warning(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn notice(&self, msg: &str) {
        self.notice(msg);
    }
}

fn string_session(question: &str, default: Option<&str>) -> PromptSession {
    let session = PromptSession::new(question);
    match default {
        Some(default) => session.with_default(default),
        None => session,
    }
}
