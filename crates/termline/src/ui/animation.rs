//! Spinner animation state
//!
//! Tracks the message, frame and lifecycle of the single active spinner.
//! Rendering and writing live in the engine; this type only enforces the
//! state transitions.

use super::theme::SPINNER_FRAMES;
use crate::severity::State;

/// State of the one spinner a terminal can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    message: String,
    frame_index: usize,
    running: bool,
    fully_stopped: bool,
    end_state: State,
}

impl AnimationState {
    /// Idle state: nothing running, nothing to stop.
    pub fn new() -> Self {
        Self {
            message: String::new(),
            frame_index: 0,
            running: false,
            fully_stopped: true,
            end_state: State::Info,
        }
    }

    /// Begin a new spinner at frame 0.
    pub fn start(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.frame_index = 0;
        self.running = true;
        self.fully_stopped = false;
        self.end_state = State::Info;
    }

    /// Move to the next frame, wrapping after the last glyph.
    pub fn advance(&mut self) -> usize {
        self.frame_index = (self.frame_index + 1) % SPINNER_FRAMES.len();
        self.frame_index
    }

    /// Replace the message of a running spinner. Returns false if nothing
    /// is running.
    pub fn update(&mut self, message: impl Into<String>) -> bool {
        if !self.is_running() {
            return false;
        }
        self.message = message.into();
        true
    }

    /// Mark the spinner as stopping. Returns false (and changes nothing) if
    /// no spinner is running.
    pub fn stop(&mut self, state: State, message: Option<String>) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(message) = message {
            self.message = message;
        }
        self.running = false;
        self.end_state = state;
        true
    }

    /// Called once the final frame and newline are on screen.
    pub fn mark_fully_stopped(&mut self) {
        self.running = false;
        self.fully_stopped = true;
    }

    /// True between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.running && !self.fully_stopped
    }

    /// True once the final frame has been written, or before any start.
    pub fn is_fully_stopped(&self) -> bool {
        self.fully_stopped
    }

    /// Current spinner text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Index into the spinner frames, always below 4.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Spinner glyph of the current frame.
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index]
    }

    /// State given to the last `stop`.
    pub fn end_state(&self) -> State {
        self.end_state
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_wraps() {
        let mut animation = AnimationState::new();
        animation.start("working");
        for n in 1..=10 {
            animation.advance();
            assert_eq!(animation.frame_index(), n % 4);
        }
    }

    #[test]
    fn test_start_resets_frame() {
        let mut animation = AnimationState::new();
        animation.start("one");
        animation.advance();
        animation.advance();
        animation.start("two");
        assert_eq!(animation.frame_index(), 0);
        assert_eq!(animation.glyph(), "|");
        assert_eq!(animation.message(), "two");
    }

    #[test]
    fn test_stop_twice_is_noop() {
        let mut animation = AnimationState::new();
        animation.start("working");
        assert!(animation.stop(State::Success, Some("done".into())));
        animation.mark_fully_stopped();
        let snapshot = animation.clone();

        assert!(!animation.stop(State::Error, Some("again".into())));
        assert_eq!(animation, snapshot);
    }

    #[test]
    fn test_update_requires_running() {
        let mut animation = AnimationState::new();
        assert!(!animation.update("ignored"));
        animation.start("working");
        assert!(animation.update("still working"));
        assert_eq!(animation.message(), "still working");
    }

    #[test]
    fn test_stop_keeps_message_when_none() {
        let mut animation = AnimationState::new();
        animation.start("working");
        animation.stop(State::Warning, None);
        assert_eq!(animation.message(), "working");
        assert_eq!(animation.end_state(), State::Warning);
        assert!(!animation.is_running());
        assert!(!animation.is_fully_stopped());
    }
}
