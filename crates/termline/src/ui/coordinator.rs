//! Output mode coordination
//!
//! Exactly one of three modes is active at any time. Spinners and prompts
//! both need exclusive control of the cursor line, and plain log lines must
//! not land in the middle of either, so every write is gated on the mode.

/// Mutually exclusive output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Nothing owns the cursor line; log lines print normally
    #[default]
    Idle,
    /// A spinner is overwriting the current line
    Animating,
    /// A question is waiting for a line of input
    Prompting,
}

/// Result of asking the coordinator for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Was Idle, now in the requested mode
    Entered,
    /// Another mode is active; nothing changed
    Rejected,
    /// A spinner was already running; it has to be stopped first, after
    /// which the new one owns the line
    EnteredAfterForceStop,
}

impl ModeTransition {
    /// True unless the request was rejected.
    pub fn entered(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Owner of the current [`OutputMode`].
#[derive(Debug, Default)]
pub struct Coordinator {
    mode: OutputMode,
}

impl Coordinator {
    /// Coordinator in Idle mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Request `mode`.
    ///
    /// `Animating -> Animating` reports [`ModeTransition::EnteredAfterForceStop`]
    /// and leaves the mode as Animating; the caller is responsible for the
    /// stop-render of the previous animation.
    pub fn try_enter(&mut self, mode: OutputMode) -> ModeTransition {
        match (self.mode, mode) {
            (OutputMode::Idle, requested) => {
                self.mode = requested;
                ModeTransition::Entered
            }
            (OutputMode::Animating, OutputMode::Animating) => {
                ModeTransition::EnteredAfterForceStop
            }
            _ => ModeTransition::Rejected,
        }
    }

    /// Leave `mode`. Returns false if `mode` was not the active one.
    pub fn exit(&mut self, mode: OutputMode) -> bool {
        if self.mode != mode {
            return false;
        }
        self.mode = OutputMode::Idle;
        true
    }

    /// True while a spinner or prompt owns the line.
    pub fn is_blocking(&self) -> bool {
        self.mode != OutputMode::Idle
    }

    /// Return to Idle unconditionally.
    pub fn reset(&mut self) {
        self.mode = OutputMode::Idle;
    }
}
