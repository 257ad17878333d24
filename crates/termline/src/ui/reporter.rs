//! Reporter trait for dependency injection
//!
//! This trait allows application logic (config loaders, build steps) to
//! report progress and status without being coupled to a concrete
//! terminal. [`Terminal`](super::Terminal) implements it; tests use a
//! recording implementation.

use crate::severity::State;

/// Progress and status sink for application code.
pub trait Reporter: Send + Sync {
    /// Start a spinner for a long-running step.
    fn animate(&self, message: &str);

    /// Change the message of the running spinner.
    fn update_animation(&self, message: &str);

    /// Finish the running spinner with a final state and message.
    fn stop_animation(&self, state: State, message: Option<&str>);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a success message.
    fn success(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// Log an error message.
    fn error(&self, msg: &str);

    /// Log a highlighted notice.
    fn notice(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn animate(&self, message: &str) {
        (**self).animate(message);
    }
    fn update_animation(&self, message: &str) {
        (**self).update_animation(message);
    }
    fn stop_animation(&self, state: State, message: Option<&str>) {
        (**self).stop_animation(state, message);
    }
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
    fn success(&self, msg: &str) {
        (**self).success(msg);
    }
    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }
    fn error(&self, msg: &str) {
        (**self).error(msg);
    }
    fn notice(&self, msg: &str) {
        (**self).notice(msg);
    }
}
