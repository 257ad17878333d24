//! Question/answer prompts
//!
//! A [`PromptSession`] describes one question: its text, an optional
//! default and an optional validator. It does no I/O. The engine renders
//! [`PromptSession::render`] and feeds each input line to
//! [`PromptSession::evaluate`] until an answer is accepted.

use std::fmt;

use super::theme::{Theme, stylize};

/// Validation callback: `Some(message)` rejects the answer and `message`
/// is shown as an error line before asking again.
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + 'static>;

/// Error shown when a yes/no answer is neither `y` nor `n`.
pub const YES_NO_HINT: &str = "Please specify \"Y\" or \"n\"";

/// Outcome of feeding one line of input to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    /// The (possibly defaulted) answer passed validation
    Accepted(String),
    /// Ask again after showing this message
    Retry(String),
}

/// One question waiting for an answer.
pub struct PromptSession {
    question: String,
    default_answer: Option<String>,
    validator: Option<Validator>,
}

impl PromptSession {
    /// Question with no default and no validator.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default_answer: None,
            validator: None,
        }
    }

    /// Answer used when the input line is empty; shown in brackets.
    pub fn with_default(mut self, answer: impl Into<String>) -> Self {
        self.default_answer = Some(answer.into());
        self
    }

    /// Check every answer; see [`Validator`].
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Yes/no question: appends `(Y/n)`, defaults to `Y` or `n`, and only
    /// accepts `y` or `n` in any case.
    pub fn yes_no(question: &str, default: bool) -> Self {
        Self::new(format!("{question} (Y/n)"))
            .with_default(if default { "Y" } else { "n" })
            .with_validator(|answer| {
                if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("n") {
                    None
                } else {
                    Some(YES_NO_HINT.to_string())
                }
            })
    }

    /// Question text as shown.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Default answer, if any.
    pub fn default_answer(&self) -> Option<&str> {
        self.default_answer.as_deref()
    }

    /// The question line, without a trailing newline: ` > question [ default ]: `.
    pub fn render(&self, theme: &Theme) -> String {
        let marker = stylize(theme.icons.prompt, theme.colors.neutral);
        match self.default_answer.as_deref().filter(|d| !d.is_empty()) {
            Some(default) => format!(
                " {marker} {}{}: ",
                self.question,
                stylize(&format!(" [ {default} ]"), theme.colors.neutral)
            ),
            None => format!(" {marker} {}: ", self.question),
        }
    }

    /// Substitute the default for empty input, then validate.
    pub fn evaluate(&self, input: &str) -> PromptStep {
        let answer = if input.is_empty() {
            self.default_answer.clone().unwrap_or_default()
        } else {
            input.to_string()
        };

        let rejection = self
            .validator
            .as_ref()
            .and_then(|validate| validate(&answer))
            .filter(|message| !message.is_empty());

        match rejection {
            Some(message) => PromptStep::Retry(message),
            None => PromptStep::Accepted(answer),
        }
    }
}

impl fmt::Debug for PromptSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSession")
            .field("question", &self.question)
            .field("default_answer", &self.default_answer)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// Interpret an accepted yes/no answer.
pub fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}
