//! Ask and confirm commands

use std::process::ExitCode;
use termline::Terminal;
use termline::ui::PromptSession;

const REQUIRED_MESSAGE: &str = "An answer is required";

/// Ask a free-form question and log the answer.
pub async fn ask(
    terminal: &Terminal,
    question: &str,
    default: Option<&str>,
    non_empty: bool,
) -> ExitCode {
    let mut session = PromptSession::new(question);
    if let Some(default) = default {
        session = session.with_default(default);
    }
    if non_empty {
        session = session.with_validator(|answer| {
            answer
                .trim()
                .is_empty()
                .then(|| REQUIRED_MESSAGE.to_string())
        });
    }

    match terminal.ask_async(session).await {
        Some(answer) => {
            terminal.success(&format!("Answer: {answer}"));
            ExitCode::SUCCESS
        }
        None => {
            tracing::debug!("prompt cancelled");
            ExitCode::FAILURE
        }
    }
}

/// Ask a yes/no question. Exit code 0 means yes.
pub async fn confirm(terminal: &Terminal, question: &str, default: bool) -> ExitCode {
    match terminal.ask_yes_no_async(question, default).await {
        Some(true) => ExitCode::SUCCESS,
        Some(false) | None => ExitCode::FAILURE,
    }
}
