//! Demo command

use std::time::Duration;
use termline::{Severity, State, Terminal};

const STEPS: [&str; 3] = [
    "Resolving dependencies",
    "Compiling sources",
    "Writing artifacts",
];

/// Run a short animated task and print one line per severity.
pub async fn demo(terminal: &Terminal, step_ms: u64) {
    let step = Duration::from_millis(step_ms);

    terminal.animate("Preparing the demo");
    tokio::time::sleep(step).await;

    for message in STEPS {
        terminal.update_animation(message);
        terminal.debug(Severity::Info, &format!("step: {message}"));
        tokio::time::sleep(step).await;
    }

    terminal.stop_animation(State::Success, Some("Demo task finished"));

    terminal.log("Info lines use the neutral color");
    terminal.success("Success lines are green");
    terminal.warning("Warnings are tagged in the debug log");
    terminal.error("Errors are red");
    terminal.notice("Notices are highlighted in amber");
    terminal.wait_async().await;
}
