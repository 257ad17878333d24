//! termline CLI

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use termline::Terminal;
use termline_cli::{Cli, cmd};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with the spinner line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let terminal = Terminal::new(&cli.terminal_config());

    let code = match cmd::run(&terminal, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            terminal.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    };

    terminal.wait_async().await;
    code
}
