//! Subcommand implementations

pub mod ask;
pub mod demo;
pub mod load;

use crate::Commands;
use anyhow::Result;
use std::process::ExitCode;
use termline::Terminal;

/// Dispatch a parsed subcommand.
pub async fn run(terminal: &Terminal, command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Load { path } => load::load(terminal, &path),
        Commands::Ask {
            question,
            default,
            non_empty,
        } => Ok(ask::ask(terminal, &question, default.as_deref(), non_empty).await),
        Commands::Confirm {
            question,
            default_no,
        } => Ok(ask::confirm(terminal, &question, !default_no).await),
        Commands::Demo { step_ms } => {
            demo::demo(terminal, step_ms).await;
            Ok(ExitCode::SUCCESS)
        }
    }
}
