//! termline - command line front end
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Loads application configuration behind a spinner, asks questions and
//! demonstrates the terminal engine. All output goes through one
//! [`termline::Terminal`].

pub mod app_config;
pub mod cmd;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use termline::TerminalConfig;

/// Default application configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "termline.toml";

#[derive(Debug, Parser)]
#[command(name = "termline")]
#[command(author, version, about = "termline - spinners, prompts and debug logs for the terminal")]
pub struct Cli {
    /// Mirror every log line into the debug log
    #[arg(
        long,
        global = true,
        env = "TERMLINE_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Directory for debug-log-<n>.txt files
    #[arg(long, global = true, env = "TERMLINE_DEBUG_DIR", default_value = "debug")]
    pub debug_dir: PathBuf,

    /// Use a 24-hour clock in timestamps
    #[arg(long, global = true)]
    pub military_time: bool,

    /// Prefix console log lines with the time of day
    #[arg(long, global = true)]
    pub timestamps: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Terminal settings selected by the global flags.
    pub fn terminal_config(&self) -> TerminalConfig {
        TerminalConfig::default()
            .with_debug_directory(self.debug_dir.clone())
            .with_debug_enabled(self.debug)
            .with_military_time(self.military_time)
            .with_timestamps(self.timestamps)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and validate an application configuration file
    Load {
        /// Config file (.toml or .json)
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
    /// Ask a question and print the answer
    Ask {
        /// Question text
        question: String,
        /// Answer used when the input is empty
        #[arg(long)]
        default: Option<String>,
        /// Reject empty answers
        #[arg(long)]
        non_empty: bool,
    },
    /// Ask a yes/no question; exits 0 for yes and 1 for no
    Confirm {
        /// Question text
        question: String,
        /// Make "no" the default answer
        #[arg(long)]
        default_no: bool,
    },
    /// Show a short animated task with every kind of log line
    Demo {
        /// Milliseconds per demo step
        #[arg(long, default_value_t = 400)]
        step_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["termline", "load"]).unwrap();
        assert!(matches!(cli.command, Commands::Load { ref path } if path == &PathBuf::from("termline.toml")));
        let config = cli.terminal_config();
        assert_eq!(config.debug_directory, PathBuf::from("debug"));
        assert!(!config.timestamps_enabled);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "termline",
            "confirm",
            "Continue?",
            "--debug",
            "--debug-dir",
            "/tmp/logs",
            "--military-time",
        ])
        .unwrap();
        let config = cli.terminal_config();
        assert!(config.debug_enabled);
        assert!(config.debug_military_time);
        assert_eq!(config.debug_directory, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
