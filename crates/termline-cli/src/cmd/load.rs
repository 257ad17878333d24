//! Load command

use crate::app_config::{AppConfig, AppKind, load_config};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use termline::Terminal;

/// Load the config at `path` (relative to the current directory) and
/// summarize it.
pub fn load(terminal: &Terminal, path: &Path) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let path = cwd.join(path);

    match load_config(terminal, &path) {
        Ok(config) => {
            for line in summary(&config) {
                terminal.log(&line);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn summary(config: &AppConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", config.name.as_deref().unwrap_or("(unnamed)")),
        format!("Kind: {}", config.kind.as_str()),
    ];
    if config.kind == AppKind::Node {
        lines.push(format!("Auto restart: {}", config.node.auto_restart));
        if !config.node.resource_directories.is_empty() {
            let dirs: Vec<String> = config
                .node
                .resource_directories
                .iter()
                .map(|d| d.display().to_string())
                .collect();
            lines.push(format!("Resources: {}", dirs.join(", ")));
        }
    }
    lines
}
