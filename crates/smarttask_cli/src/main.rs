//! SmartTask console entry point.
//!
//! # Responsibility
//! - Parse configuration, start optional file logging, run the menu shell.
//! - Map session failures to a non-zero exit code.

mod config;
mod error;
mod prompt;
mod shell;

use clap::Parser;
use log::info;
use smarttask_core::{core_version, init_logging, TaskService};
use std::io;
use std::process::ExitCode;

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::shell::Shell;

fn main() -> ExitCode {
    let config = ShellConfig::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("smarttask: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ShellConfig) -> ShellResult<()> {
    // Console output is the UI, so logs only go to files when asked for.
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).map_err(ShellError::Logging)?;
    }

    let registry = if config.no_samples {
        TaskService::new()
    } else {
        TaskService::with_sample_tasks()
    };
    info!(
        "event=shell_start module=cli status=ok version={} tasks={}",
        core_version(),
        registry.count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(registry, stdin.lock(), stdout.lock()).run()
}
