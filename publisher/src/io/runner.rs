//! Command runner abstraction.
//!
//! The [`CommandRunner`] trait decouples the publish stage from actual process
//! spawning. Tests use scripted runners that record what would have run.

use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::command::QueuedCommand;
use crate::io::process::run_command;

/// Result of running one queued command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub timed_out: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandReport {
    /// Stdout split into lines, without line terminators.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lines().map(str::to_string).collect()
    }
}

/// Abstraction over how queued commands are executed.
pub trait CommandRunner {
    /// Run `command` to completion. `Err` means it could not be run at all.
    fn run(&self, command: &QueuedCommand) -> Result<CommandReport>;
}

/// Runner that spawns real processes, program + argv, no intermediate shell.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    pub timeout: Option<Duration>,
    pub output_limit_bytes: usize,
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(program = %command.program))]
    fn run(&self, command: &QueuedCommand) -> Result<CommandReport> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.workdir {
            cmd.current_dir(dir);
        }

        let output = run_command(cmd, self.timeout, self.output_limit_bytes)
            .with_context(|| format!("run `{command}`"))?;
        debug!(exit_code = ?output.status.code(), "queued command finished");

        Ok(CommandReport {
            exit_code: output.status.code(),
            success: output.success(),
            timed_out: output.timed_out,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
