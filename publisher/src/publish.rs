//! Orchestration for a publish run.
//!
//! A run threads one [`CommandQueue`] through three stages:
//! [`Publisher::initialize`] schedules the web checkout if it is missing,
//! [`Publisher::generate`] writes the redirect page and schedules the generator
//! and the move of its output, and [`Publisher::publish`] hands the queue to
//! [`execute`], which prints it (dry run) or runs it in order (live).

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::core::command::CommandQueue;
use crate::core::config::PublishConfig;
use crate::core::mode::RunMode;
use crate::core::paths::SitePaths;
use crate::core::plan::{plan_checkout, plan_generate};
use crate::core::redirect::redirect_document;
use crate::io::config::{CONFIG_FILE, load_config};
use crate::io::runner::{CommandReport, CommandRunner, SystemRunner};
use crate::io::site::{web_dir_exists, write_redirect_page};

/// What to do when a queued command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing command and fail the run.
    Halt,
    /// Log the failure and run the rest of the queue.
    KeepGoing,
}

impl FailurePolicy {
    pub fn from_keep_going(keep_going: bool) -> Self {
        if keep_going {
            Self::KeepGoing
        } else {
            Self::Halt
        }
    }
}

/// One publish run over a fixed site layout.
#[derive(Debug, Clone)]
pub struct Publisher {
    mode: RunMode,
    paths: SitePaths,
    config: PublishConfig,
}

impl Publisher {
    pub fn new(mode: RunMode, paths: SitePaths, config: PublishConfig) -> Self {
        Self {
            mode,
            paths,
            config,
        }
    }

    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::from_keep_going(self.config.keep_going)
    }

    /// Schedule clone + checkout of the web directory if it does not exist.
    ///
    /// Only checks for the directory; the clone itself runs at publish time.
    #[instrument(skip_all)]
    pub fn initialize(&self, queue: CommandQueue) -> CommandQueue {
        let exists = web_dir_exists(&self.paths.web_dir);
        let before = queue.len();
        let queue = plan_checkout(queue, &self.paths, &self.config, exists);
        debug!(added = queue.len() - before, "initialize planned");
        queue
    }

    /// Write the redirect page (live only) and schedule generation + move.
    #[instrument(skip_all)]
    pub fn generate(&self, queue: CommandQueue) -> Result<CommandQueue> {
        self.write_redirect()?;
        Ok(plan_generate(queue, &self.paths, &self.config))
    }

    /// Print or execute the accumulated queue.
    pub fn publish<R: CommandRunner, W: Write>(
        &self,
        queue: CommandQueue,
        runner: &R,
        out: &mut W,
    ) -> Result<Vec<String>> {
        execute(queue, self.mode, self.failure_policy(), runner, out)
    }

    fn write_redirect(&self) -> Result<()> {
        if self.mode.is_dry() {
            debug!("dry run, skipping redirect page");
            return Ok(());
        }
        // A fresh checkout is only cloned at publish time.
        if !web_dir_exists(&self.paths.web_dir) {
            warn!(
                web_dir = %self.paths.web_dir.display(),
                "web checkout not present yet, skipping redirect page"
            );
            return Ok(());
        }
        let html = redirect_document(&self.config.redirect_target());
        write_redirect_page(&self.paths.redirect_page_path(), &html)
    }
}

/// Print or run `commands` in order.
///
/// Dry: writes each command line, trimmed, to `out` and returns no output.
/// Live: runs every command sequentially and returns their stdout lines in
/// order. A failing command stops the queue under [`FailurePolicy::Halt`].
#[instrument(skip_all, fields(mode = ?mode, policy = ?policy))]
pub fn execute<R: CommandRunner, W: Write>(
    commands: impl Into<CommandQueue>,
    mode: RunMode,
    policy: FailurePolicy,
    runner: &R,
    out: &mut W,
) -> Result<Vec<String>> {
    let queue = commands.into();

    if mode.is_dry() {
        for line in queue.command_lines() {
            writeln!(out, "{}", line.trim()).context("write command listing")?;
        }
        out.flush().context("flush command listing")?;
        return Ok(Vec::new());
    }

    let total = queue.len();
    let mut lines = Vec::new();
    for (index, command) in queue.iter().enumerate() {
        info!(step = index + 1, total, command = %command, "running command");
        let failure = match runner.run(command) {
            Ok(report) => {
                let stdout = report.stdout_lines();
                for line in &stdout {
                    debug!(%line, "command output");
                }
                lines.extend(stdout);
                failure_reason(&report)
            }
            Err(err) => Some(format!("{err:#}")),
        };

        let Some(reason) = failure else {
            continue;
        };
        match policy {
            FailurePolicy::Halt => {
                let skipped = total - index - 1;
                bail!("`{command}` failed: {reason} ({skipped} remaining command(s) not run)");
            }
            FailurePolicy::KeepGoing => {
                warn!(command = %command, %reason, "command failed, continuing");
            }
        }
    }

    info!(total, "command queue finished");
    Ok(lines)
}

fn failure_reason(report: &CommandReport) -> Option<String> {
    if report.success {
        return None;
    }
    let stderr = report.stderr.trim();
    let mut reason = if report.timed_out {
        "timed out".to_string()
    } else {
        match report.exit_code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    };
    if !stderr.is_empty() {
        reason.push_str(": ");
        reason.push_str(stderr);
    }
    Some(reason)
}

/// Run the whole workflow for the site sources in `source_dir`.
///
/// Loads `publish.toml` from `source_dir` (defaults if absent) and writes the
/// dry-run listing to `out`.
pub fn run_publish<W: Write>(source_dir: &Path, mode: RunMode, out: &mut W) -> Result<Vec<String>> {
    let config = load_config(&source_dir.join(CONFIG_FILE))?;
    let runner = SystemRunner {
        timeout: config.command_timeout(),
        output_limit_bytes: config.output_limit_bytes,
    };
    let publisher = Publisher::new(mode, SitePaths::new(source_dir), config);
    info!(
        ?mode,
        source_dir = %publisher.paths().source_dir.display(),
        web_dir = %publisher.paths().web_dir.display(),
        "publishing"
    );

    let queue = publisher.initialize(CommandQueue::new());
    let queue = publisher.generate(queue)?;
    publisher.publish(queue, &runner, out)
}
