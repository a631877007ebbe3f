//! Test-only helpers: a recording command runner and throwaway site layouts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::command::QueuedCommand;
use crate::core::paths::SitePaths;
use crate::io::config::CONFIG_FILE;
use crate::io::runner::{CommandReport, CommandRunner};

/// Successful report with the given stdout.
pub fn ok(stdout: &str) -> CommandReport {
    CommandReport {
        exit_code: Some(0),
        success: true,
        timed_out: false,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Failed report with exit `code` and the given stderr.
pub fn failed(code: i32, stderr: &str) -> CommandReport {
    CommandReport {
        exit_code: Some(code),
        success: false,
        timed_out: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Runner that records every command and replays scripted reports in order.
///
/// Once the script is exhausted every command succeeds with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    reports: RefCell<VecDeque<CommandReport>>,
    calls: RefCell<Vec<QueuedCommand>>,
}

impl RecordingRunner {
    pub fn with_reports(reports: Vec<CommandReport>) -> Self {
        Self {
            reports: RefCell::new(reports.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<QueuedCommand> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &QueuedCommand) -> Result<CommandReport> {
        self.calls.borrow_mut().push(command.clone());
        Ok(self.reports.borrow_mut().pop_front().unwrap_or_else(|| ok("")))
    }
}

/// Temporary `<root>/source` layout; `<root>/web` is created on demand.
pub struct TempSite {
    _temp: TempDir,
    root: PathBuf,
}

impl TempSite {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let root = temp.path().canonicalize().context("canonicalize tempdir")?;
        fs::create_dir_all(root.join("source")).context("create source dir")?;
        Ok(Self { _temp: temp, root })
    }

    pub fn paths(&self) -> SitePaths {
        SitePaths::new(self.root.join("source"))
    }

    pub fn create_web_dir(&self) -> Result<PathBuf> {
        let web = self.paths().web_dir;
        fs::create_dir_all(&web).with_context(|| format!("create {}", web.display()))?;
        Ok(web)
    }

    pub fn redirect_page(&self) -> PathBuf {
        self.paths().redirect_page_path()
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        let path = self.paths().source_dir.join(CONFIG_FILE);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}
