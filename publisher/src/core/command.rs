//! Queued external commands and the ordered queue that holds them.

use std::fmt;
use std::path::{Path, PathBuf};

/// One external command: program, arguments, and an optional working directory.
///
/// The [`Display`](fmt::Display) form is the shell line shown in dry-run mode,
/// e.g. `cd /srv/site/en; sculpin generate --url=/en --env=prod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedCommand {
    pub workdir: Option<PathBuf>,
    pub program: String,
    pub args: Vec<String>,
}

impl QueuedCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            workdir: None,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument using its display form.
    pub fn path_arg(self, path: &Path) -> Self {
        let rendered = path.display().to_string();
        self.arg(rendered)
    }

    /// Run the command with `dir` as working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Shell rendering of this command.
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        if let Some(dir) = &self.workdir {
            line.push_str(&format!("cd {}; ", dir.display()));
        }
        line.push_str(&self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for QueuedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Ordered list of commands accumulated by the pipeline stages.
///
/// Insertion order is execution order. No deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    commands: Vec<QueuedCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: QueuedCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueuedCommand> {
        self.commands.iter()
    }

    /// Shell renderings, in queue order.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands.iter().map(QueuedCommand::command_line).collect()
    }
}

impl From<QueuedCommand> for CommandQueue {
    fn from(command: QueuedCommand) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

impl From<Vec<QueuedCommand>> for CommandQueue {
    fn from(commands: Vec<QueuedCommand>) -> Self {
        Self { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_command() {
        let cmd = QueuedCommand::new("git")
            .arg("clone")
            .arg("git@example.com:site.git")
            .path_arg(Path::new("/srv/web"));
        assert_eq!(
            cmd.command_line(),
            "git clone git@example.com:site.git /srv/web"
        );
    }

    #[test]
    fn renders_workdir_as_cd_prefix() {
        let cmd = QueuedCommand::new("git")
            .arg("checkout")
            .arg("gh-pages")
            .in_dir("/srv/web");
        assert_eq!(cmd.to_string(), "cd /srv/web; git checkout gh-pages");
    }

    #[test]
    fn single_command_becomes_one_element_queue() {
        let queue = CommandQueue::from(QueuedCommand::new("true"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.command_lines(), vec!["true".to_string()]);
    }

    #[test]
    fn queue_preserves_insertion_order() {
        let mut queue = CommandQueue::new();
        queue.push(QueuedCommand::new("b"));
        queue.push(QueuedCommand::new("a"));
        queue.push(QueuedCommand::new("b"));
        assert_eq!(queue.command_lines(), vec!["b", "a", "b"]);
    }
}
