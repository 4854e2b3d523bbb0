use crate::domain::model::ShellOutcome;
use crate::domain::ports::ShellExecutor;
use crate::utils::error::{HolderError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

#[cfg(windows)]
const DEFAULT_SHELL: (&str, &str) = ("cmd", "/C");
#[cfg(not(windows))]
const DEFAULT_SHELL: (&str, &str) = ("sh", "-c");

/// Runs commands through the host command interpreter with inherited stdio.
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
    command_flag: String,
}

impl SystemShell {
    pub fn new() -> Self {
        Self::with_shell(DEFAULT_SHELL.0, DEFAULT_SHELL.1)
    }

    /// Uses `program <command_flag> <command>` instead of the platform shell.
    pub fn with_shell(program: impl Into<String>, command_flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            command_flag: command_flag.into(),
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

// cmd.exe does not undo the MSVCRT quoting applied by `arg`, so the command line goes in as-is.
#[cfg(windows)]
fn append_command(shell: &mut Command, command: &str) {
    shell.raw_arg(command);
}

#[cfg(not(windows))]
fn append_command(shell: &mut Command, command: &str) {
    shell.arg(command);
}

#[async_trait]
impl ShellExecutor for SystemShell {
    async fn run(&self, command: &str) -> Result<ShellOutcome> {
        tracing::debug!("Running `{} {} {}`", self.program, self.command_flag, command);

        let mut shell = Command::new(&self.program);
        shell.arg(&self.command_flag);
        append_command(&mut shell, command);

        let status = shell
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| HolderError::SpawnError {
                command: command.to_string(),
                source,
            })?;

        Ok(ShellOutcome {
            exit_code: status.code(),
        })
    }
}
