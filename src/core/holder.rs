use crate::adapters::shell::SystemShell;
use crate::core::ShellExecutor;

pub const INITIAL_VALUE: i64 = 1;

/// A single mutable integer, plus a pass-through to the host shell.
///
/// `execute_system_command` does no sanitization or escaping: whatever string it
/// is given runs with the full privileges of this process.
#[derive(Debug)]
pub struct Holder<E: ShellExecutor = SystemShell> {
    value: i64,
    executor: E,
}

impl Holder<SystemShell> {
    pub fn new() -> Self {
        Self::with_executor(SystemShell::new())
    }
}

impl Default for Holder<SystemShell> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ShellExecutor> Holder<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            value: INITIAL_VALUE,
            executor,
        }
    }

    pub fn get_value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        tracing::debug!("Value {} -> {}", self.value, value);
        self.value = value;
    }

    /// Runs `command` through the shell and waits for it. The outcome is discarded:
    /// failures to start and non-zero exits are only logged at debug level.
    pub async fn execute_system_command(&self, command: &str) {
        match self.executor.run(command).await {
            Ok(outcome) if outcome.success() => {
                tracing::debug!("Shell command finished: {}", command);
            }
            Ok(outcome) => {
                tracing::debug!(
                    "Shell command exited with {:?}: {}",
                    outcome.exit_code,
                    command
                );
            }
            Err(e) => tracing::debug!("{}", e.user_friendly_message()),
        }
    }
}
