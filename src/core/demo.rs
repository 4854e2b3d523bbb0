use crate::adapters::shell::SystemShell;
use crate::core::holder::Holder;
use crate::core::{Result, ShellExecutor};
use std::io::Write;

pub const DEFAULT_NEW_VALUE: i64 = 2;
pub const DEFAULT_COMMAND: &str = "echo 'Hello, World!'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub new_value: i64,
    pub command: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            new_value: DEFAULT_NEW_VALUE,
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

/// The entry routine: print the value, replace it, print it again, then run a shell command.
pub struct Demo<E: ShellExecutor = SystemShell> {
    holder: Holder<E>,
    settings: DemoSettings,
}

impl Demo<SystemShell> {
    pub fn new(settings: DemoSettings) -> Self {
        Self::with_executor(SystemShell::new(), settings)
    }
}

impl<E: ShellExecutor> Demo<E> {
    pub fn with_executor(executor: E, settings: DemoSettings) -> Self {
        Self {
            holder: Holder::with_executor(executor),
            settings,
        }
    }

    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        tracing::info!("Starting demo");

        writeln!(out, "{}", self.holder.get_value())?;
        self.holder.set_value(self.settings.new_value);
        writeln!(out, "{}", self.holder.get_value())?;

        // The child writes straight to the inherited descriptor.
        out.flush()?;

        self.holder
            .execute_system_command(&self.settings.command)
            .await;

        tracing::info!("Demo finished");
        Ok(())
    }

    pub fn holder(&self) -> &Holder<E> {
        &self.holder
    }
}
