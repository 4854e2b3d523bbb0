use crate::domain::model::ShellOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ShellExecutor: Send + Sync {
    /// Hands `command` to the host command interpreter and waits for it to finish.
    async fn run(&self, command: &str) -> Result<ShellOutcome>;
}
