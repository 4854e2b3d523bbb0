/// What the executor observed about a finished shell invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOutcome {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ShellOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
