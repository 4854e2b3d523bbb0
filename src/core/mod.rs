pub mod demo;
pub mod holder;

pub use crate::domain::model::ShellOutcome;
pub use crate::domain::ports::ShellExecutor;
pub use crate::utils::error::Result;
