pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::shell::SystemShell;
pub use core::{
    demo::{Demo, DemoSettings},
    holder::Holder,
};
pub use domain::{model::ShellOutcome, ports::ShellExecutor};
pub use utils::error::{HolderError, Result};
