use crate::core::demo::{DemoSettings, DEFAULT_COMMAND, DEFAULT_NEW_VALUE};
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_null_bytes, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "holder-demo")]
#[command(about = "Store an integer, replace it, then hand a command to the system shell")]
pub struct CliConfig {
    /// Value passed to the setter
    #[arg(long, default_value_t = DEFAULT_NEW_VALUE, allow_hyphen_values = true)]
    pub new_value: i64,

    /// Command passed verbatim to the system shell
    #[arg(long, default_value = DEFAULT_COMMAND)]
    pub command: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            new_value: self.new_value,
            command: self.command.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_no_null_bytes("command", &self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_default_demo() {
        let config = CliConfig::try_parse_from(["holder-demo"]).unwrap();

        assert!(!config.verbose);
        assert!(config.validate().is_ok());
        assert_eq!(config.demo_settings(), DemoSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::try_parse_from([
            "holder-demo",
            "--new-value",
            "-3",
            "--command",
            "echo test",
            "-v",
        ])
        .unwrap();

        assert!(config.verbose);
        assert_eq!(
            config.demo_settings(),
            DemoSettings {
                new_value: -3,
                command: "echo test".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_non_integer_value() {
        assert!(CliConfig::try_parse_from(["holder-demo", "--new-value", "two"]).is_err());
    }

    #[test]
    fn test_validate_rejects_null_byte_command() {
        let config = CliConfig {
            new_value: 2,
            command: "echo\0oops".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
