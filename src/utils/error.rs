use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to start shell for `{command}`: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HolderError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HolderError::IoError(e) => format!("Could not write output: {}", e),
            HolderError::SpawnError { command, source } => {
                format!("Could not run command `{}`: {}", command, source)
            }
            HolderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HolderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_uses_flag_name() {
        let err = HolderError::InvalidConfigValueError {
            field: "command".to_string(),
            value: "a\0b".to_string(),
            reason: "Value contains null bytes".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Invalid --command: Value contains null bytes"
        );
    }

    #[test]
    fn test_spawn_error_message_names_command_and_cause() {
        let err = HolderError::SpawnError {
            command: "echo test".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Could not run command `echo test`: no shell"
        );
    }

    #[test]
    fn test_io_error_message() {
        let err = HolderError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(err.user_friendly_message(), "Could not write output: closed");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: HolderError = io.into();
        assert!(matches!(err, HolderError::IoError(_)));
        assert!(err.to_string().contains("closed"));
    }
}
