use crate::utils::error::{HolderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Strings handed to a child process cannot carry interior NUL bytes.
pub fn validate_no_null_bytes(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(HolderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}
