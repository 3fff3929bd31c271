//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot determine the global config directory")]
    NoConfigDir,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Config(_) | CliError::NoConfigDir => crate::exitcode::CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_parse_error_when_mapping_exit_code_then_dataerr() {
        let err = CliError::from(DomainError::UnknownTag("red".into()));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(err.to_string(), "unrecognized tag: red");
    }

    #[test]
    fn given_missing_config_dir_when_mapping_exit_code_then_config() {
        assert_eq!(CliError::NoConfigDir.exit_code(), crate::exitcode::CONFIG);
    }
}
