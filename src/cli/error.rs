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

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => crate::exitcode::SOFTWARE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NodeKind, Phase};

    #[test]
    fn given_domain_error_when_mapping_then_software_exit() {
        let err: CliError = DomainError::InvalidOperation {
            operation: "add_child",
            kind: NodeKind::Leaf,
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);

        let err: CliError = DomainError::InvalidTransition {
            from: Phase::Stopping,
            to: Phase::Splitting,
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_config_error_when_mapping_then_config_exit() {
        let err: CliError = ConfigError::NotFound("missing.toml".into()).into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert!(err.to_string().contains("missing.toml"));
    }
}
