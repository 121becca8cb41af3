//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// Rendered parser message (already carries its own `error:` prefix)
    #[error("{0}")]
    Usage(String),

    #[error("command registered twice: {0}")]
    DuplicateCommand(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the process exit code for this error.
    ///
    /// Every failure maps to the same code; callers only distinguish pass/fail.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(_)
            | CliError::InvalidArgs(_)
            | CliError::Usage(_)
            | CliError::DuplicateCommand(_) => crate::exitcode::FAILURE,
        }
    }
}

/// Exit status for a finished run: `OK` on success, the error's code otherwise.
pub fn exit_code_for(result: &CliResult<()>) -> i32 {
    match result {
        Ok(()) => crate::exitcode::OK,
        Err(e) => e.exit_code(),
    }
}
