//! CLI-level errors (wraps parse and domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DomainError, StructuralError};
use crate::parser::ParseError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<StructuralError> for CliError {
    fn from(err: StructuralError) -> Self {
        CliError::Domain(err.into())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => crate::exitcode::NOINPUT,
            CliError::Parse(_) => crate::exitcode::DATAERR,
            CliError::Domain(e) => match e {
                DomainError::Structural(_) => crate::exitcode::DATAERR,
                DomainError::AmbiguousImbalance { .. } => crate::exitcode::DATAERR,
                DomainError::NotFound(_) => crate::exitcode::SOFTWARE,
            },
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
        }
    }
}
