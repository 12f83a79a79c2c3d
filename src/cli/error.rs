//! CLI-level errors (wraps core errors)

use thiserror::Error;

use crate::errors::TopoError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Topo(#[from] TopoError),

    #[error("cannot serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Json(_) => exitcode::SOFTWARE,
            CliError::Topo(e) => match e {
                TopoError::SourceUnavailable { .. } => exitcode::NOINPUT,
                TopoError::ReadError(_) => exitcode::IOERR,
                TopoError::MalformedInput { .. }
                | TopoError::MalformedValue { .. }
                | TopoError::DuplicateLevel { .. }
                | TopoError::UnknownLevel { .. } => exitcode::DATAERR,
            },
        }
    }
}
