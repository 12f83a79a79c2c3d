use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopoError {
    #[error("cannot open topology source {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read topology source: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("{pairs} topology pairs do not divide into records of {levels} levels")]
    MalformedInput { pairs: usize, levels: usize },

    #[error("cannot parse integer value in line: {line:?}")]
    MalformedValue { line: String },

    #[error("duplicate level {level:?} in record {record}")]
    DuplicateLevel { level: String, record: usize },

    #[error("unknown level name: {level:?}")]
    UnknownLevel { level: String },
}

pub type TopoResult<T> = Result<T, TopoError>;
