use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a load. No variant carries a partial matrix.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A token could not be read as a number.
    #[error("line {line}: '{token}' is not a number")]
    Parse { line: usize, token: String },

    /// A row's token count differs from the first row's, or a split-mode
    /// row is too narrow to hold a feature and a target.
    #[error("line {line}: expected {expected} columns but found {actual}")]
    Format {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// 1-based input line the error refers to, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Parse { line, .. } | LoadError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}
