// Task storage error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Task {field} must not contain ';' or line breaks: {value:?}")]
    InvalidCharacter { field: &'static str, value: String },

    #[error("Malformed task record on line {line}: expected 3 fields, found {fields} in {content:?}")]
    MalformedRecord {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("No task at index {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
