use crate::core::io::error::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Frame {index} not found; the trajectory holds {available} frame(s)")]
    FrameNotFound { index: usize, available: usize },

    #[error("Failed to write frame summary: {0}")]
    Summary(#[from] csv::Error),

    #[error("Invalid workflow configuration: {0}")]
    Config(String),
}

impl WorkflowError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
