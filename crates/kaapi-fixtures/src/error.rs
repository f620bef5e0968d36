use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error at '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FixtureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// I/O failures surfaced through the csv writer map to `Io`.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        if source.is_io_error() {
            return Self::io(path, std::io::Error::from(source));
        }
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type FixtureResult<T> = Result<T, FixtureError>;
