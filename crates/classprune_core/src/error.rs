use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing and scanning source files.
///
/// Only [`ScanError::MalformedImport`] and [`ScanError::RootNotFound`] are
/// meant to stop a run; callers downgrade the others to warnings.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No package declaration on the first line of {path}")]
    MissingPackage { path: PathBuf },

    /// An import line still holding whitespace once keyword and terminator
    /// are stripped (`import static ...`, trailing comments).
    #[error("Malformed import at {path}:{line_number}: '{line}'")]
    MalformedImport { path: PathBuf, line_number: usize, line: String },

    #[error("Project root {path} does not exist or is not a directory")]
    RootNotFound { path: PathBuf },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Whether this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedImport { .. } | Self::RootNotFound { .. })
    }
}
