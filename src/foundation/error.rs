use std::path::PathBuf;

/// Convenience result type used across savefigs.
pub type SavefigsResult<T> = Result<T, SavefigsError>;

/// Top-level error taxonomy used by export APIs.
#[derive(thiserror::Error, Debug)]
pub enum SavefigsError {
    /// Invalid export configuration (directory, conflict mode, formats, config file).
    #[error("config error: {0}")]
    Config(String),

    /// An existing file blocks the write under [`crate::ConflictMode::Raise`].
    #[error("conflict error: file path {} already exists", .0.display())]
    Conflict(PathBuf),

    /// Two outputs of the same call resolve to one path under [`crate::ConflictMode::Raise`].
    #[error(
        "conflict error: file path {} is produced twice in this export (duplicate figure stems)",
        .0.display()
    )]
    DuplicateOutput(PathBuf),

    /// Invalid figure data or a figure source that cannot be loaded.
    #[error("figure error: {0}")]
    Figure(String),

    /// Failure reported by the graphics engine while saving, passed through unchanged.
    #[error(transparent)]
    Writer(#[from] anyhow::Error),
}

impl SavefigsError {
    /// Build a [`SavefigsError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SavefigsError::Figure`] value.
    pub fn figure(msg: impl Into<String>) -> Self {
        Self::Figure(msg.into())
    }

    /// Build a [`SavefigsError::Conflict`] value.
    pub fn conflict(path: impl Into<PathBuf>) -> Self {
        Self::Conflict(path.into())
    }

    /// Build a [`SavefigsError::DuplicateOutput`] value.
    pub fn duplicate_output(path: impl Into<PathBuf>) -> Self {
        Self::DuplicateOutput(path.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
