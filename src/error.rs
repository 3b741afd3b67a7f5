//! Error types for board construction and catalog access.

use thiserror::Error;

/// Board construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Two definitions share a display name, so their pairs could not be told apart.
    #[error("duplicate card display name: {0}")]
    DuplicateDisplayName(String),

    /// A decoded board breaks a board invariant.
    #[error("invalid board state: {0}")]
    InvalidState(String),
}

/// Catalog lookup failures.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure, timeout, or undecodable response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The catalog call succeeded but matched nothing.
    #[error("no images found for \"{topic}\"")]
    NoResults { topic: String },

    /// The catalog needs a topic and none (or only whitespace) was given.
    #[error("enter a topic to search for")]
    MissingTopic,

    /// A catalog entry came back without a usable image.
    #[error("catalog entry \"{0}\" has no image")]
    MissingImage(String),

    /// A concurrent detail lookup panicked or was cancelled.
    #[error("catalog lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Coarse classification of a [`SourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Recoverable: nothing matched the topic.
    NoResults,
    /// The catalog could not be reached or answered garbage.
    Network,
    /// The request itself was unusable (e.g. an empty topic).
    InvalidRequest,
}

impl SourceError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            SourceError::NoResults { .. } => FailureKind::NoResults,
            SourceError::MissingTopic => FailureKind::InvalidRequest,
            SourceError::Network(_)
            | SourceError::HttpStatus(_)
            | SourceError::MissingImage(_)
            | SourceError::Task(_) => FailureKind::Network,
        }
    }

    /// Shorthand for `kind() == FailureKind::NoResults`.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.kind() == FailureKind::NoResults
    }
}

/// Result alias for catalog operations.
pub type SourceResult<T> = Result<T, SourceError>;
