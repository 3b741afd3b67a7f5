//! User-facing notifications.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, FailureKind, SourceError};

/// How loudly to show a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Recoverable; the player can just try something else.
    Warning,
    /// Something outside the player's control failed.
    Error,
}

/// A dismissable message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Notification shown when a catalog returns no cards at all.
    #[must_use]
    pub fn no_cards() -> Self {
        Self::warning("the catalog returned no cards")
    }
}

impl From<&SourceError> for Notification {
    fn from(err: &SourceError) -> Self {
        match err.kind() {
            FailureKind::NoResults | FailureKind::InvalidRequest => Self::warning(err.to_string()),
            FailureKind::Network => Self::error(format!("could not load cards: {err}")),
        }
    }
}

impl From<&BoardError> for Notification {
    fn from(err: &BoardError) -> Self {
        Self::error(format!("could not build the board: {err}"))
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_is_warning() {
        let err = SourceError::NoResults { topic: "zebras".into() };
        let note = Notification::from(&err);

        assert_eq!(note.severity, Severity::Warning);
        assert_eq!(note.message, "no images found for \"zebras\"");
    }

    #[test]
    fn test_missing_topic_is_warning() {
        let note = Notification::from(&SourceError::MissingTopic);
        assert_eq!(note.severity, Severity::Warning);
    }

    #[test]
    fn test_http_failure_is_error() {
        let err = SourceError::HttpStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        let note = Notification::from(&err);

        assert_eq!(note.severity, Severity::Error);
        assert!(note.message.starts_with("could not load cards"));
    }

    #[test]
    fn test_board_error_is_error() {
        let note = Notification::from(&BoardError::DuplicateDisplayName("owl".into()));
        assert_eq!(note.severity, Severity::Error);
        assert!(note.to_string().contains("owl"));
    }
}
