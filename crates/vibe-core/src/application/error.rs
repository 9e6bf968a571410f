//! Application layer errors.
//!
//! These errors represent failures talking to the outside world through
//! ports. Domain-level failures are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The AI context template must exist before a full run.
    #[error("AI context template not found at {path}")]
    ContextNotFound { path: PathBuf },

    /// The project config could not be serialized.
    #[error("Failed to serialize project config: {reason}")]
    Serialization { reason: String },

    /// The prompt channel failed (closed terminal, broken pipe).
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ContextNotFound { path } => vec![
                format!("Create the template first: {}", path.display()),
                "It may contain [PROJECT_NAME], [PROJECT_TYPE], [DOMAIN] and [STATUS]".into(),
                "Or run the quick setup, which skips a missing template".into(),
            ],
            Self::Prompt { .. } => vec![
                "The terminal input closed unexpectedly".into(),
                "Run the command again from an interactive shell".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ContextNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::Serialization { .. } | Self::Prompt { .. } => ErrorCategory::Internal,
        }
    }
}
