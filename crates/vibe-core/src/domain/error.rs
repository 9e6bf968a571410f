// ============================================================================
// domain/error.rs
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The questionnaire itself never fails on malformed input (it degrades to
/// defaults), so these only surface when callers parse labels directly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownValue { kind, value } => vec![
                format!("'{}' is not a recognised {}", value, kind),
                "Pick one of the numbered options shown in the menu".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownValue { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
