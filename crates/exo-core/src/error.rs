//! Unified error handling for Exo Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Exo Core operations.
#[derive(Debug, Error, Clone)]
pub enum ExoError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (resolution, rendering, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ExoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Exo".into(),
                "Please report this issue at: https://github.com/exo-dev/exo/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ExoResult<T> = Result<T, ExoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn template_not_found_is_not_found() {
        let err: ExoError = ApplicationError::TemplateNotFound {
            template_id: "templates/k8s/x.tmpl".into(),
            searched: "bundled".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("templates/k8s/x.tmpl"));
    }

    #[test]
    fn missing_option_is_validation() {
        let err: ExoError = DomainError::MissingRequiredOption {
            generation_type: "db".into(),
            option: "database",
            flag: "db",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_error_keeps_path() {
        let err: ExoError = ApplicationError::FilesystemError {
            path: PathBuf::from("/ro/Dockerfile"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("/ro/Dockerfile"));
        assert!(!err.suggestions().is_empty());
    }
}
