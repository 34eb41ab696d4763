// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (collected into per-file outcomes)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("invalid template identifier '{id}': {reason}")]
    InvalidTemplateId { id: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("'{generation_type}' requires a {option} (pass --{flag})")]
    MissingRequiredOption {
        generation_type: String,
        option: &'static str,
        flag: &'static str,
    },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown generation type '{name}'")]
    UnknownGenerationType { name: String, available: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidValue {
                field, expected, ..
            } => vec![
                format!("Valid values for {field}: {expected}"),
                "Use --help for usage information".into(),
            ],
            Self::InvalidAppName { .. } => vec![
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-service, billing_api, web2".into(),
            ],
            Self::MissingRequiredOption { flag, .. } => vec![
                format!("Pass --{flag} on the command line"),
                "Or set it once with `exo init` so it is stored in .exo.yaml".into(),
            ],
            Self::UnknownGenerationType { available, .. } => {
                let mut out = vec!["Available generation types:".to_string()];
                out.extend(available.iter().map(|name| format!("  • {name}")));
                out.push("Run `exo list` for descriptions".into());
                out
            }
            _ => vec!["See `exo --help` for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidValue { .. }
            | Self::InvalidAppName { .. }
            | Self::MissingRequiredOption { .. }
            | Self::UnknownGenerationType { .. } => ErrorCategory::Validation,
            Self::InvalidTemplateId { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_lists_available_names() {
        let err = DomainError::UnknownGenerationType {
            name: "kubernetes".into(),
            available: vec!["docker".into(), "k8s".into()],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("k8s")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_option_names_the_flag() {
        let err = DomainError::MissingRequiredOption {
            generation_type: "infra".into(),
            option: "cloud provider",
            flag: "provider",
        };
        assert!(err.to_string().contains("--provider"));
        assert!(err.suggestions()[0].contains("--provider"));
    }
}
