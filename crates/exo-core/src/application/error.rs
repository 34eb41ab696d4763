//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not domain
//! rules. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving, rendering, and writing templates.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No tier holds the requested template.
    #[error("template not found: {template_id} (searched: {searched})")]
    TemplateNotFound { template_id: String, searched: String },

    /// The template source is not valid Tera syntax (or not UTF-8).
    #[error("failed to parse template {template_id}: {reason}")]
    TemplateParse { template_id: String, reason: String },

    /// The template parsed but failed while substituting values.
    #[error("failed to render template {template_id}: {reason}")]
    TemplateExecution { template_id: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("adapter state lock poisoned")]
    StoreLockError,

    /// `.exo.yaml` could not be written or serialized.
    #[error("project config error at {path}: {reason}")]
    ProjectConfig { path: PathBuf, reason: String },

    /// A plugin or registry manifest is malformed.
    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// A registry or plugin with that name is already installed.
    #[error("{kind} '{name}' is already installed at {path}")]
    AlreadyInstalled {
        kind: &'static str,
        name: String,
        path: PathBuf,
    },

    /// A registry or plugin with that name is not installed.
    #[error("{kind} '{name}' is not installed")]
    NotInstalled { kind: &'static str, name: String },

    /// An external program (git, terraform, ...) failed or is missing.
    #[error("external command `{command}` failed: {reason}")]
    ExternalCommand { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { template_id, .. } => vec![
                format!("No tier provides {template_id}"),
                "Add it under ./templates/ to override per project".into(),
                "Or install a registry: exo template add <git-url>".into(),
            ],
            Self::TemplateParse { template_id, .. } => vec![
                format!("Check the Tera syntax of {template_id}"),
                "A project-local copy in ./templates/ shadows the bundled one".into(),
            ],
            Self::TemplateExecution { template_id, .. } => vec![
                format!("{template_id} referenced a value it could not render"),
                "Available variables: app_name, language, framework, port, db, provider, ci, monitoring, registry, license".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::ProjectConfig { path, .. } => vec![
                format!("Check {}", path.display()),
                "Re-create it with `exo init`".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
            ],
            Self::AlreadyInstalled { path, .. } => vec![
                format!("Remove it first: rm -rf {}", path.display()),
            ],
            Self::NotInstalled { kind, .. } => vec![
                format!("List installed entries with `exo {kind} list`"),
            ],
            Self::ExternalCommand { command, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", first_word(command)),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::NotInstalled { .. } => ErrorCategory::NotFound,
            Self::AlreadyInstalled { .. } => ErrorCategory::Validation,
            Self::ProjectConfig { .. } | Self::InvalidManifest { .. } => {
                ErrorCategory::Configuration
            }
            Self::TemplateParse { .. }
            | Self::TemplateExecution { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::ExternalCommand { .. } => ErrorCategory::Internal,
        }
    }
}

fn first_word(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}
