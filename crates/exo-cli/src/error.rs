//! Error handling for the exo CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use exo_core::error::{ErrorCategory as CoreCategory, ExoError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Every failure a command can end with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// `exo add <tool>` with a tool outside the supported set.
    #[error("Unknown tool '{tool}'")]
    UnknownTool {
        tool: String,
        available: &'static [&'static str],
    },

    /// At least one file of a generation run failed.
    #[error("{generation_type}: {} file(s) failed", failures.len())]
    GenerationFailed {
        generation_type: String,
        failures: Vec<String>,
    },

    /// The command needs `.exo.yaml` and there is none.
    #[error("No project configuration at {}", path.display())]
    NotInitialized { path: PathBuf },

    /// External validators reported problems.
    #[error("{count} validation check(s) failed")]
    ValidationFailed { count: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `exo-core` or an adapter.
    #[error(transparent)]
    Core(#[from] ExoError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::UnknownTool { available, .. } => {
                let mut out = vec!["Available tools:".to_string()];
                out.extend(available.iter().map(|t| format!("  • {t}")));
                out.push("For any other asset use `exo gen <type>` (see `exo list`)".into());
                out
            }

            Self::GenerationFailed { failures, .. } => {
                let mut out: Vec<String> = failures.iter().map(|f| format!("  • {f}")).collect();
                out.push("Files that were written successfully are kept".into());
                out.push("Fix the cause and re-run; existing files are skipped".into());
                out
            }

            Self::NotInitialized { .. } => vec![
                "Run `exo init` first".into(),
                "Or pass every value explicitly with flags".into(),
            ],

            Self::ValidationFailed { .. } => vec![
                "See the tool output above for details".into(),
                "Regenerate with `exo gen <type> --force` after fixing inputs".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the active file with `exo config path`".into(),
                "Environment overrides use the EXO_ prefix, e.g. EXO_PATHS__HOME".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                format!("Reinstall with: cargo install exo-cli --features {feature}"),
                "Or use --non-interactive with flags".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::UnknownTool { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::NotInitialized { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::GenerationFailed { .. } | Self::ValidationFailed { .. } | Self::IoError { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!(
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            for cause in self.causes() {
                output.push_str(&format!("\n  {} {}\n", "→".dimmed(), cause.dimmed()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  Caused by: {cause}\n"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, serde_json::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::InvalidInput {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use exo_core::{application::ApplicationError, domain::DomainError};

    #[test]
    fn unknown_tool_lists_available() {
        let err = CliError::UnknownTool {
            tool: "terraform".into(),
            available: &["monitoring", "infra"],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("infra")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn generation_failure_enumerates_files() {
        let err = CliError::GenerationFailed {
            generation_type: "helm".into(),
            failures: vec!["charts/x/Chart.yaml: permission denied".into()],
        };
        assert_eq!(err.to_string(), "helm: 1 file(s) failed");
        assert!(err.suggestions()[0].contains("Chart.yaml"));
        assert_eq!(err.exit_code(), 1);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn missing_required_option_is_user_error() {
        let err = CliError::from(ExoError::from(DomainError::MissingRequiredOption {
            generation_type: "infra".into(),
            option: "cloud provider",
            flag: "provider",
        }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_type_is_user_error() {
        let err = CliError::from(ExoError::from(DomainError::UnknownGenerationType {
            name: "terraform".into(),
            available: vec!["infra".into()],
        }));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("terraform"));
    }

    #[test]
    fn template_not_found_exits_three() {
        let err = CliError::from(ExoError::from(ApplicationError::TemplateNotFound {
            template_id: "templates/x.tmpl".into(),
            searched: "bundled".into(),
        }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn not_initialized_exits_three() {
        let err = CliError::NotInitialized {
            path: PathBuf::from("/w/.exo.yaml"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn configuration_exits_four() {
        let core = CliError::from(ExoError::Configuration {
            message: "no home".into(),
        });
        let cli = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(core.exit_code(), 4);
        assert_eq!(cli.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        assert_eq!(
            CliError::from(io::Error::other("e")).exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::NotInitialized {
            path: PathBuf::from("/w/.exo.yaml"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_causes() {
        let err = CliError::IoError {
            message: "writing Dockerfile".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }
}
