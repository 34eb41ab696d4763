//! Generation manifests and per-file outcomes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DomainError, RelativePath, TemplateId};
use crate::domain::template_data::TemplateData;

/// One template rendered to one output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapping {
    pub template: TemplateId,
    pub output: RelativePath,
}

impl FileMapping {
    pub fn new(template: impl AsRef<str>, output: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Ok(Self {
            template: TemplateId::new(template)?,
            output: RelativePath::try_new(output)?,
        })
    }
}

/// What a generation type does when one of its files fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Render every file and collect the failures.
    #[default]
    Continue,
    /// Stop after the first failed file.
    StopOnFirstError,
}

impl FailurePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::StopOnFirstError => "stop-on-first-error",
        }
    }
}

/// Options a generation type cannot run without.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub provider: bool,
    pub database: bool,
}

impl Requirements {
    pub const NONE: Self = Self {
        provider: false,
        database: false,
    };

    /// Fail fast when a required option is unset.
    pub fn check(&self, generation_type: &str, data: &TemplateData) -> Result<(), DomainError> {
        if self.provider && data.provider.is_none() {
            return Err(DomainError::MissingRequiredOption {
                generation_type: generation_type.to_string(),
                option: "cloud provider",
                flag: "provider",
            });
        }
        if self.database && data.db.is_none() {
            return Err(DomainError::MissingRequiredOption {
                generation_type: generation_type.to_string(),
                option: "database",
                flag: "db",
            });
        }
        Ok(())
    }
}

// ── Write policy & outcomes ──────────────────────────────────────────────────

/// How a rendered file may touch the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritePolicy {
    pub dry_run: bool,
    pub force: bool,
}

impl WritePolicy {
    pub const fn new(dry_run: bool, force: bool) -> Self {
        Self { dry_run, force }
    }
}

/// Result of rendering a single file to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteOutcome {
    Written,
    SkippedExists,
    SkippedDryRun,
}

/// Per-file status inside a [`GenerationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileStatus {
    Written,
    SkippedExists,
    SkippedDryRun,
    Failed { error: String },
}

impl From<WriteOutcome> for FileStatus {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Written => Self::Written,
            WriteOutcome::SkippedExists => Self::SkippedExists,
            WriteOutcome::SkippedDryRun => Self::SkippedDryRun,
        }
    }
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::SkippedExists => "skipped (exists)",
            Self::SkippedDryRun => "skipped (dry run)",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Output path relative to the generation root.
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Ordered per-file outcomes of one generation type run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub generation_type: String,
    pub out_dir: PathBuf,
    pub files: Vec<FileOutcome>,
    /// Set when a stop-on-first-error type aborted the batch.
    pub stopped_early: bool,
}

impl GenerationResult {
    pub fn new(generation_type: impl Into<String>, out_dir: impl AsRef<Path>) -> Self {
        Self {
            generation_type: generation_type.into(),
            out_dir: out_dir.as_ref().to_path_buf(),
            files: Vec::new(),
            stopped_early: false,
        }
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, status: FileStatus) {
        self.files.push(FileOutcome {
            path: path.into(),
            status,
        });
    }

    /// `true` iff no file failed.
    pub fn is_success(&self) -> bool {
        !self.files.iter().any(|f| f.status.is_failed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.status.is_failed())
    }

    pub fn count(&self, status: &FileStatus) -> usize {
        self.files.iter().filter(|f| &f.status == status).count()
    }
}
