//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `exo-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Detection, ProjectConfig, SourceTier, TemplateData};
use crate::error::ExoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `exo_adapters::filesystem::LocalFilesystem` (production)
/// - `exo_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ExoResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ExoResult<()>;

    /// Read a file as UTF-8. `Ok(None)` when the file does not exist.
    fn read_file(&self, path: &Path) -> ExoResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for one template storage tier.
///
/// Implemented by:
/// - `exo_adapters::template_source::BundledSource` (compiled-in)
/// - `exo_adapters::template_source::DirectorySource` (project-local, plugins)
/// - `exo_adapters::template_source::RegistryCacheSource` (installed registries)
/// - `exo_adapters::template_source::MemorySource` (testing)
pub trait TemplateSource: Send + Sync {
    fn tier(&self) -> SourceTier;

    /// Read the template stored under `relative` (forward-slash path, logical
    /// prefix already stripped). `Ok(None)` when this tier does not have it.
    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>>;
}

/// Port for the templating engine.
///
/// Implemented by:
/// - `exo_adapters::renderer::TeraRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Parse `source` and execute it against `data`.
    ///
    /// `name` identifies the template in error messages.
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> ExoResult<String>;
}

/// Port for the persisted `.exo.yaml` project record.
///
/// Implemented by:
/// - `exo_adapters::config_store::YamlConfigStore`
#[cfg_attr(test, mockall::automock)]
pub trait ProjectConfigStore: Send + Sync {
    /// `Ok(None)` when the project has not been initialized.
    fn load(&self, project_root: &Path) -> ExoResult<Option<ProjectConfig>>;

    fn save(&self, project_root: &Path, config: &ProjectConfig) -> ExoResult<()>;
}

/// Port for language/framework auto-detection.
///
/// Implemented by:
/// - `exo_adapters::detector::FsStackDetector`
#[cfg_attr(test, mockall::automock)]
pub trait StackDetector: Send + Sync {
    fn detect(&self, project_root: &Path) -> Detection;
}
