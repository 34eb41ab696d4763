//! Plugin generation types from `~/.exo/plugins/<name>/plugin.toml`.
//!
//! # `plugin.toml` format
//!
//! ```toml
//! [plugin]
//! name = "fastapi"              # defaults to the directory name
//! description = "FastAPI service skeleton"
//! failure_policy = "continue"   # or "stop-on-first-error"
//! requires_provider = false
//! requires_database = false
//!
//! [[files]]
//! template = "main.py.tmpl"     # relative to the plugin directory
//! output = "app/main.py"
//! ```
//!
//! Plugin templates resolve through the plugin tier as
//! `templates/<plugin-dir>/<template>`, so a project-local copy at the same
//! path overrides them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use exo_core::{
    application::ApplicationError,
    domain::{DomainError, FailurePolicy, FileMapping, Generator, Requirements, TemplateData},
    error::ExoResult,
};

use crate::filesystem::map_io_error;

pub const MANIFEST_FILE_NAME: &str = "plugin.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Clone)]
pub struct PluginManifest {
    pub plugin: PluginSection,
    #[serde(default)]
    pub files: Vec<PluginFile>,
}

/// `[plugin]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PluginSection {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub requires_provider: bool,
    #[serde(default)]
    pub requires_database: bool,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct PluginFile {
    pub template: String,
    pub output: String,
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// A generation type contributed by a plugin directory.
#[derive(Debug, Clone)]
pub struct PluginGenerator {
    name: String,
    description: String,
    policy: FailurePolicy,
    requirements: Requirements,
    mappings: Vec<FileMapping>,
    dir: PathBuf,
}

impl PluginGenerator {
    /// Parse `<dir>/plugin.toml`.
    #[instrument(fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> ExoResult<Self> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let raw = fs::read_to_string(&manifest_path)
            .map_err(|e| map_io_error(&manifest_path, e, "read plugin manifest"))?;

        let manifest: PluginManifest =
            toml::from_str(&raw).map_err(|e| ApplicationError::InvalidManifest {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_manifest(&dir_name, manifest, dir).map_err(|e| {
            ApplicationError::InvalidManifest {
                path: manifest_path,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn from_manifest(
        dir_name: &str,
        manifest: PluginManifest,
        dir: &Path,
    ) -> Result<Self, DomainError> {
        if manifest.files.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "files",
                value: String::new(),
                expected: "at least one [[files]] entry",
            });
        }

        let mappings = manifest
            .files
            .iter()
            .map(|file| FileMapping::new(format!("{dir_name}/{}", file.template), &file.output))
            .collect::<Result<Vec<_>, _>>()?;

        let name = manifest
            .plugin
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| dir_name.to_string());

        Ok(Self {
            name,
            description: manifest.plugin.description,
            policy: manifest.plugin.failure_policy,
            requirements: Requirements {
                provider: manifest.plugin.requires_provider,
                database: manifest.plugin.requires_database,
            },
            mappings,
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Generator for PluginGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn requirements(&self) -> Requirements {
        self.requirements
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    fn manifest(&self, _data: &TemplateData) -> Result<Vec<FileMapping>, DomainError> {
        Ok(self.mappings.clone())
    }
}

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Load every valid plugin under `plugins_dir`, sorted by directory name.
///
/// Directories without `plugin.toml` are template-only plugins and are
/// skipped quietly; invalid manifests are skipped with a warning.
#[instrument(fields(dir = %plugins_dir.display()))]
pub fn load_plugins(plugins_dir: &Path) -> Vec<PluginGenerator> {
    let Ok(entries) = fs::read_dir(plugins_dir) else {
        debug!("No plugins directory");
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.join(MANIFEST_FILE_NAME).is_file())
        .collect();
    dirs.sort();

    let mut plugins = Vec::new();
    for dir in dirs {
        match PluginGenerator::load(&dir) {
            Ok(plugin) => {
                debug!(name = %plugin.name, "Loaded plugin");
                plugins.push(plugin);
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping plugin");
            }
        }
    }
    plugins
}
