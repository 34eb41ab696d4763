//! Installed remote registries under `~/.exo/templates`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use exo_core::{application::ports::TemplateSource, domain::SourceTier, error::ExoResult};

use super::read_if_file;
use crate::filesystem::map_io_error;

/// Looks a template up directly under the cache root, then under each
/// installed registry directory in name order.
#[derive(Debug, Clone)]
pub struct RegistryCacheSource {
    root: PathBuf,
}

impl RegistryCacheSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Installed registry directories, sorted by name.
    pub fn registries(&self) -> ExoResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&self.root).map_err(|e| map_io_error(&self.root, e, "read directory"))?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

impl TemplateSource for RegistryCacheSource {
    fn tier(&self) -> SourceTier {
        SourceTier::RemoteRegistry
    }

    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>> {
        if let Some(content) = read_if_file(&self.root.join(relative))? {
            return Ok(Some(content));
        }

        for registry in self.registries()? {
            trace!(registry = %registry.display(), "Checking registry");
            if let Some(content) = read_if_file(&registry.join(relative))? {
                return Ok(Some(content));
            }
        }

        Ok(None)
    }
}
