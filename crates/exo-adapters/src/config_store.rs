//! `.exo.yaml` persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use exo_core::{
    application::{ApplicationError, ports::ProjectConfigStore},
    domain::ProjectConfig,
    error::ExoResult,
};

use crate::filesystem::map_io_error;

pub const CONFIG_FILE_NAME: &str = ".exo.yaml";

/// Stores [`ProjectConfig`] as YAML at the project root.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigStore;

impl YamlConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }
}

impl ProjectConfigStore for YamlConfigStore {
    #[instrument(skip(self), fields(root = %project_root.display()))]
    fn load(&self, project_root: &Path) -> ExoResult<Option<ProjectConfig>> {
        let path = Self::path_for(project_root);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error(&path, e, "read project config")),
        };

        let config = serde_yaml::from_str(&raw).map_err(|e| ApplicationError::ProjectConfig {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!("Loaded project config");
        Ok(Some(config))
    }

    #[instrument(skip(self, config), fields(root = %project_root.display()))]
    fn save(&self, project_root: &Path, config: &ProjectConfig) -> ExoResult<()> {
        let path = Self::path_for(project_root);
        let yaml = serde_yaml::to_string(config).map_err(|e| ApplicationError::ProjectConfig {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&path, yaml).map_err(|e| map_io_error(&path, e, "write project config"))?;
        debug!("Saved project config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_core::domain::{CloudProvider, Database, Language};
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_uninitialized() {
        let dir = TempDir::new().unwrap();
        assert!(YamlConfigStore::new().load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig {
            name: "orders".into(),
            language: Language::Go,
            provider: CloudProvider::Gcp,
            db: Database::Postgres,
            port: Some(9000),
            ..ProjectConfig::default()
        };
        let store = YamlConfigStore::new();
        store.save(dir.path(), &config).unwrap();

        assert_eq!(store.load(dir.path()).unwrap(), Some(config));
        let raw = fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(raw.contains("provider: gcp"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "name: svc\nlanguage: python\n").unwrap();

        let config = YamlConfigStore::new().load(dir.path()).unwrap().unwrap();
        assert_eq!(config.language, Language::Python);
        assert_eq!(config.db, Database::None);
        assert_eq!(config.port, None);
    }

    #[test]
    fn corrupt_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "language: [cobol").unwrap();

        let err = YamlConfigStore::new().load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(".exo.yaml"));
    }
}
