//! A plain directory of templates on disk.

use std::path::{Path, PathBuf};

use exo_core::{application::ports::TemplateSource, domain::SourceTier, error::ExoResult};

use super::read_if_file;

/// Templates stored under one root directory.
///
/// Used for the project-local tier (`<cwd>/templates`) and the plugin tier
/// (`~/.exo/plugins`).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    tier: SourceTier,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, tier: SourceTier) -> Self {
        Self {
            root: root.into(),
            tier,
        }
    }

    pub fn project_local(cwd: &Path) -> Self {
        Self::new(cwd.join("templates"), SourceTier::ProjectLocal)
    }

    pub fn plugins(plugins_dir: impl Into<PathBuf>) -> Self {
        Self::new(plugins_dir, SourceTier::Plugin)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectorySource {
    fn tier(&self) -> SourceTier {
        self.tier
    }

    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>> {
        read_if_file(&self.root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_nested_template() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("templates/k8s")).unwrap();
        fs::write(dir.path().join("templates/k8s/service.yaml.tmpl"), "local").unwrap();

        let source = DirectorySource::project_local(dir.path());
        assert_eq!(source.tier(), SourceTier::ProjectLocal);
        assert_eq!(
            source.try_read("k8s/service.yaml.tmpl").unwrap().as_deref(),
            Some(b"local".as_slice())
        );
    }

    #[test]
    fn missing_root_is_a_miss() {
        let source = DirectorySource::plugins("/definitely/not/here");
        assert!(source.try_read("x.tmpl").unwrap().is_none());
    }

    #[test]
    fn directory_with_template_name_is_a_miss() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("x.tmpl")).unwrap();
        let source = DirectorySource::new(dir.path(), SourceTier::ProjectLocal);
        assert!(source.try_read("x.tmpl").unwrap().is_none());
    }
}
