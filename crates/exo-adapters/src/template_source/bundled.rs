//! Templates compiled into the binary.

use include_dir::{Dir, include_dir};

use exo_core::{application::ports::TemplateSource, domain::SourceTier, error::ExoResult};

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The in-binary asset table, keyed by forward-slash relative path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn new() -> Self {
        Self
    }

    /// Every bundled template path, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect(&TEMPLATES_DIR, &mut paths);
        paths.sort();
        paths
    }
}

fn collect(dir: &Dir<'_>, out: &mut Vec<String>) {
    for file in dir.files() {
        out.push(file.path().to_string_lossy().replace('\\', "/"));
    }
    for sub in dir.dirs() {
        collect(sub, out);
    }
}

impl TemplateSource for BundledSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Bundled
    }

    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>> {
        Ok(TEMPLATES_DIR
            .get_file(relative)
            .map(|file| file.contents().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dockerfile_is_present() {
        let content = BundledSource::new()
            .try_read("docker/go.Dockerfile.tmpl")
            .unwrap()
            .unwrap();
        assert!(String::from_utf8(content).unwrap().contains("FROM"));
    }

    #[test]
    fn unknown_path_is_a_miss() {
        assert!(
            BundledSource::new()
                .try_read("docker/cobol.Dockerfile.tmpl")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn paths_use_forward_slashes() {
        let paths = BundledSource::new().paths();
        assert!(paths.contains(&"k8s/deployment.yaml.tmpl".to_string()));
        assert!(paths.iter().all(|p| !p.contains('\\')));
    }
}
