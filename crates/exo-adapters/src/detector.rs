//! Filesystem-backed stack detection.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use exo_core::{
    application::ports::StackDetector,
    domain::{
        Detection, Language,
        capabilities::{detect_framework, detect_language, find_language},
    },
};

/// Looks for marker files in the project root and searches the language's
/// manifests for framework keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStackDetector;

impl FsStackDetector {
    pub fn new() -> Self {
        Self
    }
}

impl StackDetector for FsStackDetector {
    #[instrument(skip(self), fields(root = %project_root.display()))]
    fn detect(&self, project_root: &Path) -> Detection {
        let language = detect_language(|marker| project_root.join(marker).is_file());
        if language == Language::Unknown {
            return Detection::default();
        }

        let framework = find_language(language).and_then(|def| {
            def.manifests.iter().find_map(|manifest| {
                let text = fs::read_to_string(project_root.join(manifest)).ok()?;
                detect_framework(language, &text)
            })
        });

        debug!(%language, framework = ?framework, "Stack detected");
        Detection {
            language,
            framework: framework.map(str::to_string),
        }
    }
}
