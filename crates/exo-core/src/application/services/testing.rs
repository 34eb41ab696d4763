//! In-crate fakes for service tests.
//!
//! The real adapters live in `exo-adapters`, which depends on this crate, so
//! unit tests here use these small stand-ins instead.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::application::{
    ApplicationError,
    ports::{Filesystem, TemplateRenderer, TemplateSource},
};
use crate::domain::{SourceTier, TemplateData};
use crate::error::ExoResult;

pub struct FakeSource {
    pub tier: SourceTier,
    pub files: HashMap<String, Vec<u8>>,
}

impl FakeSource {
    pub fn new(tier: SourceTier, files: &[(&str, &str)]) -> Box<dyn TemplateSource> {
        Self::raw(
            tier,
            files
                .iter()
                .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
                .collect(),
        )
    }

    pub fn raw(tier: SourceTier, files: HashMap<String, Vec<u8>>) -> Box<dyn TemplateSource> {
        Box::new(Self { tier, files })
    }
}

impl TemplateSource for FakeSource {
    fn tier(&self) -> SourceTier {
        self.tier
    }

    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>> {
        Ok(self.files.get(relative).cloned())
    }
}

/// Replaces `{{ app_name }}` and `{{ port }}`; `{% fail %}` is a parse error.
pub struct FakeRenderer;

impl TemplateRenderer for FakeRenderer {
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> ExoResult<String> {
        if source.contains("{% fail %}") {
            return Err(ApplicationError::TemplateParse {
                template_id: name.to_string(),
                reason: "unexpected tag".into(),
            }
            .into());
        }
        Ok(source
            .replace("{{ app_name }}", &data.app_name)
            .replace("{{ port }}", &data.port.to_string()))
    }
}

/// Shared in-memory filesystem that counts mutations.
#[derive(Clone, Default)]
pub struct FakeFs {
    pub files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    pub mutations: Arc<RwLock<usize>>,
}

impl FakeFs {
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(Path::new(path)).cloned()
    }

    pub fn mutation_count(&self) -> usize {
        *self.mutations.read().unwrap()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, _path: &Path) -> ExoResult<()> {
        *self.mutations.write().unwrap() += 1;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ExoResult<()> {
        *self.mutations.write().unwrap() += 1;
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ExoResult<Option<String>> {
        Ok(self.files.read().unwrap().get(path).cloned())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}
