//! Diff/Preview Reporter.
//!
//! Renders in memory and compares against what is already on disk. Never
//! writes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::instrument;

use crate::{
    application::services::{GeneratorRegistry, RenderEngine},
    domain::{DiffReport, TemplateData, TemplateId},
    error::ExoResult,
};

/// One manifest entry of a type-level preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: PathBuf,
    pub template: String,
    #[serde(flatten)]
    pub report: DiffReport,
}

pub struct DiffReporter<'a> {
    registry: &'a GeneratorRegistry,
    engine: &'a RenderEngine,
}

impl<'a> DiffReporter<'a> {
    pub fn new(registry: &'a GeneratorRegistry, engine: &'a RenderEngine) -> Self {
        Self { registry, engine }
    }

    /// Preview a single template against `output`.
    #[instrument(skip(self, data), fields(template = %id, output = %output.display()))]
    pub fn diff_template(
        &self,
        id: &TemplateId,
        output: &Path,
        data: &TemplateData,
    ) -> ExoResult<DiffReport> {
        let rendered = self.engine.render(id, data)?;
        let existing = self.engine.filesystem().read_file(output)?;
        Ok(DiffReport::compute(existing.as_deref(), &rendered))
    }

    /// Preview every file `generation_type` would produce below `out_dir`.
    ///
    /// Applies the same required-option checks as generation. The first
    /// render failure aborts the preview.
    #[instrument(skip(self, data), fields(out_dir = %out_dir.display()))]
    pub fn diff_type(
        &self,
        generation_type: &str,
        out_dir: &Path,
        data: &TemplateData,
    ) -> ExoResult<Vec<FileDiff>> {
        let generator = self.registry.lookup(generation_type)?;
        generator.requirements().check(generator.name(), data)?;

        generator
            .manifest(data)?
            .into_iter()
            .map(|mapping| {
                let report =
                    self.diff_template(&mapping.template, &out_dir.join(&mapping.output), data)?;
                Ok(FileDiff {
                    path: mapping.output.into_path_buf(),
                    template: mapping.template.to_string(),
                    report,
                })
            })
            .collect()
    }
}
