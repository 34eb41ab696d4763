//! Asset Generator.
//!
//! Runs one generation type as a named, idempotent operation: checks its
//! required options before any I/O, renders each manifest entry in order,
//! and collects per-file outcomes under the type's failure policy.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::services::{GeneratorRegistry, RenderEngine},
    domain::{FailurePolicy, FileStatus, GenerationResult, TemplateData, WritePolicy},
    error::ExoResult,
};

pub struct AssetGenerator<'a> {
    registry: &'a GeneratorRegistry,
    engine: &'a RenderEngine,
}

impl<'a> AssetGenerator<'a> {
    pub fn new(registry: &'a GeneratorRegistry, engine: &'a RenderEngine) -> Self {
        Self { registry, engine }
    }

    /// Generate every file of `generation_type` below `out_dir`.
    ///
    /// Returns `Err` only for failures that happen before the first file is
    /// attempted (unknown type, missing required option, invalid manifest).
    /// Per-file failures are recorded in the returned result instead.
    #[instrument(
        skip(self, data),
        fields(out_dir = %out_dir.display(), dry_run = policy.dry_run, force = policy.force)
    )]
    pub fn generate(
        &self,
        generation_type: &str,
        out_dir: &Path,
        data: &TemplateData,
        policy: WritePolicy,
    ) -> ExoResult<GenerationResult> {
        let generator = self.registry.lookup(generation_type)?;
        generator.requirements().check(generator.name(), data)?;
        let manifest = generator.manifest(data)?;
        let stop_on_error = generator.failure_policy() == FailurePolicy::StopOnFirstError;

        info!(files = manifest.len(), "Generating {}", generator.name());

        let mut result = GenerationResult::new(generator.name(), out_dir);
        for mapping in &manifest {
            let target = out_dir.join(mapping.output.as_path());
            let status = match self
                .engine
                .render_to_file(&mapping.template, &target, data, policy)
            {
                Ok(outcome) => FileStatus::from(outcome),
                Err(e) => {
                    warn!(file = %mapping.output, error = %e, "File failed");
                    FileStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };

            let failed = status.is_failed();
            result.push(mapping.output.as_path(), status);

            if failed && stop_on_error {
                warn!("Stopping {} after first failure", generator.name());
                result.stopped_early = true;
                break;
            }
        }

        Ok(result)
    }
}
