//! Render Engine.
//!
//! Resolves a template, renders it fully in memory, and only then applies the
//! write policy. A parse or execution failure therefore never leaves a
//! partial file behind.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::TemplateResolver,
    },
    domain::{TemplateData, TemplateId, WriteOutcome, WritePolicy},
    error::ExoResult,
};

pub struct RenderEngine {
    resolver: TemplateResolver,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl RenderEngine {
    pub fn new(
        resolver: TemplateResolver,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            resolver,
            renderer,
            filesystem,
        }
    }

    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Render a template to a string without touching the output tree.
    #[instrument(skip(self, data), fields(template = %id))]
    pub fn render(&self, id: &TemplateId, data: &TemplateData) -> ExoResult<String> {
        let resolved = self.resolver.resolve(id)?;
        let source = String::from_utf8(resolved.content).map_err(|e| {
            ApplicationError::TemplateParse {
                template_id: id.to_string(),
                reason: format!("template is not valid UTF-8: {e}"),
            }
        })?;
        self.renderer.render(&id.to_string(), &source, data)
    }

    /// Render a template and write it to `output` according to `policy`.
    ///
    /// - `dry_run`: nothing on disk is touched → [`WriteOutcome::SkippedDryRun`]
    /// - output exists and not `force` → [`WriteOutcome::SkippedExists`]
    /// - otherwise parents are created and the file is (over)written
    #[instrument(skip(self, data), fields(template = %id, output = %output.display()))]
    pub fn render_to_file(
        &self,
        id: &TemplateId,
        output: &Path,
        data: &TemplateData,
        policy: WritePolicy,
    ) -> ExoResult<WriteOutcome> {
        let content = self.render(id, data)?;

        if policy.dry_run {
            debug!("Dry run, not writing");
            return Ok(WriteOutcome::SkippedDryRun);
        }

        if !policy.force && self.filesystem.exists(output) {
            debug!("Output exists, skipping");
            return Ok(WriteOutcome::SkippedExists);
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(output, &content)?;

        debug!(bytes = content.len(), "Written");
        Ok(WriteOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::{FakeFs, FakeRenderer, FakeSource};
    use crate::domain::SourceTier;
    use crate::error::ExoError;

    fn engine(fs: &FakeFs, files: &[(&str, &str)]) -> RenderEngine {
        RenderEngine::new(
            TemplateResolver::new(vec![FakeSource::new(SourceTier::Bundled, files)]),
            Box::new(FakeRenderer),
            Box::new(fs.clone()),
        )
    }

    fn id(raw: &str) -> TemplateId {
        TemplateId::new(raw).unwrap()
    }

    #[test]
    fn render_substitutes_data() {
        let fs = FakeFs::default();
        let engine = engine(&fs, &[("a.tmpl", "name={{ app_name }} port={{ port }}")]);
        let out = engine
            .render(&id("templates/a.tmpl"), &TemplateData::named("svc"))
            .unwrap();
        assert_eq!(out, "name=svc port=8080");
    }

    #[test]
    fn dry_run_touches_nothing() {
        let fs = FakeFs::default();
        let engine = engine(&fs, &[("a.tmpl", "x")]);
        let outcome = engine
            .render_to_file(
                &id("a.tmpl"),
                Path::new("/out/a"),
                &TemplateData::default(),
                WritePolicy::new(true, false),
            )
            .unwrap();
        assert_eq!(outcome, WriteOutcome::SkippedDryRun);
        assert_eq!(fs.mutation_count(), 0);
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let fs = FakeFs::default().with_file("/out/a", "old");
        let engine = engine(&fs, &[("a.tmpl", "new")]);
        let outcome = engine
            .render_to_file(
                &id("a.tmpl"),
                Path::new("/out/a"),
                &TemplateData::default(),
                WritePolicy::default(),
            )
            .unwrap();
        assert_eq!(outcome, WriteOutcome::SkippedExists);
        assert_eq!(fs.get("/out/a").as_deref(), Some("old"));
    }

    #[test]
    fn force_overwrites() {
        let fs = FakeFs::default().with_file("/out/a", "old");
        let engine = engine(&fs, &[("a.tmpl", "new")]);
        let outcome = engine
            .render_to_file(
                &id("a.tmpl"),
                Path::new("/out/a"),
                &TemplateData::default(),
                WritePolicy::new(false, true),
            )
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs.get("/out/a").as_deref(), Some("new"));
    }

    #[test]
    fn parse_error_leaves_no_file() {
        let fs = FakeFs::default();
        let engine = engine(&fs, &[("bad.tmpl", "{% fail %}")]);
        let err = engine
            .render_to_file(
                &id("bad.tmpl"),
                Path::new("/out/bad"),
                &TemplateData::default(),
                WritePolicy::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ExoError::Application(ApplicationError::TemplateParse { .. })
        ));
        assert_eq!(fs.mutation_count(), 0);
    }

    #[test]
    fn non_utf8_template_is_parse_error() {
        let fs = FakeFs::default();
        let source = FakeSource::raw(
            SourceTier::Bundled,
            [("bin.tmpl".to_string(), vec![0xff, 0xfe, 0x00])].into(),
        );
        let engine = RenderEngine::new(
            TemplateResolver::new(vec![source]),
            Box::new(FakeRenderer),
            Box::new(fs),
        );
        let err = engine
            .render(&id("bin.tmpl"), &TemplateData::default())
            .unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
