//! Template Source Resolver.
//!
//! Tries each configured [`TemplateSource`] in order and returns the first
//! hit. The default production order is bundled → project-local →
//! remote-registry → plugins; adding a tier is pushing another source.

use tracing::{debug, instrument, trace};

use crate::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{SourceTier, TemplateId},
    error::ExoResult,
};

/// Template content together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub id: TemplateId,
    pub tier: SourceTier,
    pub content: Vec<u8>,
}

/// Ordered list of template tiers.
pub struct TemplateResolver {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl TemplateResolver {
    pub fn new(sources: Vec<Box<dyn TemplateSource>>) -> Self {
        Self { sources }
    }

    /// Append a tier with the lowest priority so far.
    pub fn push(&mut self, source: Box<dyn TemplateSource>) {
        self.sources.push(source);
    }

    /// Tiers in lookup order.
    pub fn tiers(&self) -> Vec<SourceTier> {
        self.sources.iter().map(|s| s.tier()).collect()
    }

    /// Resolve `id` against every tier, first hit wins.
    ///
    /// Never substitutes empty content: a miss everywhere is
    /// [`ApplicationError::TemplateNotFound`].
    #[instrument(skip(self), fields(template = %id))]
    pub fn resolve(&self, id: &TemplateId) -> ExoResult<ResolvedTemplate> {
        for source in &self.sources {
            if let Some(content) = source.try_read(id.relative_path())? {
                debug!(tier = %source.tier(), bytes = content.len(), "Template resolved");
                return Ok(ResolvedTemplate {
                    id: id.clone(),
                    tier: source.tier(),
                    content,
                });
            }
            trace!(tier = %source.tier(), "Template not in tier");
        }

        let searched = self
            .tiers()
            .iter()
            .map(SourceTier::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Err(ApplicationError::TemplateNotFound {
            template_id: id.to_string(),
            searched,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::FakeSource;
    use crate::error::{ErrorCategory, ExoError};

    fn id(raw: &str) -> TemplateId {
        TemplateId::new(raw).unwrap()
    }

    #[test]
    fn bundled_beats_project_local() {
        let resolver = TemplateResolver::new(vec![
            FakeSource::new(SourceTier::Bundled, &[("k8s/service.yaml.tmpl", "bundled")]),
            FakeSource::new(
                SourceTier::ProjectLocal,
                &[("k8s/service.yaml.tmpl", "local")],
            ),
        ]);

        let resolved = resolver
            .resolve(&id("templates/k8s/service.yaml.tmpl"))
            .unwrap();
        assert_eq!(resolved.tier, SourceTier::Bundled);
        assert_eq!(resolved.content, b"bundled");
    }

    #[test]
    fn falls_through_to_later_tiers() {
        let resolver = TemplateResolver::new(vec![
            FakeSource::new(SourceTier::Bundled, &[]),
            FakeSource::new(SourceTier::ProjectLocal, &[]),
            FakeSource::new(SourceTier::RemoteRegistry, &[("custom/x.tmpl", "remote")]),
        ]);

        let resolved = resolver.resolve(&id("templates/custom/x.tmpl")).unwrap();
        assert_eq!(resolved.tier, SourceTier::RemoteRegistry);
    }

    #[test]
    fn miss_everywhere_is_not_found() {
        let resolver = TemplateResolver::new(vec![FakeSource::new(SourceTier::Bundled, &[])]);
        let err = resolver.resolve(&id("templates/nope.tmpl")).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        match err {
            ExoError::Application(ApplicationError::TemplateNotFound {
                template_id,
                searched,
            }) => {
                assert_eq!(template_id, "templates/nope.tmpl");
                assert_eq!(searched, "bundled");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_content_is_still_a_hit() {
        let resolver = TemplateResolver::new(vec![FakeSource::new(
            SourceTier::Bundled,
            &[("empty.tmpl", "")],
        )]);
        let resolved = resolver.resolve(&id("empty.tmpl")).unwrap();
        assert!(resolved.content.is_empty());
    }
}
