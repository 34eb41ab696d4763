//! The `Generator` abstraction: a named manifest of template → output pairs.

use serde::Serialize;

use crate::domain::{
    DomainError, FailurePolicy, FileMapping, Requirements, template_data::TemplateData,
};

/// A generation type.
///
/// Manifests are a pure function of the rendering context so that types like
/// `infra` or `db` can pick their templates from the selected provider or
/// database. Built-in types live in [`crate::domain::catalog`]; plugins add
/// their own implementations at startup.
pub trait Generator: Send + Sync {
    /// Unique registration name, e.g. `k8s`.
    fn name(&self) -> &str;

    /// One-line description for `exo list`.
    fn description(&self) -> &str;

    fn requirements(&self) -> Requirements {
        Requirements::NONE
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Continue
    }

    /// Template/output pairs in the order they are rendered.
    fn manifest(&self, data: &TemplateData) -> Result<Vec<FileMapping>, DomainError>;
}

/// Display DTO for a registered generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub description: String,
    pub requires_provider: bool,
    pub requires_database: bool,
    pub failure_policy: FailurePolicy,
}

impl GeneratorInfo {
    pub fn of(generator: &dyn Generator) -> Self {
        let requirements = generator.requirements();
        Self {
            name: generator.name().to_string(),
            description: generator.description().to_string(),
            requires_provider: requirements.provider,
            requires_database: requirements.database,
            failure_policy: generator.failure_policy(),
        }
    }
}
