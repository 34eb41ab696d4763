//! The rendering context and the records it is merged from.
//!
//! [`TemplateData`] is what every template sees. It is assembled once per
//! invocation by the config resolver from four layers: defaults, stack
//! detection, the persisted [`ProjectConfig`], and [`TemplateOverrides`].

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CiSystem, CloudProvider, Database, Language, LicenseKind, Monitoring,
};

/// Port a service listens on when nothing else says otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Context passed to every template.
///
/// Every field is always present when serialized so that a template can
/// reference any of them without tripping Tera's undefined-variable check.
/// Unset strings render as `""`, unset enums as `none` / `unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub app_name: String,
    pub language: Language,
    pub framework: String,
    pub port: u16,
    pub db: Database,
    pub provider: CloudProvider,
    pub ci: CiSystem,
    pub monitoring: Monitoring,
    pub registry: String,
    pub license: LicenseKind,
}

impl Default for TemplateData {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            language: Language::default(),
            framework: String::new(),
            port: DEFAULT_PORT,
            db: Database::default(),
            provider: CloudProvider::default(),
            ci: CiSystem::default(),
            monitoring: Monitoring::default(),
            registry: String::new(),
            license: LicenseKind::default(),
        }
    }
}

impl TemplateData {
    /// Convenience constructor used by tests and the `init` wizard.
    pub fn named(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }
}

// ── Detection ────────────────────────────────────────────────────────────────

/// What the stack detector inferred from marker files in a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub framework: Option<String>,
}

// ── ProjectConfig ────────────────────────────────────────────────────────────

/// The persisted subset of [`TemplateData`], stored as `.exo.yaml`.
///
/// Its presence marks an initialized project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default)]
    pub provider: CloudProvider,
    #[serde(default)]
    pub ci: CiSystem,
    #[serde(default)]
    pub monitoring: Monitoring,
    #[serde(default, skip_serializing_if = "Database::is_none")]
    pub db: Database,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
}

impl ProjectConfig {
    /// Capture the persistable fields of a resolved context.
    pub fn from_data(data: &TemplateData) -> Self {
        Self {
            name: data.app_name.clone(),
            language: data.language,
            framework: non_empty(&data.framework),
            provider: data.provider,
            ci: data.ci,
            monitoring: data.monitoring,
            db: data.db,
            port: Some(data.port),
            registry: non_empty(&data.registry),
        }
    }

    /// Overlay this config onto `data`.
    ///
    /// A missing or zero port keeps whatever `data` already holds.
    pub fn apply_to(&self, data: &mut TemplateData) {
        if !self.name.is_empty() {
            data.app_name.clone_from(&self.name);
        }
        data.language = self.language;
        data.framework = self.framework.clone().unwrap_or_default();
        data.provider = self.provider;
        data.ci = self.ci;
        data.monitoring = self.monitoring;
        data.db = self.db;
        if let Some(port) = self.port.filter(|p| *p != 0) {
            data.port = port;
        }
        data.registry = self.registry.clone().unwrap_or_default();
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

// ── TemplateOverrides ────────────────────────────────────────────────────────

/// Explicit per-invocation values, usually from command-line flags.
///
/// Each `Some` field wins over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOverrides {
    pub app_name: Option<String>,
    pub language: Option<Language>,
    pub framework: Option<String>,
    pub port: Option<u16>,
    pub db: Option<Database>,
    pub provider: Option<CloudProvider>,
    pub ci: Option<CiSystem>,
    pub monitoring: Option<Monitoring>,
    pub registry: Option<String>,
    pub license: Option<LicenseKind>,
}

impl TemplateOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay every set field onto `data`.
    pub fn apply_to(&self, data: &mut TemplateData) {
        if let Some(name) = &self.app_name {
            data.app_name.clone_from(name);
        }
        if let Some(language) = self.language {
            data.language = language;
        }
        if let Some(framework) = &self.framework {
            data.framework.clone_from(framework);
        }
        if let Some(port) = self.port {
            data.port = port;
        }
        if let Some(db) = self.db {
            data.db = db;
        }
        if let Some(provider) = self.provider {
            data.provider = provider;
        }
        if let Some(ci) = self.ci {
            data.ci = ci;
        }
        if let Some(monitoring) = self.monitoring {
            data.monitoring = monitoring;
        }
        if let Some(registry) = &self.registry {
            data.registry.clone_from(registry);
        }
        if let Some(license) = self.license {
            data.license = license;
        }
    }
}
