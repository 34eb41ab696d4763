//! Config Merge Resolver.
//!
//! Builds the [`TemplateData`] for one invocation. Precedence, lowest first:
//!
//! 1. built-in defaults
//! 2. stack detection (only when no persisted config exists)
//! 3. persisted `.exo.yaml`
//! 4. explicit overrides
//!
//! Resolution never fails. A config file that cannot be read or parsed is
//! logged and treated as absent.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::{ProjectConfigStore, StackDetector},
    domain::{TemplateData, TemplateOverrides},
};

pub struct ConfigResolver<'a> {
    store: &'a dyn ProjectConfigStore,
    detector: &'a dyn StackDetector,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(store: &'a dyn ProjectConfigStore, detector: &'a dyn StackDetector) -> Self {
        Self { store, detector }
    }

    #[instrument(skip(self, overrides), fields(cwd = %cwd.display()))]
    pub fn resolve(&self, cwd: &Path, overrides: &TemplateOverrides) -> TemplateData {
        let mut data = TemplateData::default();

        let persisted = match self.store.load(cwd) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable project config");
                None
            }
        };

        match persisted {
            Some(config) => {
                debug!(name = %config.name, "Using persisted project config");
                config.apply_to(&mut data);
            }
            None => {
                let detection = self.detector.detect(cwd);
                debug!(language = %detection.language, framework = ?detection.framework, "Detected stack");
                data.language = detection.language;
                data.framework = detection.framework.unwrap_or_default();
            }
        }

        overrides.apply_to(&mut data);

        if data.app_name.is_empty() {
            data.app_name = cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        data
    }
}
