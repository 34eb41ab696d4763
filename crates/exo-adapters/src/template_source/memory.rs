//! In-memory template tier for testing.

use std::collections::HashMap;

use exo_core::{application::ports::TemplateSource, domain::SourceTier, error::ExoResult};

#[derive(Debug, Clone)]
pub struct MemorySource {
    tier: SourceTier,
    templates: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new(tier: SourceTier) -> Self {
        Self {
            tier,
            templates: HashMap::new(),
        }
    }

    pub fn with_template(mut self, relative: &str, content: impl Into<Vec<u8>>) -> Self {
        self.templates.insert(relative.to_string(), content.into());
        self
    }
}

impl TemplateSource for MemorySource {
    fn tier(&self) -> SourceTier {
        self.tier
    }

    fn try_read(&self, relative: &str) -> ExoResult<Option<Vec<u8>>> {
        Ok(self.templates.get(relative).cloned())
    }
}
