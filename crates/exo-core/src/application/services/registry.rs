//! Generator Registry.
//!
//! An explicit name → generator table constructed once at startup and passed
//! by reference. There is no global instance.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    domain::{BuiltinType, DomainError, Generator, GeneratorInfo},
    error::ExoResult,
};

#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in generation type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinType::ALL {
            registry.register(Box::new(builtin));
        }
        registry
    }

    /// Register a generator under its own name.
    ///
    /// Re-registering a name replaces the previous entry, which is returned.
    pub fn register(&mut self, generator: Box<dyn Generator>) -> Option<Box<dyn Generator>> {
        let name = generator.name().to_string();
        let previous = self.generators.insert(name.clone(), generator);
        if previous.is_some() {
            debug!(generation_type = %name, "Generator replaced");
        }
        previous
    }

    pub fn lookup(&self, name: &str) -> ExoResult<&dyn Generator> {
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| {
                DomainError::UnknownGenerationType {
                    name: name.to_string(),
                    available: self.names(),
                }
                .into()
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Every generator, sorted by name.
    pub fn list_all(&self) -> Vec<&dyn Generator> {
        self.generators.values().map(|g| g.as_ref()).collect()
    }

    pub fn infos(&self) -> Vec<GeneratorInfo> {
        self.list_all()
            .into_iter()
            .map(GeneratorInfo::of)
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
