//! Application layer for exo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (resolver, render engine, asset
//!   generator, config resolver, diff reporter, generator registry)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Generation-type rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AssetGenerator, ConfigResolver, DiffReporter, FileDiff, GeneratorRegistry, RenderEngine,
    ResolvedTemplate, TemplateResolver,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProjectConfigStore, StackDetector, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
