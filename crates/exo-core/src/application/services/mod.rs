//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: resolve a template, render it, merge the rendering
//! context, generate a type, preview a type.

pub mod asset_generator;
pub mod config_resolver;
pub mod diff_reporter;
pub mod registry;
pub mod render_engine;
pub mod template_resolver;

#[cfg(test)]
mod testing;

pub use asset_generator::AssetGenerator;
pub use config_resolver::ConfigResolver;
pub use diff_reporter::{DiffReporter, FileDiff};
pub use registry::GeneratorRegistry;
pub use render_engine::RenderEngine;
pub use template_resolver::{ResolvedTemplate, TemplateResolver};
