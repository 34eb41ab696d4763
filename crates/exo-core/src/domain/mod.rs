// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Exo.
//!
//! This module contains pure logic with no I/O. Reading templates, writing
//! files and rendering are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Closed enums**: Every variant → path mapping is an exhaustive `match`
//!
// Public API - what the world sees
pub mod capabilities;
pub mod catalog;
pub mod diff;
pub mod entities;
pub mod error;
pub mod generator;
pub mod template_data;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use catalog::BuiltinType;
pub use diff::DiffReport;
pub use entities::{
    FailurePolicy, FileMapping, FileOutcome, FileStatus, GenerationResult, RelativePath,
    Requirements, TemplateId, WriteOutcome, WritePolicy,
};
pub use error::{DomainError, ErrorCategory};
pub use generator::{Generator, GeneratorInfo};
pub use template_data::{DEFAULT_PORT, Detection, ProjectConfig, TemplateData, TemplateOverrides};
pub use validation::DomainValidator;
pub use value_objects::{
    CiSystem, CloudProvider, Database, Language, LicenseKind, Monitoring, SourceTier,
};
