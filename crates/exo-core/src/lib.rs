//! exo core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers of the exo DevOps
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              exo-cli (CLI)              │
//! │     (wires adapters, drives services)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (AssetGenerator, ConfigResolver, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (TemplateSource, Filesystem, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     exo-adapters (Infrastructure)       │
//! │  (BundledSource, TeraRenderer, ...)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateData, BuiltinType, DiffReport) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exo_core::prelude::*;
//!
//! let registry = GeneratorRegistry::with_builtins();
//! let engine = RenderEngine::new(resolver, renderer, filesystem);
//! let data = ConfigResolver::new(&store, &detector).resolve(&cwd, &overrides);
//!
//! let result = AssetGenerator::new(&registry, &engine)
//!     .generate("docker", &cwd, &data, WritePolicy::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, AssetGenerator, ConfigResolver, DiffReporter, FileDiff,
        GeneratorRegistry, RenderEngine, TemplateResolver,
        ports::{Filesystem, ProjectConfigStore, StackDetector, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        BuiltinType, CiSystem, CloudProvider, Database, DiffReport, DomainError, FailurePolicy,
        FileMapping, FileStatus, GenerationResult, Generator, GeneratorInfo, Language,
        LicenseKind, Monitoring, ProjectConfig, Requirements, SourceTier, TemplateData,
        TemplateId, TemplateOverrides, WriteOutcome, WritePolicy,
    };
    pub use crate::error::{ErrorCategory, ExoError, ExoResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
