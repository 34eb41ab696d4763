//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `exo-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateSource`: One template storage tier
//!   - `TemplateRenderer`: Template engine
//!   - `ProjectConfigStore`: Persisted `.exo.yaml`
//!   - `StackDetector`: Language/framework detection
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ProjectConfigStore, StackDetector, TemplateRenderer, TemplateSource};

#[cfg(test)]
pub use output::{MockProjectConfigStore, MockStackDetector};
