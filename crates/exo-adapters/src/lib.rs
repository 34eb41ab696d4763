//! Infrastructure adapters for exo.
//!
//! This crate implements the ports defined in `exo_core::application::ports`
//! and everything else that touches the outside world: template tiers on
//! disk and in the binary, Tera, `.exo.yaml`, the history log, plugins and
//! installed registries, and external tools.

pub mod config_store;
pub mod detector;
pub mod external;
pub mod filesystem;
pub mod history;
pub mod home;
pub mod packages;
pub mod plugins;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use config_store::{CONFIG_FILE_NAME, YamlConfigStore};
pub use detector::FsStackDetector;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use history::{HistoryEntry, JsonHistoryLog};
pub use home::ExoHome;
pub use packages::{InstalledPackage, PackageDir};
pub use plugins::{PluginGenerator, load_plugins};
pub use renderer::TeraRenderer;
pub use template_source::{
    BundledSource, DirectorySource, MemorySource, RegistryCacheSource, standard_tiers,
};
