//! Template storage tiers.
//!
//! Each type implements [`TemplateSource`] for one tier. [`standard_tiers`]
//! assembles them in production lookup order.

mod bundled;
mod directory;
mod memory;
mod registry_cache;

use std::path::Path;

use exo_core::{application::ports::TemplateSource, error::ExoResult};

pub use bundled::BundledSource;
pub use directory::DirectorySource;
pub use memory::MemorySource;
pub use registry_cache::RegistryCacheSource;

use crate::filesystem::map_io_error;
use crate::home::ExoHome;

/// Bundled → project-local → remote-registry → plugins.
pub fn standard_tiers(cwd: &Path, home: &ExoHome) -> Vec<Box<dyn TemplateSource>> {
    vec![
        Box::new(BundledSource::new()),
        Box::new(DirectorySource::project_local(cwd)),
        Box::new(RegistryCacheSource::new(home.templates_dir())),
        Box::new(DirectorySource::plugins(home.plugins_dir())),
    ]
}

/// Contents of `path` when it is a regular file, `None` when it is absent.
fn read_if_file(path: &Path) -> ExoResult<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read(path)
        .map(Some)
        .map_err(|e| map_io_error(path, e, "read template"))
}
