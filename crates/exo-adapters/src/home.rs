//! The per-user `~/.exo` state directory.

use std::path::{Path, PathBuf};

use exo_core::error::{ExoError, ExoResult};

pub const HOME_DIR_NAME: &str = ".exo";
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Layout of the per-user state root.
///
/// ```text
/// ~/.exo/
/// ├── history.json
/// ├── plugins/<name>/plugin.toml
/// └── templates/<registry>/...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExoHome {
    root: PathBuf,
}

impl ExoHome {
    /// `~/.exo` for the current user.
    pub fn locate() -> ExoResult<Self> {
        dirs::home_dir()
            .map(|home| Self::at(home.join(HOME_DIR_NAME)))
            .ok_or_else(|| ExoError::Configuration {
                message: "could not determine the home directory; set paths.home".into(),
            })
    }

    /// Use an explicit root instead of `~/.exo`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join("plugins")
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join(HISTORY_FILE_NAME)
    }
}
