//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `EXO_<SECTION>__<KEY>`, e.g. `EXO_PATHS__HOME`
//! 3. Config file (`--config FILE`, else `<config dir>/exo/config.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use exo_adapters::{ExoHome, history::HISTORY_LIMIT};

use crate::cli::OutputFormat;

pub const ENV_PREFIX: &str = "EXO";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Locations of per-user state.
    pub paths: PathsConfig,
    /// History log settings.
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Overrides `~/.exo`.
    pub home: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entries kept in `history.json`.
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Layer defaults, the config file and `EXO_*` environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        config::Config::builder()
            .add_source(
                config::Config::try_from(&Self::default())
                    .context("failed to encode default configuration")?,
            )
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.exo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "exo", "exo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".exo.toml"))
    }

    /// The per-user state root: `paths.home` or `~/.exo`.
    pub fn home(&self) -> exo_core::error::ExoResult<ExoHome> {
        match &self.paths.home {
            Some(root) => Ok(ExoHome::at(root)),
            None => ExoHome::locate(),
        }
    }

    /// Value of a dotted key, as printed by `exo config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => format!("{:?}", self.output.format).to_ascii_lowercase(),
            "paths.home" => self
                .paths
                .home
                .as_deref()
                .map(Path::display)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            "history.limit" => self.history.limit.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub const KEYS: [&'static str; 4] =
        ["output.no_color", "output.format", "paths.home", "history.limit"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert_eq!(cfg.history.limit, 100);
        assert!(cfg.paths.home.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[output]\nno_color = true\nformat = \"json\"\n\n[paths]\nhome = \"/srv/exo\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.paths.home.as_deref(), Some(Path::new("/srv/exo")));
        assert_eq!(cfg.history.limit, 100);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("history.limit").as_deref(), Some("100"));
        assert_eq!(cfg.get("output.format").as_deref(), Some("auto"));
        assert_eq!(cfg.get("paths.home").as_deref(), Some(""));
        assert!(cfg.get("defaults.lang").is_none());
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn explicit_home_wins() {
        let cfg = AppConfig {
            paths: PathsConfig {
                home: Some(PathBuf::from("/tmp/exo-home")),
            },
            ..AppConfig::default()
        };
        assert_eq!(cfg.home().unwrap().root(), Path::new("/tmp/exo-home"));
    }
}
