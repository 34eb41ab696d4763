//! Per-invocation wiring of adapters into core services.
//!
//! Built once in `main` after configuration is loaded. The registry and
//! render engine are explicit values owned here and lent to the services.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use exo_adapters::{
    ExoHome, FsStackDetector, HistoryEntry, JsonHistoryLog, LocalFilesystem, TeraRenderer,
    YamlConfigStore, load_plugins, standard_tiers,
};
use exo_core::{
    application::{
        AssetGenerator, ConfigResolver, DiffReporter, GeneratorRegistry, RenderEngine,
        TemplateResolver,
    },
    domain::{Generator, TemplateData, TemplateOverrides},
};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub struct AppContext {
    pub cwd: PathBuf,
    pub home: ExoHome,
    pub registry: GeneratorRegistry,
    pub engine: RenderEngine,
    pub store: YamlConfigStore,
    pub detector: FsStackDetector,
    pub history: JsonHistoryLog,
}

impl AppContext {
    /// Context for the current working directory.
    pub fn build(config: &AppConfig) -> CliResult<Self> {
        let cwd = std::env::current_dir()
            .with_cli_context(|| "could not determine the working directory")?;
        let home = config.home()?;
        Ok(Self::at(cwd, home, config.history.limit))
    }

    pub fn at(cwd: PathBuf, home: ExoHome, history_limit: usize) -> Self {
        debug!(cwd = %cwd.display(), home = %home.root().display(), "Building context");

        let mut registry = GeneratorRegistry::with_builtins();
        for plugin in load_plugins(&home.plugins_dir()) {
            let name = plugin.name().to_string();
            if registry.register(Box::new(plugin)).is_some() {
                info!(generation_type = %name, "Plugin shadows a built-in type");
            }
        }

        let engine = RenderEngine::new(
            TemplateResolver::new(standard_tiers(&cwd, &home)),
            Box::new(TeraRenderer::new()),
            Box::new(LocalFilesystem::new()),
        );
        let history = JsonHistoryLog::new(home.history_file()).with_limit(history_limit);

        Self {
            cwd,
            home,
            registry,
            engine,
            store: YamlConfigStore::new(),
            detector: FsStackDetector::new(),
            history,
        }
    }

    pub fn resolve_data(&self, overrides: &TemplateOverrides) -> TemplateData {
        ConfigResolver::new(&self.store, &self.detector).resolve(&self.cwd, overrides)
    }

    pub fn generator(&self) -> AssetGenerator<'_> {
        AssetGenerator::new(&self.registry, &self.engine)
    }

    pub fn differ(&self) -> DiffReporter<'_> {
        DiffReporter::new(&self.registry, &self.engine)
    }

    /// `dir` relative to the working directory, or the working directory.
    pub fn output_dir(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) => self.cwd.join(dir),
            None => self.cwd.clone(),
        }
    }

    pub fn project_config_path(&self) -> PathBuf {
        YamlConfigStore::path_for(&self.cwd)
    }

    /// Append to the history log. Failures are logged, never fatal.
    pub fn record(&self, command: &str, project: &str, details: impl Into<String>) {
        if let Err(e) = self
            .history
            .append(HistoryEntry::new(command, project, details))
        {
            warn!(error = %e, "Could not record history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plugins_join_the_registry() {
        let home = TempDir::new().unwrap();
        let plugin = home.path().join("plugins/fastapi");
        fs::create_dir_all(&plugin).unwrap();
        fs::write(
            plugin.join("plugin.toml"),
            "[plugin]\ndescription = \"FastAPI\"\n\n[[files]]\ntemplate = \"main.py.tmpl\"\noutput = \"app/main.py\"\n",
        )
        .unwrap();

        let ctx = AppContext::at(
            PathBuf::from("/w"),
            ExoHome::at(home.path()),
            10,
        );
        assert!(ctx.registry.contains("fastapi"));
        assert!(ctx.registry.contains("docker"));
    }

    #[test]
    fn output_dir_is_relative_to_cwd() {
        let home = TempDir::new().unwrap();
        let ctx = AppContext::at(PathBuf::from("/w"), ExoHome::at(home.path()), 10);
        assert_eq!(ctx.output_dir(None), Path::new("/w"));
        assert_eq!(ctx.output_dir(Some(Path::new("deploy"))), Path::new("/w/deploy"));
        assert_eq!(ctx.project_config_path(), Path::new("/w/.exo.yaml"));
    }

    #[test]
    fn record_writes_history() {
        let home = TempDir::new().unwrap();
        let ctx = AppContext::at(PathBuf::from("/w"), ExoHome::at(home.path()), 10);
        ctx.record("gen", "orders", "type=docker");

        let entries = ctx.history.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, "gen");
    }
}
