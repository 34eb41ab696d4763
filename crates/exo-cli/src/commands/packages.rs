//! `exo template ...` and `exo plugin ...`: git-cloned package directories.

use tracing::instrument;

use exo_adapters::PackageDir;

use crate::{cli::PackageCommands, context::AppContext, error::CliResult, output::OutputManager};

/// Which package directory a command manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Template,
    Plugin,
}

impl PackageKind {
    fn label(self) -> &'static str {
        match self {
            Self::Template => "template registry",
            Self::Plugin => "plugin",
        }
    }

    fn dir(self, ctx: &AppContext) -> PackageDir {
        match self {
            Self::Template => PackageDir::registries(ctx.home.templates_dir()),
            Self::Plugin => PackageDir::plugins(ctx.home.plugins_dir()),
        }
    }

    fn command(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Plugin => "plugin",
        }
    }
}

#[instrument(skip(ctx, output))]
pub fn execute(
    kind: PackageKind,
    cmd: PackageCommands,
    ctx: &AppContext,
    output: &OutputManager,
) -> CliResult<()> {
    let dir = kind.dir(ctx);

    match cmd {
        PackageCommands::List => {
            let installed = dir.installed()?;
            if output.is_json() {
                output.json(&installed)?;
                return Ok(());
            }
            if installed.is_empty() {
                output.info(&format!(
                    "No {} installed. Add one with `exo {} add <git-url>`",
                    kind.label(),
                    kind.command()
                ))?;
                return Ok(());
            }
            output.header(&format!("Installed ({}):", dir.root().display()))?;
            for package in &installed {
                output.print(&format!(
                    "  {:<24} {}",
                    package.name,
                    output.muted(&format!("{} template(s)", package.template_count))
                ))?;
            }
        }

        PackageCommands::Add { url } => {
            let spinner = output.spinner(&format!("Cloning {url}..."));
            let installed = dir.install(&url);
            spinner.finish_and_clear();
            let installed = installed?;

            if output.is_json() {
                output.json(&installed)?;
            }
            output.success(&format!(
                "Installed {} '{}' ({} template(s)) at {}",
                kind.label(),
                installed.name,
                installed.template_count,
                installed.path.display()
            ))?;
            if kind == PackageKind::Plugin {
                output.info("Run `exo list` to see the generation types it adds")?;
            }
        }

        PackageCommands::Remove { name } => {
            let path = dir.remove(&name)?;
            output.success(&format!(
                "Removed {} '{name}' ({})",
                kind.label(),
                path.display()
            ))?;
        }
    }

    Ok(())
}
