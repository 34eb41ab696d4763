//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use exo_core::domain::{
    CiSystem, CloudProvider, Database, Language, LicenseKind, Monitoring, TemplateOverrides,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "exo",
    bin_name = "exo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} DevOps asset scaffolding",
    long_about = "Exo generates Dockerfiles, Kubernetes manifests, Helm charts, \
                  Terraform stacks, CI pipelines and more from templates, \
                  without overwriting your work.",
    after_help = "EXAMPLES:\n\
        \x20 exo init --non-interactive --name orders --lang go --provider aws\n\
        \x20 exo gen docker --dry-run\n\
        \x20 exo gen db --db postgres\n\
        \x20 exo diff k8s\n\
        \x20 exo completions bash > /usr/share/bash-completion/completions/exo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configure the project and generate its DevOps assets.
    #[command(
        about = "Initialise a project and generate its assets",
        after_help = "EXAMPLES:\n\
            \x20 exo init\n\
            \x20 exo init --non-interactive --name orders --lang go --ci github-actions\n\
            \x20 exo init --non-interactive --name api --provider gcp --db postgres"
    )]
    Init(InitArgs),

    /// Update `.exo.yaml`, starting from the stored values.
    #[command(about = "Re-run setup pre-filled from .exo.yaml")]
    Upgrade(UpgradeArgs),

    /// Add a single tool to an existing project.
    #[command(
        about = "Add a DevOps tool to the project",
        after_help = "TOOLS:\n\
            \x20 monitoring   Prometheus + Grafana stack\n\
            \x20 ci           CI/CD pipeline (GitHub Actions or GitLab CI)\n\
            \x20 k8s          Kubernetes manifests\n\
            \x20 infra        Terraform for a cloud provider\n\
            \x20 db           Database docker-compose\n\n\
            EXAMPLES:\n\
            \x20 exo add ci --ci gitlab-ci\n\
            \x20 exo add infra --provider aws"
    )]
    Add(AddArgs),

    /// Generate one asset type.
    #[command(
        visible_alias = "g",
        about = "Generate a single asset type",
        after_help = "EXAMPLES:\n\
            \x20 exo gen docker\n\
            \x20 exo gen infra --provider aws --dry-run\n\
            \x20 exo gen helm -o deploy/\n\
            \x20 exo gen license --license-type apache2"
    )]
    Gen(GenArgs),

    /// Preview what generating a type would change.
    #[command(about = "Show changes a generation would make")]
    Diff(DiffArgs),

    /// Report which assets are present.
    #[command(about = "Show generated assets and project config")]
    Status(StatusArgs),

    /// Run external validators against generated assets.
    #[command(
        about = "Validate generated assets with external tools",
        after_help = "EXAMPLES:\n\
            \x20 exo validate infra\n\
            \x20 exo validate all"
    )]
    Validate(ValidateArgs),

    /// List registered generation types.
    #[command(
        visible_alias = "ls",
        about = "List available generation types",
        after_help = "EXAMPLES:\n\
            \x20 exo list\n\
            \x20 exo list --format json"
    )]
    List(ListArgs),

    /// Manage remote template registries.
    #[command(
        subcommand,
        about = "Manage template registries",
        after_help = "EXAMPLES:\n\
            \x20 exo template add https://github.com/acme/exo-templates.git\n\
            \x20 exo template list\n\
            \x20 exo template remove exo-templates"
    )]
    Template(PackageCommands),

    /// Manage plugins.
    #[command(subcommand, about = "Manage plugins")]
    Plugin(PackageCommands),

    /// Show recent commands.
    #[command(about = "Show command history")]
    History(HistoryArgs),

    /// Inspect the tool configuration.
    #[command(
        subcommand,
        about = "Configuration management",
        after_help = "EXAMPLES:\n\
            \x20 exo config list\n\
            \x20 exo config get paths.home\n\
            \x20 exo config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 exo completions bash > ~/.local/share/bash-completion/completions/exo\n\
            \x20 exo completions zsh  > ~/.zfunc/_exo\n\
            \x20 exo completions fish > ~/.config/fish/completions/exo.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared data flags ─────────────────────────────────────────────────────────

/// Per-invocation template data overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Application name (defaults to `.exo.yaml` or the directory name).
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Application name")]
    pub name: Option<String>,

    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Language (go, node, python, java, rust)"
    )]
    pub language: Option<Language>,

    #[arg(long = "framework", value_name = "FRAMEWORK", help = "Framework name")]
    pub framework: Option<String>,

    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        help = "Cloud provider (aws, gcp, azure, none)"
    )]
    pub provider: Option<CloudProvider>,

    #[arg(
        long = "db",
        value_name = "DATABASE",
        help = "Database (postgres, mysql, mongo, redis, none)"
    )]
    pub db: Option<Database>,

    #[arg(
        long = "ci",
        value_name = "CI",
        help = "CI system (github-actions, gitlab-ci, none)"
    )]
    pub ci: Option<CiSystem>,

    #[arg(
        long = "monitoring",
        value_name = "STACK",
        help = "Monitoring stack (prometheus, none)"
    )]
    pub monitoring: Option<Monitoring>,

    #[arg(
        long = "port",
        value_name = "PORT",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Service port"
    )]
    pub port: Option<u16>,

    #[arg(
        long = "registry",
        value_name = "URL",
        help = "Container registry, e.g. ghcr.io/acme"
    )]
    pub registry: Option<String>,
}

impl DataArgs {
    pub fn overrides(&self) -> TemplateOverrides {
        TemplateOverrides {
            app_name: self.name.clone(),
            language: self.language,
            framework: self.framework.clone(),
            port: self.port,
            db: self.db,
            provider: self.provider,
            ci: self.ci,
            monitoring: self.monitoring,
            registry: self.registry.clone(),
            license: None,
        }
    }
}

/// Write-policy flags shared by generating commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct WriteArgs {
    /// Render everything but write nothing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Overwrite files that already exist.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── init / upgrade ────────────────────────────────────────────────────────────

/// Arguments for `exo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the wizard and take every answer from flags.
    #[arg(
        long = "non-interactive",
        help = "Skip the wizard and use flags (requires --name)"
    )]
    pub non_interactive: bool,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// Arguments for `exo upgrade`.
#[derive(Debug, Args)]
pub struct UpgradeArgs {
    /// Apply flag changes to `.exo.yaml` without prompting.
    #[arg(long = "non-interactive", help = "Apply flags without the wizard")]
    pub non_interactive: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `exo add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Tool to add: monitoring, ci, k8s, infra or db.
    #[arg(value_name = "TOOL")]
    pub tool: String,

    #[arg(
        long = "ci",
        value_name = "CI",
        help = "CI system (github-actions, gitlab-ci)"
    )]
    pub ci: Option<CiSystem>,

    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        help = "Cloud provider for infra (aws, gcp, azure)"
    )]
    pub provider: Option<CloudProvider>,

    #[arg(
        long = "db",
        value_name = "DATABASE",
        help = "Database (postgres, mysql, mongo, redis)"
    )]
    pub db: Option<Database>,

    #[command(flatten)]
    pub write: WriteArgs,
}

impl AddArgs {
    pub fn overrides(&self) -> TemplateOverrides {
        TemplateOverrides {
            ci: self.ci,
            provider: self.provider,
            db: self.db,
            ..TemplateOverrides::default()
        }
    }
}

// ── gen / diff ────────────────────────────────────────────────────────────────

/// Arguments for `exo gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Generation type, see `exo list`.
    #[arg(value_name = "TYPE")]
    pub generation_type: String,

    /// Write below this directory instead of the current one.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long = "license-type",
        value_name = "LICENSE",
        help = "License for `exo gen license` (mit, apache2, gpl3)"
    )]
    pub license: Option<LicenseKind>,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

impl GenArgs {
    pub fn overrides(&self) -> TemplateOverrides {
        TemplateOverrides {
            license: self.license,
            ..self.data.overrides()
        }
    }
}

/// Arguments for `exo diff`.
#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Generation type, see `exo list`.
    #[arg(value_name = "TYPE")]
    pub generation_type: String,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Compare against this directory"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long = "license-type", value_name = "LICENSE", help = "License kind")]
    pub license: Option<LicenseKind>,

    #[command(flatten)]
    pub data: DataArgs,
}

impl DiffArgs {
    pub fn overrides(&self) -> TemplateOverrides {
        TemplateOverrides {
            license: self.license,
            ..self.data.overrides()
        }
    }
}

// ── status / validate ─────────────────────────────────────────────────────────

/// Arguments for `exo status`.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Also summarise how each present file differs from a fresh render.
    #[arg(long = "diff", help = "Show per-file change summaries")]
    pub diff: bool,
}

/// Arguments for `exo validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(value_enum, value_name = "TARGET", help = "What to validate")]
    pub target: ValidateTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateTarget {
    /// `terraform validate` for every `infra/<provider>`.
    Infra,
    /// `kubectl apply --dry-run=client` on `k8s/`.
    K8s,
    /// `docker build --check`, falling back to hadolint.
    Docker,
    All,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `exo list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── template / plugin ─────────────────────────────────────────────────────────

/// Subcommands shared by `exo template` and `exo plugin`.
#[derive(Debug, Subcommand)]
pub enum PackageCommands {
    /// Show installed packages.
    List,
    /// Clone a git repository.
    Add {
        /// Repository URL; the last path segment becomes the name.
        url: String,
    },
    /// Delete an installed package.
    Remove {
        name: String,
    },
}

// ── history ───────────────────────────────────────────────────────────────────

/// Arguments for `exo history`.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Delete the history file.
    #[arg(long = "clear", help = "Clear the history")]
    pub clear: bool,

    /// Number of entries to show, newest first.
    #[arg(
        long = "limit",
        value_name = "N",
        default_value_t = 20,
        help = "Number of entries to show"
    )]
    pub limit: usize,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `exo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `exo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.home`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
