//! `exo status`: which generated assets exist in the working directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use exo_core::{
    application::{FileDiff, ProjectConfigStore},
    domain::{ProjectConfig, TemplateOverrides},
};

use crate::{
    cli::StatusArgs, commands::diff::print_file_changes, context::AppContext, error::CliResult,
    output::OutputManager,
};

struct Asset {
    label: &'static str,
    path: &'static str,
    /// Type that produces this asset, previewed by `--diff`.
    generation_type: Option<&'static str>,
}

struct Group {
    title: &'static str,
    assets: &'static [Asset],
}

const fn asset(label: &'static str, path: &'static str, ty: &'static str) -> Asset {
    Asset {
        label,
        path,
        generation_type: Some(ty),
    }
}

const GROUPS: &[Group] = &[
    Group {
        title: "Containers",
        assets: &[
            asset("Dockerfile", "Dockerfile", "docker"),
            asset("docker-compose", "docker-compose.yml", "docker-compose"),
        ],
    },
    Group {
        title: "CI/CD",
        assets: &[
            asset("GitHub Actions", ".github/workflows", "ci"),
            asset("GitLab CI", ".gitlab-ci.yml", "ci"),
        ],
    },
    Group {
        title: "Kubernetes",
        assets: &[
            asset("Manifests", "k8s", "k8s"),
            asset("Helm chart", "charts", "helm"),
        ],
    },
    Group {
        title: "Infrastructure (Terraform)",
        assets: &[
            asset("AWS", "infra/aws", "infra"),
            asset("GCP", "infra/gcp", "infra"),
            asset("Azure", "infra/azure", "infra"),
        ],
    },
    Group {
        title: "Databases",
        assets: &[
            asset("PostgreSQL", "docker-compose.postgres.yml", "db"),
            asset("MySQL", "docker-compose.mysql.yml", "db"),
            asset("MongoDB", "docker-compose.mongo.yml", "db"),
            asset("Redis", "docker-compose.redis.yml", "db"),
        ],
    },
    Group {
        title: "Monitoring",
        assets: &[
            asset("Prometheus", "monitoring", "monitoring"),
            asset("Alert rules", "alerts.yml", "alerts"),
            asset("Grafana dashboard", "grafana_dashboard.json", "grafana"),
        ],
    },
    Group {
        title: "Project files",
        assets: &[
            asset("Makefile", "Makefile", "makefile"),
            asset(".env.example", ".env.example", "env"),
            asset(".gitignore", ".gitignore", "gitignore"),
            asset("README", "README.md", "readme"),
            asset("LICENSE", "LICENSE", "license"),
            Asset {
                label: "Exo config",
                path: ".exo.yaml",
                generation_type: None,
            },
        ],
    },
];

#[derive(Debug, Serialize)]
pub(crate) struct AssetStatus {
    pub group: &'static str,
    pub label: &'static str,
    pub path: PathBuf,
    pub present: bool,
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct TypeDiff {
    generation_type: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<FileDiff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    present: usize,
    total: usize,
    assets: Vec<AssetStatus>,
    config: Option<ProjectConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diffs: Vec<TypeDiff>,
}

/// Presence and metadata of every known asset below `root`.
pub(crate) fn scan(root: &Path) -> Vec<AssetStatus> {
    GROUPS
        .iter()
        .flat_map(|group| {
            group.assets.iter().map(move |asset| {
                let path = root.join(asset.path);
                let meta = fs::metadata(&path).ok();
                AssetStatus {
                    group: group.title,
                    label: asset.label,
                    path: PathBuf::from(asset.path),
                    present: meta.is_some(),
                    is_dir: meta.as_ref().is_some_and(fs::Metadata::is_dir),
                    size: meta.as_ref().filter(|m| m.is_file()).map(fs::Metadata::len),
                    modified: meta
                        .and_then(|m| m.modified().ok())
                        .map(DateTime::<Utc>::from),
                }
            })
        })
        .collect()
}

/// Generation types that produced at least one present asset, in catalogue order.
fn present_types(assets: &[AssetStatus]) -> Vec<&'static str> {
    let present: BTreeSet<&Path> = assets
        .iter()
        .filter(|a| a.present)
        .map(|a| a.path.as_path())
        .collect();

    let mut seen = BTreeSet::new();
    GROUPS
        .iter()
        .flat_map(|g| g.assets.iter())
        .filter(|a| present.contains(Path::new(a.path)))
        .filter_map(|a| a.generation_type)
        .filter(|ty| seen.insert(*ty))
        .collect()
}

#[instrument(skip_all, fields(diff = args.diff))]
pub fn execute(args: StatusArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let assets = scan(&ctx.cwd);
    let config = ctx.store.load(&ctx.cwd)?;
    let present = assets.iter().filter(|a| a.present).count();
    debug!(present, total = assets.len(), "Scanned assets");

    let diffs = if args.diff {
        let data = ctx.resolve_data(&TemplateOverrides::default());
        present_types(&assets)
            .into_iter()
            .map(|ty| match ctx.differ().diff_type(ty, &ctx.cwd, &data) {
                Ok(files) => TypeDiff {
                    generation_type: ty,
                    files,
                    error: None,
                },
                Err(e) => TypeDiff {
                    generation_type: ty,
                    files: Vec::new(),
                    error: Some(e.to_string()),
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    let report = StatusReport {
        present,
        total: assets.len(),
        assets,
        config,
        diffs,
    };

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }
    print_report(output, &report)
}

fn print_report(output: &OutputManager, report: &StatusReport) -> CliResult<()> {
    output.header("Exo project status")?;

    let mut current = "";
    for asset in &report.assets {
        if asset.group != current {
            current = asset.group;
            output.print("")?;
            output.print(&format!("  {current}"))?;
        }
        if asset.present {
            output.success(&format!(
                "{:<22} {:<28} {}",
                asset.label,
                asset.path.display(),
                output.muted(&describe(asset))
            ))?;
        } else {
            output.print(&output.muted(&format!("  ○ {:<22} {}", asset.label, asset.path.display())))?;
        }
    }
    output.print("")?;
    output.print(&output.muted(&format!(
        "  {} / {} assets present",
        report.present, report.total
    )))?;

    match &report.config {
        Some(config) => {
            output.header("Config (.exo.yaml)")?;
            output.print(&format!("  Name:       {}", config.name))?;
            output.print(&format!("  Language:   {}", config.language))?;
            output.print(&format!("  Provider:   {}", config.provider))?;
            output.print(&format!("  CI/CD:      {}", config.ci))?;
            output.print(&format!("  Monitoring: {}", config.monitoring))?;
            if !config.db.is_none() {
                output.print(&format!("  Database:   {}", config.db))?;
            }
        }
        None => output.info("No .exo.yaml here; run `exo init` to create one")?,
    }

    for diff in &report.diffs {
        output.header(&format!("Changes for {}", diff.generation_type))?;
        if let Some(error) = &diff.error {
            output.warning(error)?;
        }
        for file in &diff.files {
            print_file_changes(output, file)?;
        }
    }
    Ok(())
}

/// `"1.2 KB • 3h ago"` for files, `"dir • 3h ago"` for directories.
fn describe(asset: &AssetStatus) -> String {
    let age = asset
        .modified
        .and_then(|m| SystemTime::from(m).elapsed().ok())
        .map(format_age)
        .unwrap_or_default();
    match asset.size {
        Some(size) => format!("{} • {age}", format_size(size)),
        None => format!("dir • {age}"),
    }
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}

pub(crate) fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}
