//! Installed template registries and plugins.
//!
//! Both are directories cloned from a git URL into a common root
//! (`~/.exo/templates` or `~/.exo/plugins`), named after the last URL
//! segment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};
use walkdir::WalkDir;

use exo_core::{
    application::ApplicationError,
    domain::DomainError,
    error::ExoResult,
};

use crate::external::{self, display_command};
use crate::filesystem::map_io_error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    pub name: String,
    pub path: PathBuf,
    pub template_count: usize,
}

/// One root directory of git-cloned packages.
#[derive(Debug, Clone)]
pub struct PackageDir {
    root: PathBuf,
    kind: &'static str,
}

impl PackageDir {
    pub fn registries(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            kind: "template registry",
        }
    }

    pub fn plugins(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            kind: "plugin",
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Installed packages sorted by name. A missing root is empty.
    pub fn installed(&self) -> ExoResult<Vec<InstalledPackage>> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Ok(Vec::new());
        };

        let mut packages: Vec<InstalledPackage> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .map(|path| InstalledPackage {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                template_count: count_templates(&path),
                path,
            })
            .collect();
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(packages)
    }

    /// `git clone --depth=1 <url>` into `<root>/<name>`.
    #[instrument(skip(self), fields(kind = self.kind))]
    pub fn install(&self, url: &str) -> ExoResult<InstalledPackage> {
        let name = name_from_url(url)?;
        let dest = self.root.join(&name);
        if dest.exists() {
            return Err(ApplicationError::AlreadyInstalled {
                kind: self.kind,
                name,
                path: dest,
            }
            .into());
        }

        if external::find_on_path("git").is_none() {
            return Err(ApplicationError::ExternalCommand {
                command: "git".into(),
                reason: "git is not installed or not on PATH".into(),
            }
            .into());
        }

        fs::create_dir_all(&self.root)
            .map_err(|e| map_io_error(&self.root, e, "create directory"))?;

        let dest_str = dest.to_string_lossy().into_owned();
        let args = ["clone", "--depth=1", url, dest_str.as_str()];
        let output = external::run("git", &args, &self.root)?;
        if !output.success {
            return Err(ApplicationError::ExternalCommand {
                command: display_command("git", &args),
                reason: output.message().to_string(),
            }
            .into());
        }

        info!(name = %name, "Installed {}", self.kind);
        Ok(InstalledPackage {
            template_count: count_templates(&dest),
            name,
            path: dest,
        })
    }

    /// Delete `<root>/<name>`.
    #[instrument(skip(self), fields(kind = self.kind))]
    pub fn remove(&self, name: &str) -> ExoResult<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(DomainError::InvalidValue {
                field: "name",
                value: name.to_string(),
                expected: "a single directory name",
            }
            .into());
        }

        let dest = self.root.join(name);
        if !dest.is_dir() {
            return Err(ApplicationError::NotInstalled {
                kind: self.kind,
                name: name.to_string(),
            }
            .into());
        }

        fs::remove_dir_all(&dest).map_err(|e| map_io_error(&dest, e, "remove directory"))?;
        info!(name, "Removed {}", self.kind);
        Ok(dest)
    }
}

/// Last URL segment without `.git`:
/// `https://github.com/acme/devops-templates.git` → `devops-templates`.
pub fn name_from_url(url: &str) -> Result<String, DomainError> {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default()
        .trim_end_matches(".git");

    if last.is_empty() || last == "." || last == ".." {
        return Err(DomainError::InvalidValue {
            field: "url",
            value: url.to_string(),
            expected: "a git URL ending in a repository name",
        });
    }
    Ok(last.to_string())
}

fn count_templates(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmpl"))
        .count()
}
