//! Domain value objects: Language, Database, CloudProvider, CiSystem,
//! Monitoring, LicenseKind and SourceTier.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO path logic. Every variant → template/output mapping lives in
//! `catalog.rs`. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the template mapping arm in `catalog.rs` (the compiler points at it)
//! 4. Add the bundled template file in `exo-adapters/templates/`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `Display` via `as_str` for the simple string enums below.
macro_rules! display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_via_as_str!(
    Language,
    Database,
    CloudProvider,
    CiSystem,
    Monitoring,
    LicenseKind,
    SourceTier
);

// ── Language ─────────────────────────────────────────────────────────────────

/// Primary language of the project being scaffolded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Node,
    Python,
    Java,
    Rust,
    #[default]
    Unknown,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Self::Go,
        Self::Node,
        Self::Python,
        Self::Java,
        Self::Rust,
        Self::Unknown,
    ];

    const EXPECTED: &'static str = "go, node, python, java, rust, unknown";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Node => "node",
            Self::Python => "python",
            Self::Java => "java",
            Self::Rust => "rust",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(Self::Go),
            "node" | "nodejs" | "javascript" | "js" | "typescript" | "ts" => Ok(Self::Node),
            "python" | "py" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "rust" | "rs" => Ok(Self::Rust),
            "unknown" | "" => Ok(Self::Unknown),
            other => Err(DomainError::InvalidValue {
                field: "language",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

/// Database engine the service talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    Mysql,
    Mongo,
    Redis,
    #[default]
    None,
}

impl Database {
    pub const ALL: [Database; 5] = [
        Self::Postgres,
        Self::Mysql,
        Self::Mongo,
        Self::Redis,
        Self::None,
    ];

    const EXPECTED: &'static str = "postgres, mysql, mongo, redis, none";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mongo => "mongo",
            Self::Redis => "redis",
            Self::None => "none",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "redis" => Ok(Self::Redis),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::InvalidValue {
                field: "database",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── CloudProvider ────────────────────────────────────────────────────────────

/// Cloud provider targeted by the infrastructure stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
    #[default]
    None,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 4] = [Self::Aws, Self::Gcp, Self::Azure, Self::None];

    const EXPECTED: &'static str = "aws, gcp, azure, none";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::None => "none",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for CloudProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" | "amazon" => Ok(Self::Aws),
            "gcp" | "google" => Ok(Self::Gcp),
            "azure" => Ok(Self::Azure),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::InvalidValue {
                field: "cloud provider",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── CiSystem ─────────────────────────────────────────────────────────────────

/// Continuous-integration system the pipeline targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiSystem {
    GithubActions,
    GitlabCi,
    #[default]
    None,
}

impl CiSystem {
    pub const ALL: [CiSystem; 3] = [Self::GithubActions, Self::GitlabCi, Self::None];

    const EXPECTED: &'static str = "github-actions, gitlab-ci, none";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GithubActions => "github-actions",
            Self::GitlabCi => "gitlab-ci",
            Self::None => "none",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for CiSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github-actions" | "github" | "gha" => Ok(Self::GithubActions),
            "gitlab-ci" | "gitlab" => Ok(Self::GitlabCi),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::InvalidValue {
                field: "CI system",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── Monitoring ───────────────────────────────────────────────────────────────

/// Monitoring stack wired into the generated assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Monitoring {
    Prometheus,
    #[default]
    None,
}

impl Monitoring {
    pub const ALL: [Monitoring; 2] = [Self::Prometheus, Self::None];

    const EXPECTED: &'static str = "prometheus, none";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prometheus => "prometheus",
            Self::None => "none",
        }
    }
}

impl FromStr for Monitoring {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prometheus" | "prom" => Ok(Self::Prometheus),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::InvalidValue {
                field: "monitoring stack",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── LicenseKind ──────────────────────────────────────────────────────────────

/// License text emitted by the `license` generation type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKind {
    #[default]
    Mit,
    Apache2,
    Gpl3,
}

impl LicenseKind {
    pub const ALL: [LicenseKind; 3] = [Self::Mit, Self::Apache2, Self::Gpl3];

    const EXPECTED: &'static str = "mit, apache2, gpl3";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "mit",
            Self::Apache2 => "apache2",
            Self::Gpl3 => "gpl3",
        }
    }
}

impl FromStr for LicenseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "apache2" | "apache" | "apache-2.0" => Ok(Self::Apache2),
            "gpl3" | "gpl" | "gpl-3.0" => Ok(Self::Gpl3),
            other => Err(DomainError::InvalidValue {
                field: "license type",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// ── SourceTier ───────────────────────────────────────────────────────────────

/// Storage tier a template was read from, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTier {
    /// Compiled into the binary.
    Bundled,
    /// `<cwd>/templates/`.
    ProjectLocal,
    /// `~/.exo/templates/` and installed registries below it.
    RemoteRegistry,
    /// `~/.exo/plugins/`.
    Plugin,
}

impl SourceTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::ProjectLocal => "project-local",
            Self::RemoteRegistry => "remote-registry",
            Self::Plugin => "plugin",
        }
    }
}
