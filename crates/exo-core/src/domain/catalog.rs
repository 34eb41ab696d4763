//! Built-in generation types.
//!
//! Every built-in type is one [`BuiltinType`] variant. Names, descriptions,
//! requirements, failure policies and manifests are exhaustive `match`
//! tables, so adding a variant (here or in `value_objects.rs`) makes the
//! compiler point at every mapping that needs a new arm.
//!
//! Template identifiers are relative to the logical `templates/` root and
//! must exist in `exo-adapters/templates/`.

use std::str::FromStr;

use crate::domain::{
    CiSystem, CloudProvider, Database, DomainError, FailurePolicy, FileMapping, Language,
    LicenseKind, RelativePath, Requirements, generator::Generator, template_data::TemplateData,
};

/// Every generation type that ships with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Docker,
    Infra,
    K8s,
    Helm,
    Ci,
    Db,
    Monitoring,
    DockerCompose,
    Makefile,
    Env,
    Gitignore,
    Grafana,
    Alerts,
    Readme,
    License,
    PreCommit,
    Devcontainer,
    Renovate,
    Dependabot,
    Sonarqube,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 20] = [
        Self::Docker,
        Self::Infra,
        Self::K8s,
        Self::Helm,
        Self::Ci,
        Self::Db,
        Self::Monitoring,
        Self::DockerCompose,
        Self::Makefile,
        Self::Env,
        Self::Gitignore,
        Self::Grafana,
        Self::Alerts,
        Self::Readme,
        Self::License,
        Self::PreCommit,
        Self::Devcontainer,
        Self::Renovate,
        Self::Dependabot,
        Self::Sonarqube,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Infra => "infra",
            Self::K8s => "k8s",
            Self::Helm => "helm",
            Self::Ci => "ci",
            Self::Db => "db",
            Self::Monitoring => "monitoring",
            Self::DockerCompose => "docker-compose",
            Self::Makefile => "makefile",
            Self::Env => "env",
            Self::Gitignore => "gitignore",
            Self::Grafana => "grafana",
            Self::Alerts => "alerts",
            Self::Readme => "readme",
            Self::License => "license",
            Self::PreCommit => "pre-commit",
            Self::Devcontainer => "devcontainer",
            Self::Renovate => "renovate",
            Self::Dependabot => "dependabot",
            Self::Sonarqube => "sonarqube",
        }
    }

    const fn summary(&self) -> &'static str {
        match self {
            Self::Docker => "Language-aware Dockerfile and .dockerignore",
            Self::Infra => "Terraform stack for the selected cloud provider",
            Self::K8s => "Kubernetes deployment, service and ingress manifests",
            Self::Helm => "Helm chart wrapping the Kubernetes manifests",
            Self::Ci => "CI pipeline for GitHub Actions or GitLab CI",
            Self::Db => "docker-compose file for the selected database",
            Self::Monitoring => "Prometheus scrape config and monitoring compose stack",
            Self::DockerCompose => "docker-compose file for local development",
            Self::Makefile => "Makefile with build, test and deploy targets",
            Self::Env => "Example environment file",
            Self::Gitignore => "Language-aware .gitignore",
            Self::Grafana => "Grafana dashboard for the service",
            Self::Alerts => "Prometheus alerting rules",
            Self::Readme => "README describing the generated assets",
            Self::License => "LICENSE file (--license-type mit|apache2|gpl3)",
            Self::PreCommit => "pre-commit hook configuration",
            Self::Devcontainer => "VS Code devcontainer definition",
            Self::Renovate => "Renovate dependency update config",
            Self::Dependabot => "Dependabot dependency update config",
            Self::Sonarqube => "SonarQube project properties",
        }
    }

    const fn required(&self) -> Requirements {
        match self {
            Self::Infra => Requirements {
                provider: true,
                database: false,
            },
            Self::Db => Requirements {
                provider: false,
                database: true,
            },
            _ => Requirements::NONE,
        }
    }

    const fn policy(&self) -> FailurePolicy {
        match self {
            // Files within these stacks reference each other; a partial set
            // does not apply cleanly.
            Self::Infra | Self::K8s | Self::Helm => FailurePolicy::StopOnFirstError,
            _ => FailurePolicy::Continue,
        }
    }

    fn files(&self, data: &TemplateData) -> Result<Vec<FileMapping>, DomainError> {
        let single = |template: &str, output: &str| -> Result<Vec<FileMapping>, DomainError> {
            Ok(vec![FileMapping::new(template, output)?])
        };

        match self {
            Self::Docker => Ok(vec![
                FileMapping::new(dockerfile_template(data.language), "Dockerfile")?,
                FileMapping::new("docker/dockerignore.tmpl", ".dockerignore")?,
            ]),
            Self::Infra => {
                let Some(dir) = provider_dir(data.provider) else {
                    return Err(missing(self.as_str(), "cloud provider", "provider"));
                };
                ["main.tf", "variables.tf", "provider.tf"]
                    .into_iter()
                    .map(|file| {
                        FileMapping::new(
                            format!("terraform/{dir}/{file}.tmpl"),
                            format!("infra/{dir}/{file}"),
                        )
                    })
                    .collect()
            }
            Self::K8s => ["deployment", "service", "ingress"]
                .into_iter()
                .map(|kind| {
                    FileMapping::new(
                        format!("k8s/{kind}.yaml.tmpl"),
                        format!("k8s/{kind}.yaml"),
                    )
                })
                .collect(),
            Self::Helm => {
                let chart = RelativePath::try_new("charts")?.join(chart_dir(data))?;
                let mut files = Vec::with_capacity(5);
                for file in ["Chart.yaml", "values.yaml"] {
                    files.push(FileMapping::new(
                        format!("helm/{file}.tmpl"),
                        chart.join(file)?.into_path_buf(),
                    )?);
                }
                for kind in ["deployment", "service", "ingress"] {
                    files.push(FileMapping::new(
                        format!("helm/templates/{kind}.yaml.tmpl"),
                        chart.join(format!("templates/{kind}.yaml"))?.into_path_buf(),
                    )?);
                }
                Ok(files)
            }
            Self::Ci => match data.ci {
                CiSystem::GitlabCi => single("ci/gitlab-ci.yml.tmpl", ".gitlab-ci.yml"),
                // GitHub Actions is the default pipeline.
                CiSystem::GithubActions | CiSystem::None => {
                    let (template, workflow) = github_workflow(data.language);
                    single(template, &format!(".github/workflows/{workflow}.yml"))
                }
            },
            Self::Db => {
                let Some(db) = database_key(data.db) else {
                    return Err(missing(self.as_str(), "database", "db"));
                };
                single(
                    &format!("db/{db}.yml.tmpl"),
                    &format!("docker-compose.{db}.yml"),
                )
            }
            Self::Monitoring => Ok(vec![
                FileMapping::new(
                    "monitoring/prometheus.yml.tmpl",
                    "monitoring/prometheus.yml",
                )?,
                FileMapping::new(
                    "monitoring/docker-compose.monitoring.yml.tmpl",
                    "monitoring/docker-compose.monitoring.yml",
                )?,
            ]),
            Self::DockerCompose => single("compose/docker-compose.yml.tmpl", "docker-compose.yml"),
            Self::Makefile => single("makefile/Makefile.tmpl", "Makefile"),
            Self::Env => single("env/env.example.tmpl", ".env.example"),
            Self::Gitignore => single("gitignore/gitignore.tmpl", ".gitignore"),
            Self::Grafana => single("grafana/dashboard.json.tmpl", "grafana_dashboard.json"),
            Self::Alerts => single("alerts/alerts.yml.tmpl", "alerts.yml"),
            Self::Readme => single("readme/README.md.tmpl", "README.md"),
            Self::License => single(license_template(data.license), "LICENSE"),
            Self::PreCommit => single(
                "pre-commit/pre-commit-config.yaml.tmpl",
                ".pre-commit-config.yaml",
            ),
            Self::Devcontainer => single(
                "devcontainer/devcontainer.json.tmpl",
                ".devcontainer/devcontainer.json",
            ),
            Self::Renovate => single("renovate/renovate.json.tmpl", "renovate.json"),
            Self::Dependabot => single("dependabot/dependabot.yml.tmpl", ".github/dependabot.yml"),
            Self::Sonarqube => single(
                "sonarqube/sonar-project.properties.tmpl",
                "sonar-project.properties",
            ),
        }
    }
}

impl FromStr for BuiltinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownGenerationType {
                name: s.to_string(),
                available: Self::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}

impl Generator for BuiltinType {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn description(&self) -> &str {
        self.summary()
    }

    fn requirements(&self) -> Requirements {
        self.required()
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy()
    }

    fn manifest(&self, data: &TemplateData) -> Result<Vec<FileMapping>, DomainError> {
        self.files(data)
    }
}

// ── Variant → path tables ────────────────────────────────────────────────────

const fn dockerfile_template(language: Language) -> &'static str {
    match language {
        Language::Go => "docker/go.Dockerfile.tmpl",
        Language::Node => "docker/node.Dockerfile.tmpl",
        Language::Python => "docker/python.Dockerfile.tmpl",
        Language::Java => "docker/java.Dockerfile.tmpl",
        Language::Rust => "docker/rust.Dockerfile.tmpl",
        Language::Unknown => "docker/generic.Dockerfile.tmpl",
    }
}

/// `(template, workflow file stem)` for GitHub Actions.
const fn github_workflow(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::Go => ("ci/github/go.yml.tmpl", "go"),
        Language::Node => ("ci/github/node.yml.tmpl", "node"),
        Language::Python => ("ci/github/python.yml.tmpl", "python"),
        Language::Java => ("ci/github/java.yml.tmpl", "java"),
        Language::Rust => ("ci/github/rust.yml.tmpl", "rust"),
        Language::Unknown => ("ci/github/generic.yml.tmpl", "ci"),
    }
}

const fn provider_dir(provider: CloudProvider) -> Option<&'static str> {
    match provider {
        CloudProvider::Aws => Some("aws"),
        CloudProvider::Gcp => Some("gcp"),
        CloudProvider::Azure => Some("azure"),
        CloudProvider::None => None,
    }
}

const fn database_key(db: Database) -> Option<&'static str> {
    match db {
        Database::Postgres => Some("postgres"),
        Database::Mysql => Some("mysql"),
        Database::Mongo => Some("mongo"),
        Database::Redis => Some("redis"),
        Database::None => None,
    }
}

const fn license_template(license: LicenseKind) -> &'static str {
    match license {
        LicenseKind::Mit => "license/mit.tmpl",
        LicenseKind::Apache2 => "license/apache2.tmpl",
        LicenseKind::Gpl3 => "license/gpl3.tmpl",
    }
}

fn chart_dir(data: &TemplateData) -> &str {
    if data.app_name.is_empty() {
        "app"
    } else {
        &data.app_name
    }
}

fn missing(generation_type: &str, option: &'static str, flag: &'static str) -> DomainError {
    DomainError::MissingRequiredOption {
        generation_type: generation_type.to_string(),
        option,
        flag,
    }
}
