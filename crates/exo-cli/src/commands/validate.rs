//! `exo validate`: run external linters over generated assets.
//!
//! Tools that are not installed, and assets that were never generated, are
//! reported as skipped rather than failed.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use exo_adapters::external::{self, CommandOutput};
use exo_core::domain::CloudProvider;

use crate::{
    cli::{ValidateArgs, ValidateTarget},
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CheckState {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Check {
    pub target: &'static str,
    pub name: String,
    pub state: CheckState,
    pub message: String,
}

impl Check {
    fn new(
        target: &'static str,
        name: impl Into<String>,
        state: CheckState,
        message: impl Into<String>,
    ) -> Self {
        Self {
            target,
            name: name.into(),
            state,
            message: message.into(),
        }
    }

    fn from_output(
        target: &'static str,
        name: impl Into<String>,
        out: &CommandOutput,
        ok: &str,
    ) -> Self {
        if out.success {
            Self::new(target, name, CheckState::Passed, ok)
        } else {
            Self::new(target, name, CheckState::Failed, out.message())
        }
    }
}

/// Seam over PATH lookup and process execution.
pub(crate) trait Toolbox {
    fn has(&self, program: &str) -> bool;
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CliResult<CommandOutput>;
}

struct SystemTools;

impl Toolbox for SystemTools {
    fn has(&self, program: &str) -> bool {
        external::find_on_path(program).is_some()
    }

    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> CliResult<CommandOutput> {
        Ok(external::run(program, args, cwd)?)
    }
}

#[instrument(skip_all, fields(target = ?args.target))]
pub fn execute(args: ValidateArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let checks = run_checks(args.target, &ctx.cwd, &SystemTools)?;

    if output.is_json() {
        output.json(&checks)?;
    } else {
        let mut current = "";
        for check in &checks {
            if check.target != current {
                current = check.target;
                output.header(&format!("{current}:"))?;
            }
            let line = format!("{}: {}", check.name, check.message);
            match check.state {
                CheckState::Passed => output.success(&line)?,
                CheckState::Failed => output.error(&line)?,
                CheckState::Skipped => output.warning(&line)?,
            }
        }
    }

    let failed = checks
        .iter()
        .filter(|c| c.state == CheckState::Failed)
        .count();
    info!(checks = checks.len(), failed, "Validation finished");
    if failed > 0 {
        return Err(CliError::ValidationFailed { count: failed });
    }
    Ok(())
}

pub(crate) fn run_checks(
    target: ValidateTarget,
    cwd: &Path,
    tools: &dyn Toolbox,
) -> CliResult<Vec<Check>> {
    let mut checks = Vec::new();
    if matches!(target, ValidateTarget::Infra | ValidateTarget::All) {
        checks.extend(check_infra(cwd, tools)?);
    }
    if matches!(target, ValidateTarget::K8s | ValidateTarget::All) {
        checks.extend(check_k8s(cwd, tools)?);
    }
    if matches!(target, ValidateTarget::Docker | ValidateTarget::All) {
        checks.extend(check_docker(cwd, tools)?);
    }
    Ok(checks)
}

fn check_infra(cwd: &Path, tools: &dyn Toolbox) -> CliResult<Vec<Check>> {
    const T: &str = "terraform";
    if !tools.has("terraform") {
        return Ok(vec![Check::new(
            T,
            "terraform",
            CheckState::Skipped,
            "terraform not found on PATH",
        )]);
    }

    let mut checks = Vec::new();
    for provider in CloudProvider::ALL.iter().filter(|p| !p.is_none()) {
        let dir = cwd.join("infra").join(provider.as_str());
        if !dir.is_dir() {
            continue;
        }
        let chdir = format!("-chdir={}", dir.display());
        let name = format!("infra/{provider}");

        let init = tools.run(
            "terraform",
            &[chdir.as_str(), "init", "-backend=false", "-input=false"],
            cwd,
        )?;
        if !init.success {
            checks.push(Check::new(T, name, CheckState::Failed, init.message()));
            continue;
        }
        let validate = tools.run("terraform", &[chdir.as_str(), "validate"], cwd)?;
        checks.push(Check::from_output(T, name, &validate, "configuration is valid"));
    }

    if checks.is_empty() {
        checks.push(Check::new(
            T,
            "infra",
            CheckState::Skipped,
            "no infra/ directory; run `exo gen infra` first",
        ));
    }
    Ok(checks)
}

fn check_k8s(cwd: &Path, tools: &dyn Toolbox) -> CliResult<Vec<Check>> {
    const T: &str = "kubernetes";
    let dir = cwd.join("k8s");
    if !dir.is_dir() {
        return Ok(vec![Check::new(
            T,
            "k8s",
            CheckState::Skipped,
            "no k8s/ directory; run `exo gen k8s` first",
        )]);
    }
    if !tools.has("kubectl") {
        return Ok(vec![Check::new(
            T,
            "kubectl",
            CheckState::Skipped,
            "kubectl not found on PATH",
        )]);
    }

    let dir = dir.display().to_string();
    let out = tools.run(
        "kubectl",
        &["apply", "--dry-run=client", "-f", dir.as_str()],
        cwd,
    )?;
    Ok(vec![Check::from_output(
        T,
        "k8s",
        &out,
        "manifests are valid (client dry run)",
    )])
}

fn check_docker(cwd: &Path, tools: &dyn Toolbox) -> CliResult<Vec<Check>> {
    const T: &str = "docker";
    let dockerfile = cwd.join("Dockerfile");
    if !dockerfile.is_file() {
        return Ok(vec![Check::new(
            T,
            "Dockerfile",
            CheckState::Skipped,
            "no Dockerfile; run `exo gen docker` first",
        )]);
    }
    let dockerfile = dockerfile.display().to_string();
    let context = cwd.display().to_string();

    if tools.has("docker") {
        let out = tools.run(
            "docker",
            &["build", "--check", "-f", dockerfile.as_str(), context.as_str()],
            cwd,
        )?;
        if out.success {
            return Ok(vec![Check::new(
                T,
                "Dockerfile",
                CheckState::Passed,
                "docker build --check passed",
            )]);
        }
        // Older engines lack `--check`; without hadolint we cannot tell a lint
        // failure from an unsupported flag.
        if !tools.has("hadolint") {
            return Ok(vec![Check::new(
                T,
                "Dockerfile",
                CheckState::Skipped,
                format!(
                    "docker build --check failed (requires Docker 24+); install hadolint for offline linting: {}",
                    out.message()
                ),
            )]);
        }
    }

    if tools.has("hadolint") {
        let out = tools.run("hadolint", &[dockerfile.as_str()], cwd)?;
        return Ok(vec![Check::from_output(T, "Dockerfile", &out, "hadolint passed")]);
    }

    Ok(vec![Check::new(
        T,
        "Dockerfile",
        CheckState::Skipped,
        "neither docker nor hadolint found on PATH",
    )])
}
