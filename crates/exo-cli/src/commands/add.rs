//! `exo add <tool>`: add one DevOps tool to an existing project.

use std::str::FromStr;

use tracing::instrument;

use exo_core::domain::{CiSystem, WritePolicy};

use crate::{
    cli::AddArgs,
    commands::{ensure_success, run_generation},
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Tools `exo add` accepts, each backed by one generation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Monitoring,
    Ci,
    K8s,
    Infra,
    Db,
}

impl Tool {
    pub const NAMES: &'static [&'static str] = &["monitoring", "ci", "k8s", "infra", "db"];

    pub const fn generation_type(self) -> &'static str {
        match self {
            Self::Monitoring => "monitoring",
            Self::Ci => "ci",
            Self::K8s => "k8s",
            Self::Infra => "infra",
            Self::Db => "db",
        }
    }
}

impl FromStr for Tool {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monitoring" => Ok(Self::Monitoring),
            "ci" => Ok(Self::Ci),
            "k8s" => Ok(Self::K8s),
            "infra" => Ok(Self::Infra),
            "db" => Ok(Self::Db),
            _ => Err(CliError::UnknownTool {
                tool: s.to_string(),
                available: Self::NAMES,
            }),
        }
    }
}

#[instrument(skip_all, fields(tool = %args.tool))]
pub fn execute(args: AddArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let tool: Tool = args.tool.parse()?;
    let mut data = ctx.resolve_data(&args.overrides());
    if tool == Tool::Ci && data.ci.is_none() {
        data.ci = CiSystem::GithubActions;
    }

    output.info(&format!("Adding {} to '{}'", tool.generation_type(), data.app_name))?;

    let policy = WritePolicy::new(args.write.dry_run, args.write.force);
    let result = run_generation(
        ctx,
        output,
        tool.generation_type(),
        &ctx.cwd,
        &data,
        policy,
    )?;

    if output.is_json() {
        output.json(&result)?;
    }
    ensure_success(&result)?;

    if !policy.dry_run {
        ctx.record("add", &data.app_name, format!("tool={}", tool.generation_type()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_name_parses_to_its_type() {
        for name in Tool::NAMES {
            let tool: Tool = name.parse().unwrap();
            assert_eq!(tool.generation_type(), *name);
        }
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = "terraform".parse::<Tool>().unwrap_err();
        assert!(matches!(err, CliError::UnknownTool { ref tool, .. } if tool == "terraform"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("K8S".parse::<Tool>().unwrap(), Tool::K8s);
    }
}
