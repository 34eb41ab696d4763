//! `exo init`: configure the project, generate its assets, save `.exo.yaml`.

use tracing::{info, instrument, warn};

use exo_core::{
    application::ProjectConfigStore,
    domain::{DomainValidator, Monitoring, ProjectConfig, TemplateData, WritePolicy},
    error::ExoError,
};

use crate::{
    cli::InitArgs,
    commands::{failure_lines, run_generation},
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
    wizard,
};

/// Generation types implied by the answers, in generation order.
pub(crate) fn init_plan(data: &TemplateData) -> Vec<&'static str> {
    let mut plan = Vec::new();
    if data.language.is_known() {
        plan.push("docker");
    }
    if !data.provider.is_none() {
        plan.push("infra");
    }
    if !data.ci.is_none() {
        plan.push("ci");
    }
    if data.monitoring == Monitoring::Prometheus {
        plan.push("monitoring");
    }
    if !data.db.is_none() {
        plan.push("db");
    }
    plan
}

#[instrument(skip_all, fields(non_interactive = args.non_interactive))]
pub fn execute(args: InitArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let overrides = args.data.overrides();

    let data = if args.non_interactive {
        if overrides.app_name.is_none() {
            return Err(CliError::InvalidInput {
                message: "--name is required with --non-interactive".into(),
                source: None,
            });
        }
        ctx.resolve_data(&overrides)
    } else {
        wizard::run(&ctx.resolve_data(&overrides))?
    };
    DomainValidator::validate_app_name(&data.app_name).map_err(ExoError::from)?;

    let policy = WritePolicy::new(args.write.dry_run, args.write.force);
    let plan = init_plan(&data);
    info!(app = %data.app_name, types = ?plan, "Initialising project");
    output.header(&format!("Generating assets for '{}'", data.app_name))?;

    let mut failures = Vec::new();
    let mut results = Vec::new();
    for generation_type in &plan {
        match run_generation(ctx, output, generation_type, &ctx.cwd, &data, policy) {
            Ok(result) => {
                failures.extend(failure_lines(&result));
                results.push(result);
            }
            Err(e) => {
                warn!(generation_type, error = %e, "Generation type failed");
                output.error(&format!("{generation_type}: {e}"))?;
                failures.push(format!("{generation_type}: {e}"));
            }
        }
    }

    if policy.dry_run {
        output.info(&format!(
            "Dry run: {} not written",
            ctx.project_config_path().display()
        ))?;
    } else {
        ctx.store
            .save(&ctx.cwd, &ProjectConfig::from_data(&data))?;
        output.success(&format!("{} saved", ctx.project_config_path().display()))?;
    }

    if output.is_json() {
        output.json(&results)?;
    }

    if !failures.is_empty() {
        return Err(CliError::GenerationFailed {
            generation_type: "init".into(),
            failures,
        });
    }

    if !policy.dry_run {
        ctx.record(
            "init",
            &data.app_name,
            format!(
                "lang={} provider={} ci={}",
                data.language, data.provider, data.ci
            ),
        );
    }
    output.success(&format!(
        "Project '{}' is ready. Run `exo status` to see what was generated.",
        data.app_name
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_core::domain::{CiSystem, CloudProvider, Database, Language};

    #[test]
    fn empty_answers_plan_nothing() {
        assert!(init_plan(&TemplateData::named("svc")).is_empty());
    }

    #[test]
    fn full_answers_plan_every_selected_type() {
        let data = TemplateData {
            language: Language::Go,
            provider: CloudProvider::Aws,
            ci: CiSystem::GithubActions,
            monitoring: Monitoring::Prometheus,
            db: Database::Postgres,
            ..TemplateData::named("orders")
        };
        assert_eq!(
            init_plan(&data),
            ["docker", "infra", "ci", "monitoring", "db"]
        );
    }

    #[test]
    fn unknown_language_skips_docker() {
        let data = TemplateData {
            ci: CiSystem::GitlabCi,
            ..TemplateData::named("svc")
        };
        assert_eq!(init_plan(&data), ["ci"]);
    }
}
