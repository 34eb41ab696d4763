//! `exo upgrade`: revise the saved project configuration.

use tracing::{info, instrument};

use exo_core::{
    application::ProjectConfigStore,
    domain::{DomainValidator, ProjectConfig, TemplateData},
    error::ExoError,
};

use crate::{
    cli::UpgradeArgs,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
    wizard,
};

#[instrument(skip_all, fields(non_interactive = args.non_interactive))]
pub fn execute(args: UpgradeArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let Some(saved) = ctx.store.load(&ctx.cwd)? else {
        return Err(CliError::NotInitialized {
            path: ctx.project_config_path(),
        });
    };

    let mut data = TemplateData::default();
    saved.apply_to(&mut data);
    args.data.overrides().apply_to(&mut data);

    if !args.non_interactive {
        data = wizard::run(&data)?;
    }
    DomainValidator::validate_app_name(&data.app_name).map_err(ExoError::from)?;

    let updated = ProjectConfig::from_data(&data);
    if updated == saved {
        output.info("No changes to the project configuration")?;
        return Ok(());
    }

    info!(app = %data.app_name, "Saving upgraded configuration");
    ctx.store.save(&ctx.cwd, &updated)?;
    output.success(&format!(
        "{} updated",
        ctx.project_config_path().display()
    ))?;
    output.info("Regenerate assets with `exo gen <type> --force` to apply the new settings")?;

    ctx.record(
        "upgrade",
        &data.app_name,
        format!(
            "lang={} provider={} ci={}",
            data.language, data.provider, data.ci
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DataArgs;
    use exo_adapters::ExoHome;
    use exo_core::domain::{CloudProvider, Language};
    use tempfile::TempDir;

    fn non_interactive(data: DataArgs) -> UpgradeArgs {
        UpgradeArgs {
            non_interactive: true,
            data,
        }
    }

    #[test]
    fn missing_config_is_not_initialized() {
        let (cwd, home) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let ctx = AppContext::at(cwd.path().to_path_buf(), ExoHome::at(home.path()), 10);

        let err = execute(non_interactive(DataArgs::default()), &ctx, &OutputManager::quiet())
            .unwrap_err();
        assert!(matches!(err, CliError::NotInitialized { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn flags_update_saved_config() {
        let (cwd, home) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let ctx = AppContext::at(cwd.path().to_path_buf(), ExoHome::at(home.path()), 10);
        let saved = ProjectConfig {
            name: "orders".into(),
            language: Language::Go,
            ..ProjectConfig::default()
        };
        ctx.store.save(&ctx.cwd, &saved).unwrap();

        let data = DataArgs {
            provider: Some(CloudProvider::Gcp),
            ..DataArgs::default()
        };
        execute(non_interactive(data), &ctx, &OutputManager::quiet()).unwrap();

        let stored = ctx.store.load(&ctx.cwd).unwrap().unwrap();
        assert_eq!(stored.name, "orders");
        assert_eq!(stored.language, Language::Go);
        assert_eq!(stored.provider, CloudProvider::Gcp);
        assert_eq!(ctx.history.entries().unwrap()[0].command, "upgrade");
    }
}
