//! Command handlers. Each module translates parsed arguments into service
//! calls and renders the outcome; no generation logic lives here.

pub mod add;
pub mod completions;
pub mod config;
pub mod diff;
pub mod generate;
pub mod history;
pub mod init;
pub mod list;
pub mod packages;
pub mod status;
pub mod upgrade;
pub mod validate;

use std::path::Path;

use exo_core::domain::{FileStatus, GenerationResult, TemplateData, WritePolicy};

use crate::{
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run one generation type with a spinner and print per-file outcomes.
///
/// Errors raised before the first file (unknown type, missing option) are
/// returned; per-file failures are left in the result.
pub(crate) fn run_generation(
    ctx: &AppContext,
    output: &OutputManager,
    generation_type: &str,
    out_dir: &Path,
    data: &TemplateData,
    policy: WritePolicy,
) -> CliResult<GenerationResult> {
    let spinner = output.spinner(&format!("Generating {generation_type}..."));
    let result = ctx
        .generator()
        .generate(generation_type, out_dir, data, policy);
    spinner.finish_and_clear();

    let result = result?;
    if !output.is_json() {
        report_generation(output, &result)?;
    }
    Ok(result)
}

pub(crate) fn report_generation(
    output: &OutputManager,
    result: &GenerationResult,
) -> CliResult<()> {
    output.header(&format!("{}:", result.generation_type))?;
    for file in &result.files {
        let path = file.path.display();
        match &file.status {
            FileStatus::Written => output.success(&format!("{path}"))?,
            FileStatus::SkippedExists => {
                output.info(&format!("{path} exists, skipped (use --force to overwrite)"))?
            }
            FileStatus::SkippedDryRun => output.info(&format!("{path} (dry run)"))?,
            FileStatus::Failed { error } => output.error(&format!("{path}: {error}"))?,
        }
    }
    if result.stopped_early {
        output.warning("Stopped after the first failure; remaining files were not attempted")?;
    }
    Ok(())
}

/// `"<path>: <error>"` for every failed file.
pub(crate) fn failure_lines(result: &GenerationResult) -> Vec<String> {
    result
        .failures()
        .map(|f| match &f.status {
            FileStatus::Failed { error } => format!("{}: {error}", f.path.display()),
            _ => f.path.display().to_string(),
        })
        .collect()
}

pub(crate) fn ensure_success(result: &GenerationResult) -> CliResult<()> {
    if result.is_success() {
        return Ok(());
    }
    Err(CliError::GenerationFailed {
        generation_type: result.generation_type.clone(),
        failures: failure_lines(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_become_generation_error() {
        let mut result = GenerationResult::new("helm", "/p");
        result.push("charts/x/Chart.yaml", FileStatus::Written);
        result.push(
            "charts/x/values.yaml",
            FileStatus::Failed {
                error: "permission denied".into(),
            },
        );

        match ensure_success(&result) {
            Err(CliError::GenerationFailed {
                generation_type,
                failures,
            }) => {
                assert_eq!(generation_type, "helm");
                assert_eq!(failures, ["charts/x/values.yaml: permission denied"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn skipped_files_are_success() {
        let mut result = GenerationResult::new("docker", "/p");
        result.push("Dockerfile", FileStatus::SkippedExists);
        result.push(".dockerignore", FileStatus::SkippedDryRun);
        assert!(ensure_success(&result).is_ok());
    }
}
