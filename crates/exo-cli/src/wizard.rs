//! Interactive setup wizard for `exo init` and `exo upgrade`.
//!
//! Every question is pre-filled from the data passed in, so re-running the
//! wizard and pressing Enter throughout keeps the previous answers.

use exo_core::domain::{
    CiSystem, CloudProvider, Database, DomainValidator, Language, Monitoring, TemplateData,
};

use crate::error::CliResult;

/// Index of `current` in `options`, or 0.
fn default_index<T: PartialEq + Copy>(options: &[T], current: T) -> usize {
    options.iter().position(|o| *o == current).unwrap_or(0)
}

#[cfg(feature = "interactive")]
pub fn run(initial: &TemplateData) -> CliResult<TemplateData> {
    use console::Term;
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use std::fmt::Display;

    use crate::error::CliError;

    fn io_err(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "wizard prompt failed".into(),
            source: e.into(),
        }
    }

    fn select<T: PartialEq + Copy + Display>(
        theme: &ColorfulTheme,
        term: &Term,
        prompt: &str,
        options: &[T],
        current: T,
    ) -> CliResult<T> {
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let index = Select::with_theme(theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(default_index(options, current))
            .interact_on(term)
            .map_err(io_err)?;
        Ok(options[index])
    }

    let theme = ColorfulTheme::default();
    let term = Term::stderr();
    let mut data = initial.clone();

    data.app_name = Input::<String>::with_theme(&theme)
        .with_prompt("Project name")
        .default(initial.app_name.clone())
        .validate_with(|name: &String| {
            DomainValidator::validate_app_name(name).map_err(|e| e.to_string())
        })
        .interact_text_on(&term)
        .map_err(io_err)?;

    data.language = select(&theme, &term, "Language", &Language::ALL, initial.language)?;
    data.provider = select(
        &theme,
        &term,
        "Cloud provider",
        &CloudProvider::ALL,
        initial.provider,
    )?;
    data.ci = select(&theme, &term, "CI/CD", &CiSystem::ALL, initial.ci)?;
    data.monitoring = select(
        &theme,
        &term,
        "Monitoring",
        &Monitoring::ALL,
        initial.monitoring,
    )?;
    data.db = select(&theme, &term, "Database", &Database::ALL, initial.db)?;

    data.port = Input::<u16>::with_theme(&theme)
        .with_prompt("Service port")
        .default(initial.port)
        .validate_with(|port: &u16| DomainValidator::validate_port(*port).map_err(|e| e.to_string()))
        .interact_text_on(&term)
        .map_err(io_err)?;

    let proceed = Confirm::with_theme(&theme)
        .with_prompt(format!("Use these settings for '{}'?", data.app_name))
        .default(true)
        .interact_on(&term)
        .map_err(io_err)?;
    if !proceed {
        return Err(CliError::Cancelled);
    }

    Ok(data)
}

#[cfg(not(feature = "interactive"))]
pub fn run(_initial: &TemplateData) -> CliResult<TemplateData> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
