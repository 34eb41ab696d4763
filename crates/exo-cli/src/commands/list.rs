//! Implementation of the `exo list` command.

use exo_core::domain::GeneratorInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    context::AppContext,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let generators = ctx.registry.infos();

    match args.format {
        ListFormat::Table => {
            output.header("Available generation types:")?;
            let width = generators.iter().map(|g| g.name.len()).max().unwrap_or(0);
            for info in &generators {
                let requires = requires(info);
                let requires = if requires.is_empty() {
                    String::new()
                } else {
                    output.muted(&format!("  (requires {requires})"))
                };
                output.print(&format!(
                    "  {:<width$}  {}{requires}",
                    info.name, info.description
                ))?;
            }
        }

        // Data formats bypass OutputManager so they stay parseable in pipes
        // and under --quiet.
        ListFormat::Json => output.json(&generators)?,

        ListFormat::List => {
            for info in &generators {
                println!("{}", info.name);
            }
        }

        ListFormat::Csv => {
            for row in csv_rows(&generators) {
                println!("{row}");
            }
        }
    }

    Ok(())
}

/// `"provider"`, `"database"`, both joined by `+`, or empty.
fn requires(info: &GeneratorInfo) -> String {
    let mut parts = Vec::new();
    if info.requires_provider {
        parts.push("provider");
    }
    if info.requires_database {
        parts.push("database");
    }
    parts.join("+")
}

fn csv_rows(generators: &[GeneratorInfo]) -> Vec<String> {
    std::iter::once("name,requires,failure_policy,description".to_string())
        .chain(generators.iter().map(|g| {
            format!(
                "{},{},{},{}",
                g.name,
                requires(g),
                g.failure_policy.as_str(),
                csv_field(&g.description)
            )
        }))
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_core::application::GeneratorRegistry;

    #[test]
    fn csv_has_header_and_one_row_per_type() {
        let registry = GeneratorRegistry::with_builtins();
        let rows = csv_rows(&registry.infos());
        assert_eq!(rows[0], "name,requires,failure_policy,description");
        assert_eq!(rows.len(), registry.len() + 1);
        assert!(rows.iter().any(|r| r.starts_with("infra,provider,stop-on-first-error,")));
        assert!(rows.iter().any(|r| r.starts_with("db,database,continue,")));
    }

    #[test]
    fn csv_quotes_commas() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
