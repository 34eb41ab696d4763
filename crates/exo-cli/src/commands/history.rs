//! `exo history`: recent generation activity.

use crate::{cli::HistoryArgs, context::AppContext, error::CliResult, output::OutputManager};

pub fn execute(args: HistoryArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    if args.clear {
        ctx.history.clear()?;
        output.success("History cleared")?;
        return Ok(());
    }

    let entries = ctx.history.recent(args.limit)?;
    if output.is_json() {
        output.json(&entries)?;
        return Ok(());
    }
    if entries.is_empty() {
        output.info("No history yet")?;
        return Ok(());
    }

    output.header(&format!("Last {} operation(s):", entries.len()))?;
    for entry in &entries {
        let when = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
        output.print(&format!(
            "  {}  {:<8} {:<20} {}",
            output.muted(&when.to_string()),
            entry.command,
            entry.project,
            output.muted(&entry.details)
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_adapters::ExoHome;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn clear_empties_the_log() {
        let home = TempDir::new().unwrap();
        let ctx = AppContext::at(PathBuf::from("/w"), ExoHome::at(home.path()), 10);
        ctx.record("gen", "orders", "type=docker");

        let args = HistoryArgs {
            clear: true,
            limit: 20,
        };
        execute(args, &ctx, &OutputManager::quiet()).unwrap();
        assert!(ctx.history.entries().unwrap().is_empty());
    }
}
