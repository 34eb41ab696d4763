//! `exo diff <type>`: preview what regenerating a type would change.

use owo_colors::OwoColorize;
use tracing::instrument;

use exo_core::{application::FileDiff, domain::DiffReport};

use crate::{cli::DiffArgs, context::AppContext, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(generation_type = %args.generation_type))]
pub fn execute(args: DiffArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let data = ctx.resolve_data(&args.overrides());
    let out_dir = ctx.output_dir(args.output_dir.as_deref());
    let diffs = ctx
        .differ()
        .diff_type(&args.generation_type, &out_dir, &data)?;

    if output.is_json() {
        output.json(&diffs)?;
        return Ok(());
    }

    output.header(&format!("{} (against {}):", args.generation_type, out_dir.display()))?;
    for diff in &diffs {
        print_file_diff(output, diff)?;
    }

    let changed = diffs.iter().filter(|d| !d.report.is_up_to_date()).count();
    if changed == 0 {
        output.success("Everything is up to date")?;
    } else {
        output.info(&format!(
            "{changed} of {} file(s) would change; apply with `exo gen {} --force`",
            diffs.len(),
            args.generation_type
        ))?;
    }
    Ok(())
}

/// One summary line per file, followed by its removed and added lines. A new
/// file lists every rendered line as added.
pub(crate) fn print_file_diff(output: &OutputManager, diff: &FileDiff) -> CliResult<()> {
    print_summary(output, diff)?;
    for (added, line) in change_lines(&diff.report) {
        output.print(&paint(output, &line, added))?;
    }
    Ok(())
}

/// Like [`print_file_diff`], but a new file stays a one-line summary.
pub(crate) fn print_file_changes(output: &OutputManager, diff: &FileDiff) -> CliResult<()> {
    if matches!(diff.report, DiffReport::NewFile { .. }) {
        return print_summary(output, diff);
    }
    print_file_diff(output, diff)
}

fn print_summary(output: &OutputManager, diff: &FileDiff) -> CliResult<()> {
    output.print(&format!(
        "  {}  {}",
        diff.path.display(),
        output.muted(&diff.report.summary())
    ))?;
    Ok(())
}

/// `(is_addition, "    ± line")` pairs, removals first.
fn change_lines(report: &DiffReport) -> Vec<(bool, String)> {
    let removed = report.removed().iter().map(|l| (false, format!("    - {l}")));
    let added = report.added().iter().map(|l| (true, format!("    + {l}")));
    removed.chain(added).collect()
}

fn paint(output: &OutputManager, text: &str, added: bool) -> String {
    match (output.supports_color(), added) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_file_lists_every_line_as_added() {
        let report = DiffReport::compute(None, "FROM rust\nCMD [\"api\"]\n");
        assert_eq!(
            change_lines(&report),
            [
                (true, "    + FROM rust".to_string()),
                (true, "    + CMD [\"api\"]".to_string()),
            ]
        );
    }

    #[test]
    fn changed_file_lists_removals_before_additions() {
        let report = DiffReport::compute(Some("a\nold\n"), "a\nnew\n");
        assert_eq!(
            change_lines(&report),
            [
                (false, "    - old".to_string()),
                (true, "    + new".to_string()),
            ]
        );
    }

    #[test]
    fn up_to_date_prints_only_the_summary() {
        assert!(change_lines(&DiffReport::compute(Some("x\n"), "x\n")).is_empty());
    }
}
