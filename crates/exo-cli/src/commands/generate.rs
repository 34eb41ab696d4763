//! `exo gen <type>`: generate a single asset type.

use tracing::{info, instrument};

use exo_core::domain::WritePolicy;

use crate::{
    cli::GenArgs,
    commands::{ensure_success, run_generation},
    context::AppContext,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(generation_type = %args.generation_type))]
pub fn execute(args: GenArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let data = ctx.resolve_data(&args.overrides());
    let out_dir = ctx.output_dir(args.output_dir.as_deref());
    let policy = WritePolicy::new(args.write.dry_run, args.write.force);

    info!(app = %data.app_name, out_dir = %out_dir.display(), "Generating");
    let result = run_generation(ctx, output, &args.generation_type, &out_dir, &data, policy)?;

    if output.is_json() {
        output.json(&result)?;
    }
    ensure_success(&result)?;

    if !policy.dry_run {
        ctx.record(
            "gen",
            &data.app_name,
            format!("type={}", args.generation_type),
        );
    }
    Ok(())
}
