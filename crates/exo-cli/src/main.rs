//! # Exo CLI
//!
//! DevOps asset scaffolding: Dockerfiles, manifests, pipelines and more,
//! rendered from templates.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Wire adapters into an [`AppContext`] for commands that need one.
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    commands::packages::PackageKind,
    config::AppConfig,
    context::AppContext,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod logging;
mod output;
mod wizard;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init. A missing
    // .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Help and version exit 0; parse failures exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, verbose, color);
        }
    };
    let color = color && !config.output.no_color;

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5-7. Wire, dispatch, report ───────────────────────────────────────
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("Exo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    // Commands that never touch the project or `~/.exo`.
    let command = match cli.command {
        Commands::Completions(cmd) => return commands::completions::execute(cmd),
        Commands::Config(cmd) => return commands::config::execute(cmd, config, output),
        other => other,
    };

    let ctx = AppContext::build(config)?;
    match command {
        Commands::Init(cmd) => commands::init::execute(cmd, &ctx, output),
        Commands::Upgrade(cmd) => commands::upgrade::execute(cmd, &ctx, output),
        Commands::Add(cmd) => commands::add::execute(cmd, &ctx, output),
        Commands::Gen(cmd) => commands::generate::execute(cmd, &ctx, output),
        Commands::Diff(cmd) => commands::diff::execute(cmd, &ctx, output),
        Commands::Status(cmd) => commands::status::execute(cmd, &ctx, output),
        Commands::Validate(cmd) => commands::validate::execute(cmd, &ctx, output),
        Commands::List(cmd) => commands::list::execute(cmd, &ctx, output),
        Commands::Template(cmd) => {
            commands::packages::execute(PackageKind::Template, cmd, &ctx, output)
        }
        Commands::Plugin(cmd) => {
            commands::packages::execute(PackageKind::Plugin, cmd, &ctx, output)
        }
        Commands::History(cmd) => commands::history::execute(cmd, &ctx, output),
        // Handled above.
        Commands::Completions(_) | Commands::Config(_) => Ok(()),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// The message goes to stderr so it appears even when stdout is redirected.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
