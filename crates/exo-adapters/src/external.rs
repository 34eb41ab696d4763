//! Thin wrappers around external binaries (`git`, `terraform`, `kubectl`, ...).

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use exo_core::{application::ApplicationError, error::ExoResult};

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stderr if it has anything to say, otherwise stdout.
    pub fn message(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

/// Full path of `program` if it is an executable file on `PATH`.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        candidates(&dir, program)
            .into_iter()
            .find(|candidate| candidate.is_file())
    })
}

fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![dir.join(format!("{program}.exe")), dir.join(program)]
    } else {
        vec![dir.join(program)]
    }
}

/// Run `program args...` in `cwd`, capturing output.
///
/// A program that cannot be spawned is an `ExternalCommand` error; a program
/// that runs and exits non-zero is reported through `success = false`.
#[instrument(skip(args), fields(args = ?args))]
pub fn run(program: &str, args: &[&str], cwd: &Path) -> ExoResult<CommandOutput> {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| ApplicationError::ExternalCommand {
            command: display_command(program, args),
            reason: e.to_string(),
        })?;

    debug!(status = ?output.status, "Command finished");
    Ok(CommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
