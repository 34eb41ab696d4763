//! Flags shared by every `exo` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `exo gen docker -v`
//! and `exo -v gen docker` mean the same thing.

use clap::{ArgAction, Args, builder::FalseyValueParser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: WARN by default, then INFO, DEBUG and TRACE.
    /// `RUST_LOG` wins when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. Generated files are still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain, uncoloured output.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any non-empty value other
    /// than a falsey one (`0`, `false`, `no`, `off`) turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// The tool's own settings file (TOML), used instead of
    /// `<config dir>/exo/config.toml`. Project answers live in `.exo.yaml`
    /// and are not read from here.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "exo settings file (TOML), not the project's .exo.yaml"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for command results. Also settable as `output.format`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured lines, spinners while generating.
    Human,
    /// The same lines without colour or spinners.
    Plain,
    /// One JSON document on stdout (generation results, lists, reports).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn no_color_flag_sets_field() {
        let parsed = Harness::try_parse_from(["exo", "--no-color"]).unwrap();
        assert!(parsed.global.no_color);
    }

    #[test]
    fn no_color_accepts_numeric_and_falsey_values() {
        let parser = FalseyValueParser::new();
        let cmd = clap::Command::new("exo");
        let parse = |v: &str| {
            clap::builder::TypedValueParser::parse_ref(&parser, &cmd, None, v.as_ref()).unwrap()
        };
        assert!(parse("1"));
        assert!(parse("yes"));
        assert!(!parse("0"));
        assert!(!parse("false"));
        assert!(!parse(""));
    }

    #[test]
    fn defaults_are_quiet_free_and_auto() {
        let parsed = Harness::try_parse_from(["exo"]).unwrap();
        assert_eq!(parsed.global.verbose, 0);
        assert!(!parsed.global.quiet);
        assert_eq!(parsed.global.output_format, OutputFormat::Auto);
    }
}
