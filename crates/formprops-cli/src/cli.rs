//! CLI argument definitions for the form renderer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use formprops_model::{DecoderPrecedence, SkinKind};

#[derive(Parser)]
#[command(
    name = "formprops",
    version,
    about = "Render form-helper field descriptors to HTML",
    long_about = "Render form-helper field descriptors to HTML.\n\n\
                  Checkboxes, checkbox and radio collections, and multi-selects get the\n\
                  hidden inputs an array-parameter decoder needs; validation errors are\n\
                  bound to fields by error key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a form payload to HTML.
    Render(RenderArgs),

    /// Show the hidden inputs and bound errors of each field without rendering.
    Inspect(InspectArgs),

    /// List the available skins.
    Skins,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// JSON form payload (`-` reads stdin).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// JSON validation errors, replacing the payload's `validationErrors`.
    #[arg(long = "errors", value_name = "FILE")]
    pub errors: Option<PathBuf>,

    /// TOML render options.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skin to render with (overrides the config file).
    #[arg(long = "skin", value_enum)]
    pub skin: Option<SkinArg>,

    /// Which duplicate checkbox value the receiving decoder keeps.
    #[arg(long = "precedence", value_enum)]
    pub precedence: Option<PrecedenceArg>,

    /// Put each form-level element on its own line.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Write HTML to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// JSON form payload (`-` reads stdin).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// JSON validation errors, replacing the payload's `validationErrors`.
    #[arg(long = "errors", value_name = "FILE")]
    pub errors: Option<PathBuf>,

    /// TOML render options (only the precedence matters here).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long = "precedence", value_enum)]
    pub precedence: Option<PrecedenceArg>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SkinArg {
    Vanilla,
    Classed,
}

impl From<SkinArg> for SkinKind {
    fn from(arg: SkinArg) -> Self {
        match arg {
            SkinArg::Vanilla => SkinKind::Vanilla,
            SkinArg::Classed => SkinKind::Classed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrecedenceArg {
    /// Rack-style decoders: the last occurrence of a name wins.
    LastWins,
    /// The first occurrence of a name wins.
    FirstWins,
}

impl From<PrecedenceArg> for DecoderPrecedence {
    fn from(arg: PrecedenceArg) -> Self {
        match arg {
            PrecedenceArg::LastWins => DecoderPrecedence::LastWins,
            PrecedenceArg::FirstWins => DecoderPrecedence::FirstWins,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
