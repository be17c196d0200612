//! Command-line argument definitions for `prefmt`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};

/// Re-render JSON-structured log lines as prefixed, colorized text.
///
/// Reads JSON log lines from stdin and writes logfmt (or, on a terminal,
/// colorized prefixed text) to stdout. Non-JSON lines are passed through
/// unchanged.
#[derive(Debug, Parser)]
#[command(name = "prefmt", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Omit the timestamp entirely.
    ///
    /// Useful when output is redirected to a logging system that already
    /// adds timestamps.
    #[arg(long)]
    pub no_timestamp: bool,

    /// Show seconds elapsed since startup instead of wall-clock time.
    #[arg(short = 's', long, conflicts_with = "no_timestamp")]
    pub short_timestamp: bool,

    /// strftime pattern for wall-clock timestamps.
    ///
    /// Defaults to the stamp format `%b %e %H:%M:%S`.
    #[arg(short = 't', long)]
    pub timestamp_format: Option<String>,

    /// Preserve field order instead of sorting keys alphabetically.
    #[arg(long)]
    pub no_sort: bool,

    /// Align continuation lines of multi-line messages under the first
    /// line's content start.
    #[arg(short = 'i', long)]
    pub indent_multiline: bool,

    /// Right-pad the message to at least this many columns.
    #[arg(short = 'p', long, default_value_t = 0)]
    pub pad: usize,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
