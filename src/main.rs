use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use prefmt::cli::{Cli, ColorMode};
use prefmt::formatter::{Environment, TextFormatter};
use prefmt::parser::parse_record;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when prefmt exits early.
    reset_sigpipe();

    let cli = Cli::parse();
    let formatter = build_formatter(&cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let reader = stdin.lock();
    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => {
                eprintln!("prefmt: read error: {e}");
                return ExitCode::from(2);
            }
        };

        let result = match parse_record(&line) {
            Some(record) => match formatter.format(&record) {
                Ok(bytes) => writer.write_all(&bytes),
                Err(e) => {
                    eprintln!("prefmt: {e}");
                    return ExitCode::from(1);
                }
            },
            // Non-JSON lines pass through unchanged.
            None => writeln!(writer, "{line}"),
        };

        if let Err(e) = result {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("prefmt: write error: {e}");
            return ExitCode::from(2);
        }
    }

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("prefmt: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn build_formatter(cli: &Cli) -> TextFormatter {
    let mut formatter = TextFormatter {
        disable_timestamp: cli.no_timestamp,
        short_timestamp: cli.short_timestamp,
        disable_sorting: cli.no_sort,
        indent_multiline_message: cli.indent_multiline,
        timestamp_format: cli.timestamp_format.clone(),
        space_padding: cli.pad,
        ..TextFormatter::new(Environment::capture())
    };

    match cli.color {
        ColorMode::Always => formatter.force_colors = true,
        ColorMode::Never => formatter.disable_colors = true,
        ColorMode::Auto => {
            if !env_allows_color() {
                formatter.disable_colors = true;
            }
        }
    }

    formatter
}

/// Environment-variable side of color resolution; terminal detection itself
/// lives in [`Environment::capture`].
fn env_allows_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    true
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `prefmt`, this causes the *upstream* writer (e.g.
/// a Python process) to receive a `BrokenPipeError` when `prefmt` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
