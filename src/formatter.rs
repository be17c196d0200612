//! Prefixed text formatter for structured log records.
//!
//! Renders one [`Record`] per call into a single line of bytes:
//! - Non-colored: logfmt (`time=... level=... msg=... key=value ...`)
//! - Colored: dim bracketed timestamp, severity-colored right-aligned
//!   label, optional cyan prefix tag, message, severity-colored field keys
//!
//! The prefix tag comes from an explicit `prefix` field, or from a leading
//! `[tag]` embedded in the message text. Multi-line messages can be
//! indented so continuation lines align under the first line's content
//! start, excluding ANSI control sequences from the width calculation.

use std::borrow::Cow;
use std::fmt::Write;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use owo_colors::{OwoColorize, Style};
use regex::Regex;

use crate::error::PrefmtError;
use crate::fields;
use crate::level::Level;
use crate::record::Record;
use crate::timestamp;
use crate::value::{self, FieldValue};

/// Leading `[tag]` at the very start of a message.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\]").expect("prefix pattern is a valid regex")
});

/// Process-wide context captured once at startup.
///
/// Holds the reference instant for elapsed-seconds timestamps and the
/// cached result of terminal detection on stdout. Both are read-only after
/// capture, so an `Environment` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Environment {
    start: Instant,
    terminal: bool,
}

impl Environment {
    /// Capture the process environment: the reference instant is now, and
    /// terminal capability is probed on stdout.
    pub fn capture() -> Self {
        Self {
            start: Instant::now(),
            terminal: std::io::stdout().is_terminal(),
        }
    }

    /// An environment that reports no terminal, for tests and redirected
    /// output.
    pub fn detached() -> Self {
        Self {
            start: Instant::now(),
            terminal: false,
        }
    }

    /// Whether stdout was an interactive terminal at capture time.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whole seconds elapsed since the reference instant.
    fn elapsed_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}

/// Log line formatter configuration.
///
/// Construct with [`TextFormatter::new`] and adjust options with struct
/// update syntax:
///
/// ```
/// use prefmt::{Environment, TextFormatter};
///
/// let formatter = TextFormatter {
///     disable_colors: true,
///     ..TextFormatter::new(Environment::detached())
/// };
/// # let _ = formatter;
/// ```
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Bypass terminal detection and always colorize.
    pub force_colors: bool,
    /// Never colorize; overrides `force_colors`.
    pub disable_colors: bool,
    /// Omit the timestamp entirely. Useful when output is redirected to a
    /// logging system that already adds timestamps.
    pub disable_timestamp: bool,
    /// Show seconds elapsed since [`Environment`] capture instead of
    /// wall-clock time.
    pub short_timestamp: bool,
    /// Skip the alphabetic sort of field keys and preserve insertion order.
    pub disable_sorting: bool,
    /// Indent continuation lines of multi-line messages to align under the
    /// first line's content start.
    pub indent_multiline_message: bool,
    /// strftime pattern for wall-clock timestamps; `None` uses the default
    /// stamp format.
    pub timestamp_format: Option<String>,
    /// Minimum width to right-pad the message to; 0 disables padding.
    pub space_padding: usize,
    /// Process context captured at startup.
    pub env: Environment,
}

impl TextFormatter {
    /// A formatter with default options over the given environment.
    pub fn new(env: Environment) -> Self {
        Self {
            force_colors: false,
            disable_colors: false,
            disable_timestamp: false,
            short_timestamp: false,
            disable_sorting: false,
            indent_multiline_message: false,
            timestamp_format: None,
            space_padding: 0,
            env,
        }
    }

    /// Format one record into a line of bytes, trailing newline included.
    ///
    /// Fails only when `timestamp_format` is not a valid strftime pattern.
    pub fn format(&self, record: &Record) -> Result<Vec<u8>, PrefmtError> {
        let list = fields::render_list(&record.fields, !self.disable_sorting);

        // Terminal colors are unreliable on classic Windows consoles.
        let color_terminal = self.env.is_terminal() && !cfg!(windows);
        let colored = (self.force_colors || color_terminal) && !self.disable_colors;

        let ts_format = self.timestamp_format.as_deref().unwrap_or(timestamp::STAMP);

        let mut out = String::with_capacity(128);
        if colored {
            self.write_colored(&mut out, record, &list, ts_format)?;
        } else {
            if !self.disable_timestamp {
                let stamp = timestamp::format_zoned(&record.time, ts_format)?;
                value::append_text(&mut out, "time", &stamp);
            }
            value::append_text(&mut out, "level", record.level.name());
            if !record.message.is_empty() {
                value::append_text(&mut out, "msg", &record.message);
            }
            for (key, val) in &list {
                value::append_key_value(&mut out, key.as_ref(), val);
            }
        }

        out.push('\n');
        Ok(out.into_bytes())
    }

    fn write_colored(
        &self,
        out: &mut String,
        record: &Record,
        list: &[(Cow<'_, str>, &FieldValue)],
        ts_format: &str,
    ) -> Result<(), PrefmtError> {
        let level_style = record.level.style();
        let dim = Style::new().bright_black();
        let tag_style = Style::new().cyan();

        // Call-site diagnostic, rendered only at Debug level and only when
        // the host resolved its own frame and attached it.
        let mut diagnostic = String::new();
        if record.level == Level::Debug
            && let Some(caller) = &record.caller
        {
            let file = Path::new(&caller.file)
                .file_name()
                .map_or_else(|| caller.file.clone(), |f| f.to_string_lossy().into_owned());
            let _ = write!(diagnostic, " [{}][{}][{}]", caller.function, file, caller.line);
        }

        // Prefix tag: an explicit `prefix` field wins over a bracketed tag
        // embedded at the start of the message.
        let mut message: &str = &record.message;
        let tag: Option<String> = if let Some(val) = record.fields.get(fields::PREFIX_KEY) {
            Some(val.to_string())
        } else if let Some((extracted, rest)) = extract_prefix(&record.message) {
            message = rest;
            Some(extracted.to_string())
        } else {
            None
        };

        // Emit the header, tracking its visible width as we go. ANSI control
        // sequences contribute zero, so `visible` is exactly the indent
        // needed to align continuation lines under the message start.
        let mut visible = 0usize;

        if !self.disable_timestamp {
            let block = if self.short_timestamp {
                format!("[{:04}]", self.env.elapsed_secs())
            } else {
                format!("[{}]", timestamp::format_zoned(&record.time, ts_format)?)
            };
            let _ = write!(out, "{}", block.style(dim));
            visible += block.len();
        }
        out.push(' ');
        visible += 1;

        let badge = format!("{:>5}", record.level.label());
        let _ = write!(out, "{}", badge.style(level_style));
        visible += badge.len();

        out.push_str(&diagnostic);
        visible += diagnostic.len();

        if let Some(tag) = &tag {
            let label = format!("{tag}:");
            out.push(' ');
            let _ = write!(out, "{}", label.style(tag_style));
            visible += 1 + label.len();
        }

        out.push(' ');
        visible += 1;

        // Indent continuation lines under the header, then right-pad.
        let mut body: Cow<'_, str> = Cow::Borrowed(message);
        if self.indent_multiline_message && body.contains('\n') {
            let indent = " ".repeat(visible);
            body = Cow::Owned(body.replace('\n', &format!("\n{indent}")));
        }
        if self.space_padding != 0 {
            let width = self.space_padding;
            body = Cow::Owned(format!("{body:<width$}"));
        }
        out.push_str(&body);

        for (key, val) in list {
            out.push(' ');
            let _ = write!(out, "{}", key.style(level_style));
            out.push('=');
            let _ = write!(out, "{val}");
        }

        Ok(())
    }
}

/// Split a leading `[tag]` off a message.
///
/// Returns the tag and the remainder with following whitespace stripped,
/// or `None` when the message has no leading bracket or the tag is empty.
fn extract_prefix(msg: &str) -> Option<(&str, &str)> {
    let caps = PREFIX_RE.captures(msg)?;
    let tag = caps.get(1)?.as_str();
    if tag.is_empty() {
        return None;
    }
    let rest = msg[caps.get(0)?.end()..].trim_start();
    Some((tag, rest))
}
