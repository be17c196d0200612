//! Field value variants and the logfmt quoting rule.
//!
//! Field values form a closed set of renderable variants rather than
//! unbounded dynamic dispatch: text, error, integer, float, boolean, and a
//! pre-rendered fallback. Each variant has an explicit rendering rule for
//! both the quoted logfmt path and the unquoted colored path.

use std::fmt::{self, Write};

/// A single field value attached to a log record.
#[derive(Debug)]
pub enum FieldValue {
    /// Text; quoted in logfmt output when it contains unsafe characters.
    Str(String),
    /// Signed integer, rendered via default decimal conversion.
    Int(i64),
    /// Floating point, rendered via default conversion.
    Float(f64),
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// An error value; its display text is subject to the same quoting rule
    /// as strings.
    Error(Box<dyn std::error::Error + Send + Sync>),
    /// Pre-rendered text for anything outside the closed set (e.g. compact
    /// JSON for arrays). Never quoted.
    Other(String),
}

impl FieldValue {
    /// Wrap an error value.
    pub fn error(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Error(err.into())
    }
}

impl fmt::Display for FieldValue {
    /// Default value-to-text conversion, used verbatim (unquoted) in the
    /// colored rendering path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Error(e) => write!(f, "{e}"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// True if `text` is safe to emit bare in logfmt output.
///
/// A value needs no quoting only when every character is an ASCII letter,
/// digit, `-`, or `.`. The empty string is safe.
pub(crate) fn is_plain(text: &str) -> bool {
    text.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '.')
}

/// Append `key=text ` to `out`, quoting the text when it contains unsafe
/// characters. Used for the reserved `time`/`level`/`msg` keys.
pub(crate) fn append_text(out: &mut String, key: &str, text: &str) {
    out.push_str(key);
    out.push('=');
    if is_plain(text) {
        out.push_str(text);
    } else {
        let _ = write!(out, "{text:?}");
    }
    out.push(' ');
}

/// Append `key=value ` to `out` using the logfmt quoting rule.
///
/// String and error values are quote-escaped when they contain unsafe
/// characters; all other variants use the default unquoted conversion.
/// The trailing space is always emitted, including after the final field.
pub(crate) fn append_key_value(out: &mut String, key: &str, value: &FieldValue) {
    match value {
        FieldValue::Str(s) => append_text(out, key, s),
        FieldValue::Error(e) => append_text(out, key, &e.to_string()),
        other => {
            out.push_str(key);
            out.push('=');
            let _ = write!(out, "{other}");
            out.push(' ');
        }
    }
}
