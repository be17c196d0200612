//! Log record model: timestamp, level, message, fields, caller location.

use indexmap::IndexMap;

use crate::level::Level;
use crate::value::FieldValue;

/// Ordered key/value field mapping.
///
/// Insertion order is preserved so the unsorted rendering path can honor
/// the order fields were attached in.
pub type Fields = IndexMap<String, FieldValue>;

/// Source location of the logging call, supplied by the host framework.
///
/// The formatter never walks the stack itself; a host that wants the
/// Debug-level diagnostic resolves its own frame and attaches it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Qualified function name of the logging call site.
    pub function: String,
    /// Source file path; only the base name is rendered.
    pub file: String,
    /// Source line number.
    pub line: u32,
}

impl Caller {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

/// A single structured log record handed to the formatter.
///
/// The formatter reads the record; it never mutates it. Reserved-key
/// collisions (`time`, `msg`, `level`) are renamed in a derived render list,
/// not in `fields` itself.
#[derive(Debug)]
pub struct Record {
    /// Wall-clock time of the event.
    pub time: jiff::Zoned,
    /// Severity level.
    pub level: Level,
    /// Message text. May be empty and may contain embedded newlines.
    pub message: String,
    /// Arbitrary key/value fields. The key `prefix` is reserved: it supplies
    /// the colored prefix tag instead of rendering as a field.
    pub fields: Fields,
    /// Optional call-site location, rendered for Debug-level records.
    pub caller: Option<Caller>,
}

impl Record {
    /// Create a record stamped with the current wall-clock time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: jiff::Zoned::now(),
            level,
            message: message.into(),
            fields: Fields::new(),
            caller: None,
        }
    }

    /// Attach a field, replacing any existing value under the same key.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Override the record timestamp (useful for replay and tests).
    #[must_use]
    pub fn at(mut self, time: jiff::Zoned) -> Self {
        self.time = time;
        self
    }

    /// Attach the call-site location for the Debug-level diagnostic.
    #[must_use]
    pub fn located(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }
}
