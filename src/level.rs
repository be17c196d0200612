//! Log level representation with parsing, display, and colorization.
//!
//! Levels follow the logrus convention: six severities ordered
//! `Debug < Info < Warn < Error < Fatal < Panic`, each with a canonical
//! lowercase name and an uppercase display label. The label for [`Warn`]
//! is the literal 4-character `WARN` even though its canonical name is
//! `warning`.
//!
//! [`Warn`]: Level::Warn

use std::fmt;

use owo_colors::Style;

/// Canonical log level enumeration, ordered by severity (ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// Canonical lowercase name, used for the `level=` key in logfmt output.
    ///
    /// Note that [`Warn`](Self::Warn) names itself `warning`, matching the
    /// logrus wire format.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Uppercase display label for colored output.
    ///
    /// Every label fits in 5 columns; `Warn` renders as the literal `WARN`
    /// rather than the uppercased full name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Returns the [`Style`] used for this level's label and field keys
    /// when colors are enabled.
    ///
    /// - Info: green
    /// - Warn: yellow
    /// - Error, Fatal, Panic: red
    /// - Debug: blue
    #[allow(clippy::trivially_copy_pass_by_ref)] // &self required since OwoColorize has conflicting trait methods
    pub const fn style(&self) -> Style {
        match self {
            Self::Info => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Error | Self::Fatal | Self::Panic => Style::new().red(),
            Self::Debug => Style::new().blue(),
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// Accepts common aliases from major logging frameworks. Returns `None`
    /// for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" | "trace" | "trc" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" | "critical" | "crit" => Some(Self::Fatal),
            "panic" | "emerg" | "emergency" => Some(Self::Panic),
            _ => None,
        }
    }

    /// Parse a numeric value into a [`Level`] using the bunyan/pino
    /// convention (20 = debug, 30 = info, 40 = warn, 50 = error, 60 = fatal).
    ///
    /// Values between thresholds round to the nearest level.
    pub const fn from_numeric(n: i64) -> Self {
        match n {
            ..=24 => Self::Debug,
            25..=34 => Self::Info,
            35..=44 => Self::Warn,
            45..=54 => Self::Error,
            55..=64 => Self::Fatal,
            65.. => Self::Panic,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
