//! `prefmt` — prefixed text formatter for structured log records.
//!
//! This library renders structured log records into human-readable,
//! optionally colorized text lines. In non-colored mode it emits logfmt
//! (`time=... level=... msg=... key=value ...`); on a terminal it emits a
//! prefixed, severity-colored layout with a dim timestamp block, a
//! right-aligned level badge, and an optional cyan prefix tag taken from a
//! `prefix` field or a leading `[tag]` in the message.
//!
//! The `prefmt` binary wraps the formatter as a stdin filter for JSON log
//! lines.
//!
//! # Example
//!
//! ```
//! use prefmt::{Environment, Level, Record, TextFormatter};
//!
//! let formatter = TextFormatter {
//!     disable_colors: true,
//!     disable_timestamp: true,
//!     ..TextFormatter::new(Environment::detached())
//! };
//!
//! let record = Record::new(Level::Info, "hello").field("port", 8080);
//! let line = formatter.format(&record).unwrap();
//! assert_eq!(line, b"level=info msg=hello port=8080 \n");
//! ```

pub mod cli;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod parser;
pub mod record;
pub mod timestamp;
pub mod value;

// Re-export primary API types for convenience.
pub use error::PrefmtError;
pub use formatter::{Environment, TextFormatter};
pub use level::Level;
pub use record::{Caller, Fields, Record};
pub use value::FieldValue;
