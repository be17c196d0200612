//! Error types for `prefmt`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while formatting or writing log lines.
///
/// The formatter itself fails only on a malformed timestamp pattern; all
/// other inputs render best-effort. [`Io`](Self::Io) covers the binary's
/// output path.
#[derive(Debug, Error)]
pub enum PrefmtError {
    /// The configured timestamp format string is not a valid strftime
    /// pattern.
    #[error("invalid timestamp format: {0}")]
    TimestampFormat(#[from] jiff::Error),

    /// I/O error during write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
