//! Timestamp rendering and parsing.
//!
//! Rendering goes through [`jiff`]'s strftime support with a real error
//! channel: a malformed format pattern is the one configuration error the
//! formatter can surface. Parsing helpers cover the inputs the CLI sees:
//! ISO 8601 / RFC 3339 strings, `YYYY-MM-DD HH:MM:SS`, and numeric Unix
//! epochs (seconds, milliseconds, nanoseconds) disambiguated by magnitude.

use jiff::tz::TimeZone;

/// Default stamp format: abbreviated month, space-padded day, clock time
/// (e.g. `Jan  2 15:04:05`).
pub const STAMP: &str = "%b %e %H:%M:%S";

/// Render `time` using a strftime-compatible format string.
///
/// Fails only on a malformed format pattern.
pub fn format_zoned(time: &jiff::Zoned, format: &str) -> Result<String, jiff::Error> {
    jiff::fmt::strtime::format(format, time)
}

/// Parse a timestamp from a JSON value for the CLI.
///
/// Returns `None` for unrecognized shapes; the caller falls back to the
/// current time.
pub fn from_json_value(value: &serde_json::Value) -> Option<jiff::Zoned> {
    match value {
        serde_json::Value::String(s) => parse_string(s),
        serde_json::Value::Number(n) => parse_number(n),
        _ => None,
    }
}

fn parse_string(s: &str) -> Option<jiff::Zoned> {
    // ISO 8601 / RFC 3339; jiff handles these natively
    if let Ok(ts) = s.parse::<jiff::Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC));
    }

    // YYYY-MM-DD HH:MM:SS[.fff] with no timezone → assume UTC
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = jiff::civil::DateTime::strptime(pattern, s)
            && let Ok(zdt) = dt.to_zoned(TimeZone::UTC)
        {
            return Some(zdt);
        }
    }

    None
}

/// Numeric epoch heuristic:
/// - Value < 1e12 → seconds
/// - Value < 1e15 → milliseconds
/// - Value ≥ 1e15 → nanoseconds
fn parse_number(n: &serde_json::Number) -> Option<jiff::Zoned> {
    let ts = if let Some(i) = n.as_i64() {
        if i < 1_000_000_000_000 {
            jiff::Timestamp::from_second(i).ok()?
        } else if i < 1_000_000_000_000_000 {
            jiff::Timestamp::from_millisecond(i).ok()?
        } else {
            jiff::Timestamp::from_nanosecond(i128::from(i)).ok()?
        }
    } else {
        let f = n.as_f64()?;
        #[allow(clippy::cast_possible_truncation)]
        let secs = f.trunc() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (f.fract() * 1_000_000_000.0) as i32;
        jiff::Timestamp::new(secs, nanos).ok()?
    };
    Some(ts.to_zoned(TimeZone::UTC))
}
