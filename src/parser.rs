//! JSON log line parser for the `prefmt` binary.
//!
//! Turns one stdin line into a [`Record`] by auto-detecting timestamp,
//! level, message, and call-site fields across major logging frameworks
//! (logrus, zap, slog, pino, bunyan). Remaining keys become typed field
//! values in their original order. Lines that are not JSON objects are
//! passed through by the caller.

use crate::level::Level;
use crate::record::{Caller, Fields, Record};
use crate::timestamp;
use crate::value::FieldValue;

/// Known aliases for timestamp fields, ordered by frequency of use.
const TIME_ALIASES: &[&str] = &["time", "ts", "timestamp", "@timestamp", "datetime"];

/// Known aliases for level/severity fields.
const LEVEL_ALIASES: &[&str] = &["level", "severity", "loglevel", "lvl"];

/// Known aliases for message fields.
const MESSAGE_ALIASES: &[&str] = &["msg", "message", "event"];

/// Known aliases for the calling function field.
const FUNCTION_ALIASES: &[&str] = &["func", "function", "caller"];

/// Parse a line into a [`Record`].
///
/// Returns `None` when the line is not a JSON object; such lines pass
/// through unchanged. A missing level defaults to Info, a missing or
/// unparseable timestamp defaults to the current time.
pub fn parse_record(line: &str) -> Option<Record> {
    let trimmed = line.trim();
    if !trimmed.starts_with('{') {
        return None;
    }

    let parsed: serde_json::Value = serde_json::from_str(trimmed).ok()?;
    let serde_json::Value::Object(mut map) = parsed else {
        return None;
    };

    let time = find_and_remove(&mut map, TIME_ALIASES)
        .and_then(|v| timestamp::from_json_value(&v))
        .unwrap_or_else(jiff::Zoned::now);

    let level = find_and_remove(&mut map, LEVEL_ALIASES)
        .and_then(|v| level_from_value(&v))
        .unwrap_or(Level::Info);

    let message = find_and_remove(&mut map, MESSAGE_ALIASES)
        .map(text)
        .unwrap_or_default();

    let caller = extract_caller(&mut map);

    let mut fields = Fields::with_capacity(map.len());
    for (key, value) in map {
        fields.insert(key, field_value(value));
    }

    Some(Record {
        time,
        level,
        message,
        fields,
        caller,
    })
}

/// Remove and return the first matching alias key from the map.
///
/// Uses `shift_remove`: with `preserve_order` enabled, plain `remove` is a
/// swap-remove and would reorder the remaining fields.
fn find_and_remove(
    map: &mut serde_json::Map<String, serde_json::Value>,
    aliases: &[&str],
) -> Option<serde_json::Value> {
    aliases.iter().find_map(|&alias| map.shift_remove(alias))
}

/// Parse a level from string or numeric (bunyan/pino) representations.
fn level_from_value(value: &serde_json::Value) -> Option<Level> {
    match value {
        serde_json::Value::String(s) => Level::from_str_loose(s),
        serde_json::Value::Number(n) => n.as_i64().map(Level::from_numeric),
        _ => None,
    }
}

/// Extract a call-site location when the line carries one.
///
/// Requires a function name plus `file` and a numeric `line`; partial
/// locations stay in the field list untouched.
fn extract_caller(map: &mut serde_json::Map<String, serde_json::Value>) -> Option<Caller> {
    let function = FUNCTION_ALIASES
        .iter()
        .find(|&&alias| map.get(alias).is_some_and(serde_json::Value::is_string))?;
    let file_ok = map.get("file").is_some_and(serde_json::Value::is_string);
    let line_ok = map.get("line").is_some_and(serde_json::Value::is_u64);
    if !(file_ok && line_ok) {
        return None;
    }

    let function = map.shift_remove(*function)?;
    let file = map.shift_remove("file")?;
    let line = map.shift_remove("line")?.as_u64()?;
    #[allow(clippy::cast_possible_truncation)]
    Some(Caller::new(
        text(function),
        text(file),
        line.min(u64::from(u32::MAX)) as u32,
    ))
}

/// Convert a JSON value to plain text (strings unquoted).
fn text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Convert a JSON value into the closed [`FieldValue`] set.
fn field_value(value: serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::String(s) => FieldValue::Str(s),
        serde_json::Value::Bool(b) => FieldValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float(f)
            } else {
                FieldValue::Other(n.to_string())
            }
        }
        // Null, arrays, and objects render as compact JSON.
        other => FieldValue::Other(other.to_string()),
    }
}
