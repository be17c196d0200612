//! Reserved-key collision handling and render-list construction.
//!
//! The logfmt output owns the keys `time`, `msg`, and `level`; caller fields
//! under those names are renamed with a `fields.` prefix so the reserved
//! keys always refer to the record's own timestamp, message, and level.
//! Renaming happens in a derived list rather than by mutating the record,
//! so formatting the same record twice yields identical output.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::record::Fields;
use crate::value::FieldValue;

/// Output keys owned by the formatter.
pub const RESERVED_KEYS: &[&str] = &["time", "msg", "level"];

/// Field key carrying the prefix tag; never rendered as a field.
pub const PREFIX_KEY: &str = "prefix";

/// Prefix applied to caller fields that collide with a reserved key.
const CLASH_PREFIX: &str = "fields.";

/// Build the list of fields to render, in final output order.
///
/// Excludes [`PREFIX_KEY`], renames reserved-key collisions to
/// `fields.<name>`, and sorts keys byte-wise ascending when `sort` is set
/// (otherwise insertion order is preserved). A renamed entry replaces any
/// literal `fields.<name>` the caller also supplied; a literal
/// `fields.<name>` with no colliding counterpart is left untouched, so the
/// renaming never compounds.
pub fn render_list(fields: &Fields, sort: bool) -> Vec<(Cow<'_, str>, &FieldValue)> {
    let mut list: IndexMap<Cow<'_, str>, &FieldValue> = IndexMap::with_capacity(fields.len());

    for (key, value) in fields {
        if key == PREFIX_KEY || RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        list.insert(Cow::Borrowed(key.as_str()), value);
    }

    // Renamed collisions go last so they win over a literal fields.<name>.
    for &reserved in RESERVED_KEYS {
        if let Some(value) = fields.get(reserved) {
            list.insert(Cow::Owned(format!("{CLASH_PREFIX}{reserved}")), value);
        }
    }

    let mut list: Vec<_> = list.into_iter().collect();
    if sort {
        list.sort_by(|a, b| a.0.cmp(&b.0));
    }
    list
}
