//! Named replacement of directives.
//!
//! A replacement collapses every occurrence of a directive into a single
//! contiguous block of comment-free records, placed where the last original
//! occurrence was, or appended when the directive was absent.

use tracing::debug;

use crate::core::document::Document;
use crate::core::error::EditError;
use crate::core::line::{Directive, Line};
use crate::core::parser::split_name_value;

/// Outcome of a single [`replace_values`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub name: String,
    /// Number of existing occurrences removed.
    pub removed: usize,
    /// Number of new records inserted.
    pub inserted: usize,
    /// Index of the first inserted record, `None` for a no-op.
    pub position: Option<usize>,
}

impl Replacement {
    fn noop(name: &str) -> Self {
        Self {
            name: name.to_string(),
            removed: 0,
            inserted: 0,
            position: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.position.is_none()
    }
}

/// Replace every `name` directive with one record per entry of `values`.
///
/// Empty `values` leaves the document untouched. Otherwise all matches are
/// removed and the new records are inserted, in the given order, at the slot
/// of the last removed match (or at the end when there was none).
///
/// Every value is checked with [`validate_value`] first; on error `doc` is
/// left unchanged.
pub fn replace_values<S: AsRef<str>>(
    doc: &mut Document,
    name: &str,
    values: &[S],
) -> Result<Replacement, EditError> {
    if values.is_empty() {
        return Ok(Replacement::noop(name));
    }
    for value in values {
        validate_value(name, value.as_ref())?;
    }

    let lines = doc.lines_mut();
    let matches: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_directive_named(name))
        .map(|(idx, _)| idx)
        .collect();

    // Earlier matches shift the last one left once they are removed.
    let position = match matches.last() {
        Some(&last) => last + 1 - matches.len(),
        None => lines.len(),
    };

    lines.retain(|line| !line.is_directive_named(name));
    lines.splice(
        position..position,
        values
            .iter()
            .map(|value| Line::Directive(Directive::new(name, value.as_ref()))),
    );

    debug!(
        name,
        removed = matches.len(),
        inserted = values.len(),
        position,
        "replaced directive"
    );

    Ok(Replacement {
        name: name.to_string(),
        removed: matches.len(),
        inserted: values.len(),
        position: Some(position),
    })
}

/// Reject values that would not render back as a single `name value` line.
///
/// Line breaks would split the directive, `#` would start an inline comment,
/// and surrounding whitespace (or an empty value) is lost on re-parse.
pub fn validate_value(name: &str, value: &str) -> Result<(), EditError> {
    let reason = if value.is_empty() {
        "value is empty"
    } else if value.contains(['\n', '\r']) {
        "value contains a line break"
    } else if value.contains('#') {
        "value contains '#', which starts an inline comment"
    } else if value.trim() != value {
        "value has leading or trailing whitespace"
    } else {
        return Ok(());
    };
    Err(EditError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    })
}

/// Parse `"<name> <value>"` entries, grouped by name.
///
/// Names keep their first-seen order and values keep the order they were
/// supplied in. Fails on the first entry that has no value or whose value
/// does not pass [`validate_value`].
pub fn parse_custom_values<S: AsRef<str>>(
    entries: &[S],
) -> Result<Vec<(String, Vec<String>)>, EditError> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for entry in entries {
        let raw = entry.as_ref();
        let (name, value) =
            split_name_value(raw.trim()).ok_or_else(|| EditError::InvalidCustomValue {
                raw: raw.to_string(),
            })?;
        validate_value(name, value)?;

        match grouped.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => grouped.push((name.to_string(), vec![value.to_string()])),
        }
    }
    Ok(grouped)
}

/// Apply free-form `"<name> <value>"` entries.
///
/// Every entry is parsed before the document is touched, so an invalid entry
/// leaves `doc` unchanged.
pub fn replace_custom_values<S: AsRef<str>>(
    doc: &mut Document,
    entries: &[S],
) -> Result<Vec<Replacement>, EditError> {
    let grouped = parse_custom_values(entries)?;
    grouped
        .iter()
        .map(|(name, values)| replace_values(doc, name, values))
        .collect()
}
