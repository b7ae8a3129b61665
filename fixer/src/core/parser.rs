//! Line-oriented parser for `name value [# comment]` configuration text.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::document::Document;
use crate::core::line::{Directive, Line};

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("separator pattern is valid"));

/// Parse raw configuration text into an ordered document.
///
/// Every input line yields exactly one record; nothing is validated beyond
/// tokenization.
pub fn parse_document(raw: &str) -> Document {
    raw.lines().map(parse_line).collect()
}

/// Classify a single line.
///
/// - `#`-prefixed lines, blank lines and single-token lines are verbatim.
/// - Otherwise the first token is the name and the remainder is split on the
///   first `#` into value and inline comment.
pub fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.starts_with('#') {
        return Line::Verbatim(line.to_string());
    }

    let Some((name, rest)) = split_name_value(line) else {
        return Line::Verbatim(line.to_string());
    };

    let (value, comment) = match rest.split_once('#') {
        Some((value, comment)) => {
            let comment = comment.trim();
            let comment = (!comment.is_empty()).then(|| comment.to_string());
            (value.trim(), comment)
        }
        None => (rest.trim(), None),
    };

    Line::Directive(Directive {
        name: name.to_string(),
        value: value.to_string(),
        comment,
    })
}

/// Split `text` on its first whitespace run.
///
/// Returns `None` when there is no separator, i.e. the text is a single
/// token (or empty). `text` is expected to be trimmed already.
pub fn split_name_value(text: &str) -> Option<(&str, &str)> {
    let mut parts = SEPARATOR.splitn(text, 2);
    let name = parts.next()?;
    let rest = parts.next()?;
    Some((name, rest))
}
