//! Render a document back to configuration text.

use crate::core::document::Document;
use crate::core::line::{Directive, Line};

/// Render `doc` as newline-separated text.
///
/// Trailing blank lines collapse so the output always ends with exactly one
/// newline. An empty document renders as a single blank line.
pub fn render(doc: &Document) -> String {
    let lines = doc.lines();
    let end = lines
        .iter()
        .rposition(|line| !line.is_blank())
        .map_or(0, |idx| idx + 1);

    let mut out = String::new();
    for line in &lines[..end] {
        render_line(line, &mut out);
        out.push('\n');
    }
    if out.is_empty() {
        out.push('\n');
    }
    out
}

fn render_line(line: &Line, out: &mut String) {
    match line {
        Line::Directive(directive) => render_directive(directive, out),
        Line::Verbatim(text) => out.push_str(text),
    }
}

fn render_directive(directive: &Directive, out: &mut String) {
    let comment = directive.comment.as_deref().filter(|c| !c.is_empty());
    out.push_str(&directive.name);
    // `name ` re-parses as the verbatim line `name`, so emit exactly that.
    if directive.value.is_empty() && comment.is_none() {
        return;
    }
    out.push(' ');
    out.push_str(&directive.value);
    if let Some(comment) = comment {
        out.push_str("  # ");
        out.push_str(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mutator::replace_values;
    use crate::core::parser::parse_document;
    use crate::test_support::{SAMPLE_CONF, directive, directive_with_comment, verbatim};

    #[test]
    fn directive_with_comment_uses_two_space_separator() {
        let doc: Document = vec![directive_with_comment("Foo", "bar", "baz")]
            .into_iter()
            .collect();
        assert_eq!(render(&doc), "Foo bar  # baz\n");
    }

    #[test]
    fn verbatim_lines_render_unchanged() {
        let doc: Document = vec![verbatim("# comment"), verbatim("Foreground"), directive("Checks", "12")]
            .into_iter()
            .collect();
        assert_eq!(render(&doc), "# comment\nForeground\nChecks 12\n");
    }

    #[test]
    fn trailing_blank_lines_collapse_to_one_newline() {
        for source in ["Checks 12", "Checks 12\n", "Checks 12\n\n", "Checks 12\n\n\n\n\n\n"] {
            assert_eq!(render(&parse_document(source)), "Checks 12\n", "source {source:?}");
        }
    }

    #[test]
    fn inner_blank_lines_are_preserved() {
        let source = "# a\n\n\nChecks 12\n\n# b\n";
        assert_eq!(render(&parse_document(source)), source);
    }

    #[test]
    fn empty_document_renders_single_blank_line() {
        assert_eq!(render(&Document::new()), "\n");
        assert_eq!(render(&parse_document("\n\n\n")), "\n");
    }

    #[test]
    fn rendering_normalizes_directive_spacing() {
        let doc = parse_document("  DatabaseMirror\t\tdb.local.clamav.net   #  local  \n");
        assert_eq!(render(&doc), "DatabaseMirror db.local.clamav.net  # local\n");
    }

    #[test]
    fn empty_value_without_comment_renders_bare_name() {
        let doc = parse_document("Checks #\n");
        let once = render(&doc);
        assert_eq!(once, "Checks\n");
        assert_eq!(render(&parse_document(&once)), once);
    }

    #[test]
    fn render_parse_render_is_stable() {
        let once = render(&parse_document(SAMPLE_CONF));
        let twice = render(&parse_document(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn edited_document_round_trips() {
        let mut doc = parse_document(SAMPLE_CONF);
        replace_values(&mut doc, "DatabaseMirror", &["a.example.net", "b.example.net"])
            .expect("replace mirrors");
        replace_values(&mut doc, "Checks", &["24"]).expect("replace checks");

        let rendered = render(&doc);
        assert_eq!(render(&parse_document(&rendered)), rendered);
    }
}
