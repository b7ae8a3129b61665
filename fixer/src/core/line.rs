//! Line records: the atomic unit of a parsed configuration.

/// A `name value [# comment]` line.
///
/// `name` never contains whitespace; the first whitespace run is the
/// separator and is consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub value: String,
    /// Inline comment text without the leading `#`. Never empty when present.
    pub comment: Option<String>,
}

impl Directive {
    /// Directive without an inline comment, as produced by replacements.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: None,
        }
    }
}

/// One line of a configuration document.
///
/// Comments, blank lines and lines with a single token are kept as
/// [`Line::Verbatim`] holding the trimmed text, and render unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Directive(Directive),
    Verbatim(String),
}

impl Line {
    /// True if this is a directive named `name`.
    pub fn is_directive_named(&self, name: &str) -> bool {
        matches!(self, Line::Directive(directive) if directive.name == name)
    }

    pub fn as_directive(&self) -> Option<&Directive> {
        match self {
            Line::Directive(directive) => Some(directive),
            Line::Verbatim(_) => None,
        }
    }

    /// True for a verbatim line with no text (a blank line).
    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Verbatim(text) if text.is_empty())
    }
}

impl From<Directive> for Line {
    fn from(directive: Directive) -> Self {
        Line::Directive(directive)
    }
}
