//! Ordered, round-trip-safe configuration document.

use crate::core::line::Line;

/// Ordered sequence of line records.
///
/// Order is the rendering order; mutators reposition records only where a
/// replacement explicitly collapses a directive into one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<Line> {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Values of every directive named `name`, in document order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(Line::as_directive)
            .filter(|directive| directive.name == name)
            .map(|directive| directive.value.as_str())
            .collect()
    }
}

impl FromIterator<Line> for Document {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
