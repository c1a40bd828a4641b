//! The entity model shared with resource parsers.

use l10n_source_map::LineIndex;
use std::ops::Range;

/// One localizable key/value pair extracted from a resource file.
///
/// Entities are produced by the resource parsers; the checks only read them.
/// `value` is the raw value as written in the file, with markup, backslashes
/// and entity references intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    key: String,
    value: String,
    value_span: Range<usize>,
    lines: LineIndex,
}

impl Entity {
    /// Create an entity. The value span defaults to the whole value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let lines = LineIndex::new(&value);
        let value_span = 0..lines.total_length();
        Self {
            key: key.into(),
            value,
            value_span,
            lines,
        }
    }

    /// Record where the value sits in its resource file.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.value_span = span;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Character span of the value in its resource file.
    pub fn value_span(&self) -> Range<usize> {
        self.value_span.clone()
    }

    /// Map a character offset within the value to `(line, column)`.
    ///
    /// Lines are 1-based and count lines of the value, columns are 0-based.
    /// Offsets past the end clamp to the end of the value.
    ///
    /// # Example
    ///
    /// ```
    /// use l10n_checks::Entity;
    ///
    /// let entity = Entity::new("foo", "This is\n  </bad>\nstuff");
    /// assert_eq!(entity.position(12), (2, 4));
    /// ```
    pub fn position(&self, offset: usize) -> (usize, usize) {
        self.lines.clamped_location(offset).line_col()
    }
}
