//! Newline index for fast location lookups

use crate::types::Location;
use serde::{Deserialize, Serialize};

/// Newline index over a single value
///
/// Stores the character offsets of every newline so that character offsets can
/// be converted to (row, column) positions without rescanning the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIndex {
    /// Character offsets of each newline character in the value
    line_breaks: Vec<usize>,

    /// Total length of the value in characters
    total_length: usize,
}

impl LineIndex {
    /// Build the index by scanning the value once.
    ///
    /// # Example
    ///
    /// ```
    /// use l10n_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("line 1\nline 2\nline 3");
    /// assert_eq!(index.total_length(), 20);
    /// ```
    pub fn new(content: &str) -> Self {
        let line_breaks: Vec<usize> = content
            .chars()
            .enumerate()
            .filter_map(|(idx, ch)| (ch == '\n').then_some(idx))
            .collect();
        let total_length = content.chars().count();

        LineIndex {
            line_breaks,
            total_length,
        }
    }

    /// Convert a character offset to a Location with row and column
    ///
    /// Uses binary search to find which line contains the offset.
    /// Returns None if the offset is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use l10n_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("hello\nwörld");
    /// let loc = index.offset_to_location(8).unwrap();
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 2);
    /// ```
    pub fn offset_to_location(&self, offset: usize) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        // A newline belongs to the line it terminates, so an exact hit and an
        // insertion point both give the row.
        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) | Err(idx) => idx,
        };

        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks[row - 1] + 1
        };

        Some(Location {
            offset,
            row,
            column: offset - line_start,
        })
    }

    /// Like [`offset_to_location`](Self::offset_to_location), but clamps
    /// out-of-range offsets to the end of the value.
    pub fn clamped_location(&self, offset: usize) -> Location {
        let offset = offset.min(self.total_length);
        self.offset_to_location(offset)
            .unwrap_or(Location {
                offset,
                row: 0,
                column: offset,
            })
    }

    /// Get the total length of the value in characters
    pub fn total_length(&self) -> usize {
        self.total_length
    }
}
