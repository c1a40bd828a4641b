//! Core types for position mapping

use serde::{Deserialize, Serialize};

/// A location in a value (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Character offset from start of the value
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
}

impl Location {
    /// The `(line, column)` pair reported to translators: 1-based line, 0-based column.
    pub fn line_col(&self) -> (usize, usize) {
        (self.row + 1, self.column)
    }
}
