//! Utility functions for working with positions in values

/// Convert a byte offset into a character offset
///
/// Offsets past the end, or inside a multi-byte character, count the
/// characters that start before them.
pub fn char_offset(source: &str, byte_offset: usize) -> usize {
    source
        .char_indices()
        .take_while(|(idx, _)| *idx < byte_offset)
        .count()
}

/// The `(line, column)` of the end of the value's last line
///
/// Lines are 1-based, columns 0-based. A trailing newline does not start a
/// new line here, so `"a\nbc\n"` ends at `(2, 2)`.
pub fn last_line_end(source: &str) -> (usize, usize) {
    let mut count = 0;
    let mut last = "";
    for line in source.lines() {
        count += 1;
        last = line;
    }
    (count.max(1), last.chars().count())
}
