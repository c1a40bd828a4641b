//! Position mapping for localized string values.
//!
//! Resource parsers hand each entity's raw value to the checks together with a
//! way to turn a character offset inside that value into a `(line, column)`
//! pair. This crate provides that mapping.
//!
//! # Overview
//!
//! - [`LineIndex`]: Newline index over one value, answering offset lookups
//! - [`Location`]: A resolved position (offset, row, column)
//! - [`char_offset`]: Convert a byte offset into a character offset
//!
//! # Example
//!
//! ```rust
//! use l10n_source_map::LineIndex;
//!
//! let index = LineIndex::new("This is\n  </bad>\nstuff");
//! let loc = index.offset_to_location(12).unwrap();
//! assert_eq!((loc.row, loc.column), (1, 4));
//! ```
//!
//! All offsets handled here are character offsets, not byte offsets, because
//! diagnostics are reported against what a translator sees in an editor.

pub mod line_index;
pub mod types;
pub mod utils;

pub use line_index::LineIndex;
pub use types::Location;
pub use utils::{char_offset, last_line_end};
