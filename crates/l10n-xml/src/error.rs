//! Error types for fragment scanning.

use std::fmt;

/// Result type alias for l10n-xml operations.
pub type Result<T> = std::result::Result<T, XmlError>;

/// Where a well-formedness problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLocation {
    /// Byte offset into the scanned value.
    InValue(usize),
    /// The problem surfaced in the synthetic closing tag, after the value ended.
    ///
    /// This happens for elements left open by the value.
    AfterValue,
}

/// The kinds of well-formedness problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A closing tag that does not match the innermost open element.
    MismatchedTag {
        /// The element that was open, if any.
        expected: Option<String>,
        /// The closing tag that was found.
        found: String,
    },

    /// A character sequence that cannot appear at this point.
    InvalidToken,

    /// A numeric character reference to a character XML does not allow.
    InvalidCharacterReference,

    /// Content after the value closed the synthetic root element.
    JunkAfterRoot,

    /// Markup that never ends, such as an unterminated tag or comment.
    UnclosedToken {
        /// Details from the underlying reader.
        details: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Messages follow the wording of expat, which translators and
        // existing dashboards already know.
        match self {
            ErrorKind::MismatchedTag { .. } => write!(f, "mismatched tag"),
            ErrorKind::InvalidToken => write!(f, "not well-formed (invalid token)"),
            ErrorKind::InvalidCharacterReference => {
                write!(f, "reference to invalid character number")
            }
            ErrorKind::JunkAfterRoot => write!(f, "junk after document element"),
            ErrorKind::UnclosedToken { .. } => write!(f, "unclosed token"),
        }
    }
}

/// A well-formedness problem in a scanned value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct XmlError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it went wrong.
    pub location: ErrorLocation,
}

impl XmlError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, location: ErrorLocation) -> Self {
        Self { kind, location }
    }
}
