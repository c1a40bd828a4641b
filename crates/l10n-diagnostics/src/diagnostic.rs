//! Core diagnostic types.
//!
//! This module defines the shared contract every check honors: how severe a
//! finding is, where it is, what it says, and which category it belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious, but the product still works
    Warning,
    /// The translation breaks the product
    Error,
}

impl Severity {
    /// The stable lowercase tag (`"warning"` or `"error"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the localized value a diagnostic applies.
///
/// Character-level checks report an offset into the value. Markup checks
/// report a `(line, column)` pair resolved through the entity's position
/// mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// Character offset into the localized value
    Offset(usize),
    /// 1-based line and 0-based column
    LineCol(usize, usize),
}

impl Position {
    /// The position used for findings that apply to the whole value.
    pub const START: Position = Position::Offset(0);

    /// The character offset, if this is an offset position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Position::Offset(offset) => Some(*offset),
            Position::LineCol(..) => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Offset(offset) => write!(f, "{}", offset),
            Position::LineCol(line, column) => write!(f, "{}:{}", line, column),
        }
    }
}

/// The closed set of diagnostic categories.
///
/// The lowercase tags are stable; reporting and suppression tooling keys on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Plural placeholder consistency
    Plural,
    /// Markup well-formedness and entity references
    XmlParse,
    /// Numeric values
    Number,
    /// CSS lengths and declarations
    Css,
    /// Android quote and unicode escaping
    Android,
    /// printf format specifiers
    Printf,
}

impl Category {
    /// Every category, in a stable order.
    pub const ALL: [Category; 6] = [
        Category::Plural,
        Category::XmlParse,
        Category::Number,
        Category::Css,
        Category::Android,
        Category::Printf,
    ];

    /// The stable lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Plural => "plural",
            Category::XmlParse => "xmlparse",
            Category::Number => "number",
            Category::Css => "css",
            Category::Android => "android",
            Category::Printf => "printf",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// One reported translation defect.
///
/// Diagnostics are immutable data with no identity; two diagnostics with the
/// same fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How severe the defect is
    pub severity: Severity,
    /// Where the defect is
    pub position: Position,
    /// Human-readable description
    pub message: String,
    /// Stable category tag
    pub category: Category,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new(
        severity: Severity,
        position: Position,
        message: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            severity,
            position,
            message: message.into(),
            category,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(position: Position, message: impl Into<String>, category: Category) -> Self {
        Self::new(Severity::Warning, position, message, category)
    }

    /// Create an error diagnostic.
    pub fn error(position: Position, message: impl Into<String>, category: Category) -> Self {
        Self::new(Severity::Error, position, message, category)
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Borrow the fields as a tuple, convenient for comparing whole result lists.
    ///
    /// # Example
    ///
    /// ```
    /// use l10n_diagnostics::{Category, Diagnostic, Position, Severity};
    ///
    /// let diag = Diagnostic::error(Position::Offset(0), "reference is a CSS length", Category::Css);
    /// assert_eq!(
    ///     diag.as_tuple(),
    ///     (Severity::Error, Position::Offset(0), "reference is a CSS length", Category::Css)
    /// );
    /// ```
    pub fn as_tuple(&self) -> (Severity, Position, &str, Category) {
        (self.severity, self.position, &self.message, self.category)
    }

    /// Render this diagnostic as a JSON value.
    ///
    /// ```json
    /// {
    ///   "severity": "error",
    ///   "position": [1, 10],
    ///   "message": "mismatched tag",
    ///   "category": "xmlparse"
    /// }
    /// ```
    ///
    /// Offset positions render as a bare number.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let position = match self.position {
            Position::Offset(offset) => json!(offset),
            Position::LineCol(line, column) => json!([line, column]),
        };

        json!({
            "severity": self.severity.as_str(),
            "position": position,
            "message": self.message,
            "category": self.category.as_str(),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {} [{}]",
            self.severity, self.position, self.message, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Warning.as_str(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_category_round_trips_through_tag() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "escape".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown diagnostic category `escape`");
    }

    #[test]
    fn test_display_offset() {
        let diag = Diagnostic::error(
            Position::Offset(0),
            "argument 1 `S` should be `s`",
            Category::Printf,
        );
        insta::assert_snapshot!(diag.to_string(), @"error at 0: argument 1 `S` should be `s` [printf]");
    }

    #[test]
    fn test_display_line_col() {
        let diag = Diagnostic::error(Position::LineCol(2, 4), "mismatched tag", Category::XmlParse);
        insta::assert_snapshot!(diag.to_string(), @"error at 2:4: mismatched tag [xmlparse]");
    }

    #[test]
    fn test_to_json() {
        let diag = Diagnostic::warning(
            Position::LineCol(0, 0),
            "Referencing unknown entity `not`",
            Category::XmlParse,
        );
        let json = diag.to_json();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["position"], serde_json::json!([0, 0]));
        assert_eq!(json["message"], "Referencing unknown entity `not`");
        assert_eq!(json["category"], "xmlparse");

        let diag = Diagnostic::warning(Position::START, "reference is a number", Category::Number);
        assert_eq!(diag.to_json()["position"], 0);
    }

    #[test]
    fn test_serde_matches_to_json() {
        let diag = Diagnostic::error(Position::LineCol(1, 10), "mismatched tag", Category::XmlParse);
        let via_serde = serde_json::to_value(&diag).unwrap();
        assert_eq!(via_serde, diag.to_json());

        let back: Diagnostic = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, diag);
    }

    #[test]
    fn test_position_offset_accessor() {
        assert_eq!(Position::Offset(12).offset(), Some(12));
        assert_eq!(Position::LineCol(1, 2).offset(), None);
    }
}
