//! Numeric and CSS-flavored values in DTD files.
//!
//! Whether a key holds a number, a CSS length or a list of size declarations
//! is not declared anywhere; it is inferred from the reference value.

use crate::check::{Check, CheckContext};
use crate::entity::Entity;
use l10n_diagnostics::{Category, Diagnostic, Position};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]+|[0-9]*\.[0-9]+)$").unwrap());

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<number>[0-9]+|[0-9]*\.[0-9]+)(?P<unit>em|px|ch|cm|in)$").unwrap()
});

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<property>(?:min-)?(?:width|height))\s*:\s*(?P<length>\S+)$").unwrap()
});

/// A number followed by a unit, such as `20ch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length {
    pub number: String,
    pub unit: String,
}

impl Length {
    /// Parse a whole value as a length.
    pub fn parse(value: &str) -> Option<Length> {
        let caps = LENGTH.captures(value)?;
        Some(Length {
            number: caps["number"].to_string(),
            unit: caps["unit"].to_string(),
        })
    }
}

/// One `property: length` pair of a size declaration list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub length: Length,
}

/// Parse `width: 20ch; height: 280px;` style lists.
///
/// Declarations are separated by `;`, with an optional trailing `;`.
fn parse_declarations(value: &str) -> Option<Vec<Declaration>> {
    let trimmed = value.trim();
    let body = trimmed.strip_suffix(';').unwrap_or(trimmed);

    let mut declarations = Vec::new();
    for part in body.split(';') {
        let caps = DECLARATION.captures(part.trim())?;
        let length = Length::parse(&caps["length"])?;
        declarations.push(Declaration {
            property: caps["property"].to_string(),
            length,
        });
    }
    Some(declarations)
}

/// The shape of a reference value.
///
/// Detection is total and tried in order: number, length, declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssShape {
    Number,
    Length(Length),
    Spec(Vec<Declaration>),
    Other,
}

impl CssShape {
    /// Infer the shape of `value`.
    ///
    /// ```
    /// use l10n_checks::checks::CssShape;
    ///
    /// assert_eq!(CssShape::detect("0"), CssShape::Number);
    /// assert!(matches!(CssShape::detect("10ch"), CssShape::Length(_)));
    /// assert!(matches!(CssShape::detect("min-height: 50em;"), CssShape::Spec(_)));
    /// assert_eq!(CssShape::detect("Downloads"), CssShape::Other);
    /// ```
    pub fn detect(value: &str) -> CssShape {
        if NUMBER.is_match(value) {
            CssShape::Number
        } else if let Some(length) = Length::parse(value) {
            CssShape::Length(length)
        } else if let Some(declarations) = parse_declarations(value) {
            CssShape::Spec(declarations)
        } else {
            CssShape::Other
        }
    }
}

/// Compare two declaration lists, returning the joined warning text if any.
fn compare_declarations(reference: &[Declaration], localized: &[Declaration]) -> Option<String> {
    fn find(list: &[Declaration], property: &str) -> bool {
        list.iter().any(|d| d.property == property)
    }

    let mut messages = Vec::new();
    for decl in reference {
        if !find(localized, &decl.property) {
            messages.push(format!("{} only in reference", decl.property));
        }
    }
    for decl in localized {
        if !find(reference, &decl.property) {
            messages.push(format!("{} only in l10n", decl.property));
        }
    }
    for decl in localized {
        let Some(ref_decl) = reference.iter().find(|d| d.property == decl.property) else {
            continue;
        };
        if ref_decl.length.unit != decl.length.unit {
            messages.push(format!(
                "units for {} don't match ({} != {})",
                decl.property, decl.length.unit, ref_decl.length.unit
            ));
        }
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

/// Keeps numbers numbers and CSS values CSS values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssCheck;

impl Check for CssCheck {
    fn name(&self) -> &str {
        "css"
    }

    fn check(
        &self,
        _ctx: &CheckContext<'_>,
        reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    ) {
        let value = localized.value();
        match CssShape::detect(reference.value()) {
            CssShape::Number => {
                if !NUMBER.is_match(value) {
                    out.push(Diagnostic::warning(
                        Position::START,
                        "reference is a number",
                        Category::Number,
                    ));
                }
            }
            CssShape::Length(_) => {
                if Length::parse(value).is_none() {
                    out.push(Diagnostic::error(
                        Position::START,
                        "reference is a CSS length",
                        Category::Css,
                    ));
                }
            }
            CssShape::Spec(ref_declarations) => match parse_declarations(value) {
                None => out.push(Diagnostic::error(
                    Position::START,
                    "reference is a CSS spec",
                    Category::Css,
                )),
                Some(declarations) => {
                    if let Some(message) = compare_declarations(&ref_declarations, &declarations) {
                        out.push(Diagnostic::warning(Position::START, message, Category::Css));
                    }
                }
            },
            CssShape::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::File;
    use l10n_diagnostics::Severity;
    use std::collections::BTreeSet;

    fn run(reference: &str, localized: &str) -> Vec<Diagnostic> {
        let file = File::new("foo.dtd", None);
        let known = BTreeSet::new();
        let ctx = CheckContext {
            file: &file,
            known_entities: &known,
        };
        let mut out = Vec::new();
        CssCheck.check(
            &ctx,
            &Entity::new("k", reference),
            &Entity::new("k", localized),
            &mut out,
        );
        out
    }

    fn messages(found: &[Diagnostic]) -> Vec<&str> {
        found.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn test_detect_shapes() {
        assert_eq!(CssShape::detect("12"), CssShape::Number);
        assert_eq!(CssShape::detect(".5"), CssShape::Number);
        assert_eq!(
            CssShape::detect("1.5em"),
            CssShape::Length(Length {
                number: "1.5".to_string(),
                unit: "em".to_string()
            })
        );
        assert_eq!(CssShape::detect("15miles"), CssShape::Other);
        assert_eq!(CssShape::detect(""), CssShape::Other);
        assert_eq!(CssShape::detect("width"), CssShape::Other);
        match CssShape::detect("width: 20ch; height: 280px;") {
            CssShape::Spec(decls) => {
                let props: Vec<_> = decls.iter().map(|d| d.property.as_str()).collect();
                assert_eq!(props, vec!["width", "height"]);
            }
            other => panic!("expected a spec, got {:?}", other),
        }
    }

    #[test]
    fn test_number() {
        let found = run("0", "foo");
        assert_eq!(
            found[0].as_tuple(),
            (Severity::Warning, Position::START, "reference is a number", Category::Number)
        );
        assert!(run("0", "42").is_empty());
    }

    #[test]
    fn test_length() {
        let found = run("10ch", "15miles");
        assert_eq!(
            found[0].as_tuple(),
            (Severity::Error, Position::START, "reference is a CSS length", Category::Css)
        );
        assert!(run("10ch", "12em").is_empty());
    }

    #[test]
    fn test_spec_not_parseable() {
        let style = "width: 20ch; height: 280px;";
        assert_eq!(messages(&run(style, "15ch")), vec!["reference is a CSS spec"]);
        assert_eq!(messages(&run(style, "junk")), vec!["reference is a CSS spec"]);
        assert_eq!(run(style, "junk")[0].severity, Severity::Error);
    }

    #[test]
    fn test_spec_missing_property() {
        let found = run("width: 20ch; height: 280px;", "width:15ch");
        assert_eq!(
            found[0].as_tuple(),
            (Severity::Warning, Position::START, "height only in reference", Category::Css)
        );
    }

    #[test]
    fn test_spec_unit_mismatch() {
        let found = run("width: 20ch; height: 280px;", "width:15em;height:200px;");
        assert_eq!(messages(&found), vec!["units for width don't match (em != ch)"]);
    }

    #[test]
    fn test_spec_findings_are_joined() {
        let found = run("width: 20ch; height: 280px;", "width: 2em; min-height: 3px");
        assert_eq!(found.len(), 1);
        insta::assert_snapshot!(
            found[0].message,
            @"height only in reference, min-height only in l10n, units for width don't match (em != ch)"
        );
    }

    #[test]
    fn test_spec_matches() {
        assert!(run("width: 20ch; height: 280px;", "width:12ch;height:200px;").is_empty());
        assert!(run("min-height: 50em;", "min-height: 40em").is_empty());
    }

    #[test]
    fn test_other_shapes_are_ignored() {
        assert!(run("Downloads", "0").is_empty());
    }
}
