//! Entity and character reference extraction.

use crate::names::is_name;

/// The entities every XML processor knows without a DTD.
pub const PREDEFINED_ENTITIES: [&str; 5] = ["amp", "lt", "gt", "quot", "apos"];

/// Whether `name` is one of the [`PREDEFINED_ENTITIES`].
pub fn is_predefined(name: &str) -> bool {
    PREDEFINED_ENTITIES.contains(&name)
}

/// A reference found in a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `&name;`
    Named {
        /// The entity name, verbatim.
        name: String,
        /// Byte offset of the `&`.
        offset: usize,
    },
    /// `&#N;` or `&#xH;`
    Character {
        /// The referenced character.
        value: char,
        /// Byte offset of the `&`.
        offset: usize,
    },
}

impl Reference {
    /// The entity name, for named references.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Named { name, .. } => Some(name),
            Reference::Character { .. } => None,
        }
    }
}

/// Outcome of reading a reference at an `&`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedReference {
    /// A complete reference and its length in bytes, `;` included.
    Complete(Reference, usize),
    /// A well-formed numeric reference to a character XML forbids.
    InvalidCharacter,
    /// The `&` does not start a reference.
    Malformed,
}

/// Read the reference starting at `offset`, which must point at an `&`.
pub(crate) fn parse_reference(text: &str, offset: usize) -> ParsedReference {
    let rest = &text[offset + 1..];
    let Some(end) = rest.find(';') else {
        return ParsedReference::Malformed;
    };
    let body = &rest[..end];
    let len = end + 2;

    if let Some(number) = body.strip_prefix('#') {
        let parsed = match number.strip_prefix('x') {
            Some(hex) if is_digits(hex, 16) => u32::from_str_radix(hex, 16),
            None if is_digits(number, 10) => number.parse::<u32>(),
            _ => return ParsedReference::Malformed,
        };
        return match parsed.ok().and_then(char::from_u32).filter(|c| is_xml_char(*c)) {
            Some(value) => ParsedReference::Complete(Reference::Character { value, offset }, len),
            None => ParsedReference::InvalidCharacter,
        };
    }

    if is_name(body) {
        ParsedReference::Complete(
            Reference::Named {
                name: body.to_string(),
                offset,
            },
            len,
        )
    } else {
        ParsedReference::Malformed
    }
}

fn is_digits(s: &str, radix: u32) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_digit(radix))
}

pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Collect every complete reference in `value`, in order of appearance.
///
/// Stray ampersands are skipped; they are a well-formedness problem reported
/// by [`check_fragment`](crate::check_fragment), not a reference.
///
/// # Example
///
/// ```
/// use l10n_xml::references;
///
/// let refs = references("&brandShortName; &amp; & &#x41;");
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs[0].name(), Some("brandShortName"));
/// assert_eq!(refs[1].name(), Some("amp"));
/// assert_eq!(refs[2].name(), None);
/// ```
pub fn references(value: &str) -> Vec<Reference> {
    value
        .match_indices('&')
        .filter_map(|(offset, _)| match parse_reference(value, offset) {
            ParsedReference::Complete(reference, _) => Some(reference),
            _ => None,
        })
        .collect()
}
