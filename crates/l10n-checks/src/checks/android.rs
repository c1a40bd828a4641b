//! Quote and unicode escaping rules for Android string resources.
//!
//! Android's resource compiler treats unescaped `'` and `"` specially and
//! rejects `\u` escapes without four hex digits. DTD values that end up in
//! Android strings have to follow those rules.

use crate::check::{Check, CheckContext};
use crate::entity::Entity;
use l10n_diagnostics::{Category, Diagnostic, Position};

pub(crate) const APOSTROPHE_MESSAGE: &str = "Apostrophes in Android DTDs need escaping with \\' or \\u0027, or use \u{2019}, or put string in quotes.";

pub(crate) const QUOTE_MESSAGE: &str =
    "Quotes in Android DTDs need escaping with \\\" or \\u0022, or put string in apostrophes.";

pub(crate) const TRUNCATED_ESCAPE_MESSAGE: &str = "truncated \\uXXXX escape";

/// Escaping rules for values in Android modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidCheck;

/// The quote character wrapping the whole value, if any.
fn wrapping_quote(chars: &[char]) -> Option<char> {
    match (chars.first(), chars.last()) {
        (Some(&first), Some(&last)) if chars.len() >= 2 && first == last => {
            matches!(first, '\'' | '"').then_some(first)
        }
        _ => None,
    }
}

/// Report unescaped quotes as `(offset, message)`.
///
/// A quote is escaped by an odd run of backslashes. In a value wrapped in one
/// kind of quote, the other kind needs no escaping.
fn quote_findings(chars: &[char]) -> Vec<(usize, &'static str)> {
    let wrap = wrapping_quote(chars);
    let (start, end) = match wrap {
        Some(_) => (1, chars.len() - 1),
        None => (0, chars.len()),
    };

    let mut findings = Vec::new();
    let mut backslashes = 0;
    for (i, &c) in chars.iter().enumerate().take(end).skip(start) {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        let escaped = backslashes % 2 == 1;
        backslashes = 0;
        if escaped || wrap.is_some_and(|w| w != c) {
            continue;
        }
        match c {
            '\'' => findings.push((i, APOSTROPHE_MESSAGE)),
            '"' => findings.push((i, QUOTE_MESSAGE)),
            _ => {}
        }
    }
    findings
}

/// Report `\u` escapes not followed by four hex digits.
fn escape_findings(chars: &[char]) -> Vec<(usize, &'static str)> {
    let mut findings = Vec::new();
    let mut backslashes = 0;
    for (i, &c) in chars.iter().enumerate() {
        if c != '\\' {
            backslashes = 0;
            continue;
        }
        if backslashes % 2 == 0 && chars.get(i + 1) == Some(&'u') {
            let complete = chars
                .get(i + 2..i + 6)
                .is_some_and(|digits| digits.iter().all(char::is_ascii_hexdigit));
            if !complete {
                findings.push((i, TRUNCATED_ESCAPE_MESSAGE));
            }
        }
        backslashes += 1;
    }
    findings
}

impl Check for AndroidCheck {
    fn name(&self) -> &str {
        "android"
    }

    fn check(
        &self,
        _ctx: &CheckContext<'_>,
        _reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    ) {
        let chars: Vec<char> = localized.value().chars().collect();

        let mut findings = quote_findings(&chars);
        findings.extend(escape_findings(&chars));
        // Stable, so quote findings stay ahead at equal offsets
        findings.sort_by_key(|(offset, _)| *offset);

        out.extend(findings.into_iter().map(|(offset, message)| {
            Diagnostic::error(Position::Offset(offset), message, Category::Android)
        }));
    }
}
