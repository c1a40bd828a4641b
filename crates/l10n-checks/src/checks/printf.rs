//! printf-style format specifiers in properties files.

use crate::check::{Check, CheckContext};
use crate::entity::Entity;
use l10n_diagnostics::{Category, Diagnostic, Position};
use l10n_source_map::char_offset;
use once_cell::sync::Lazy;
use regex::Regex;

/// Every `%` matches; a missing `good` group marks a stray percent sign.
static SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"%(?P<good>%|(?:(?P<number>[1-9][0-9]*)\$)?(?P<width>\*|[0-9]+)?(?P<prec>\.(?:\*|[0-9]+)?)?(?P<spec>[duxXosScpfg]))?",
    )
    .unwrap()
});

/// Why a value's specifiers could not be read.
///
/// Offsets are character offsets of the offending `%`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrintfError {
    #[error("Found single %")]
    SinglePercent { offset: usize },

    #[error("Mixed ordered and non-ordered args")]
    MixedOrdering { offset: usize },

    #[error("Double ordered argument {position}")]
    DoubleOrdered { position: usize, offset: usize },

    #[error("Ordered argument missing")]
    OrderedMissing,
}

impl PrintfError {
    /// Where to report this error.
    pub fn offset(&self) -> usize {
        match self {
            PrintfError::SinglePercent { offset }
            | PrintfError::MixedOrdering { offset }
            | PrintfError::DoubleOrdered { offset, .. } => *offset,
            PrintfError::OrderedMissing => 0,
        }
    }
}

/// Read the conversion characters of `value`, in argument order.
///
/// Numbered specifiers (`%2$s`) are placed at their position. `%%` is a
/// literal percent sign.
///
/// # Example
///
/// ```
/// use l10n_checks::checks::{PrintfError, parse_printf};
///
/// assert_eq!(parse_printf("%2$s of %1$d"), Ok(vec!['d', 's']));
/// assert_eq!(parse_printf("100%% done"), Ok(vec![]));
/// assert_eq!(
///     parse_printf("100% done"),
///     Err(PrintfError::SinglePercent { offset: 3 })
/// );
/// ```
///
/// # Errors
///
/// Returns a [`PrintfError`] for stray `%`, mixed numbering, duplicate
/// positions and gaps.
pub fn parse_printf(value: &str) -> Result<Vec<char>, PrintfError> {
    let mut sequential: Vec<char> = Vec::new();
    let mut ordered: Vec<Option<char>> = Vec::new();

    for caps in SPECIFIER.captures_iter(value) {
        let start = caps.get(0).map_or(0, |m| m.start());
        let offset = || char_offset(value, start);

        let Some(good) = caps.name("good") else {
            return Err(PrintfError::SinglePercent { offset: offset() });
        };
        if good.as_str() == "%" {
            continue;
        }
        let Some(spec) = caps.name("spec").and_then(|m| m.as_str().chars().next()) else {
            continue;
        };

        match caps.name("number") {
            Some(number) => {
                if !sequential.is_empty() {
                    return Err(PrintfError::MixedOrdering { offset: offset() });
                }
                let position = match number.as_str().parse::<usize>() {
                    // There cannot be more arguments than characters
                    Ok(n) if n <= value.len() => n,
                    _ => return Err(PrintfError::OrderedMissing),
                };
                if ordered.len() < position {
                    ordered.resize(position, None);
                }
                let slot = &mut ordered[position - 1];
                if slot.is_some() {
                    return Err(PrintfError::DoubleOrdered {
                        position,
                        offset: offset(),
                    });
                }
                *slot = Some(spec);
            }
            None => {
                if !ordered.is_empty() {
                    return Err(PrintfError::MixedOrdering { offset: offset() });
                }
                sequential.push(spec);
            }
        }
    }

    if ordered.is_empty() {
        return Ok(sequential);
    }
    ordered
        .into_iter()
        .collect::<Option<Vec<char>>>()
        .ok_or(PrintfError::OrderedMissing)
}

/// Compare argument lists, returning the joined error text if any.
fn compare_specs(reference: &[char], localized: &[char]) -> Option<String> {
    let mut messages = Vec::new();
    for i in 0..reference.len().max(localized.len()) {
        let argument = i + 1;
        match (localized.get(i), reference.get(i)) {
            (Some(l), Some(r)) if l != r => {
                messages.push(format!("argument {} `{}` should be `{}`", argument, l, r));
            }
            (None, Some(r)) => messages.push(format!("argument {} `{}` missing", argument, r)),
            (Some(l), None) => messages.push(format!("argument {} `{}` obsolete", argument, l)),
            _ => {}
        }
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

/// Keeps format arguments aligned between reference and translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfCheck;

impl Check for PrintfCheck {
    fn name(&self) -> &str {
        "printf"
    }

    fn check(
        &self,
        _ctx: &CheckContext<'_>,
        reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    ) {
        let ref_specs = match parse_printf(reference.value()) {
            Ok(specs) if specs.is_empty() => return,
            Ok(specs) => specs,
            Err(err) => {
                tracing::debug!(key = reference.key(), error = %err, "Reference has unparseable printf specifiers");
                return;
            }
        };

        match parse_printf(localized.value()) {
            Err(err) => out.push(Diagnostic::error(
                Position::Offset(err.offset()),
                err.to_string(),
                Category::Printf,
            )),
            Ok(specs) => {
                if let Some(message) = compare_specs(&ref_specs, &specs) {
                    out.push(Diagnostic::error(Position::START, message, Category::Printf));
                }
            }
        }
    }
}
