//! Plural placeholder consistency.
//!
//! Plural strings are `;`-separated forms using `#1`, `#2`, ... as
//! placeholders. The translation may have a different number of forms, but
//! must use the same placeholders overall.

use crate::check::{Check, CheckContext};
use crate::entity::Entity;
use l10n_diagnostics::{Category, Diagnostic, Position};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([0-9]+)").unwrap());

/// Compares `#N` placeholders between reference and translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluralCheck;

/// Collect placeholder indices. Indices too large for `u64` keep their text.
fn placeholders(value: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(value)
        .map(|caps| {
            let digits = &caps[1];
            match digits.parse::<u64>() {
                Ok(n) => n.to_string(),
                Err(_) => digits.to_string(),
            }
        })
        .collect()
}

impl Check for PluralCheck {
    fn name(&self) -> &str {
        "plural"
    }

    fn check(
        &self,
        _ctx: &CheckContext<'_>,
        reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    ) {
        let ref_vars = placeholders(reference.value());
        if ref_vars.is_empty() {
            return;
        }
        let l10n_vars = placeholders(localized.value());

        if !ref_vars.is_subset(&l10n_vars) {
            out.push(Diagnostic::warning(
                Position::START,
                "not all variables used in l10n",
                Category::Plural,
            ));
        }
        if !l10n_vars.is_subset(&ref_vars) {
            out.push(Diagnostic::error(
                Position::START,
                "unreplaced variables in l10n",
                Category::Plural,
            ));
        }
    }
}
