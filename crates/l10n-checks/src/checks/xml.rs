//! Markup well-formedness and entity references in DTD values.

use crate::check::{Check, CheckContext};
use crate::entity::Entity;
use l10n_diagnostics::{Category, Diagnostic, Position};
use l10n_source_map::{char_offset, last_line_end};
use l10n_xml::{ErrorLocation, XmlError, check_fragment, is_predefined, references};
use std::collections::BTreeSet;

/// Parses the translation as XML content and reports entity references the
/// file cannot resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCheck;

/// Distinct non-predefined entity names referenced by `value`.
fn entity_names(value: &str) -> BTreeSet<String> {
    references(value)
        .iter()
        .filter_map(|r| r.name())
        .filter(|name| !is_predefined(name))
        .map(str::to_string)
        .collect()
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Resolve a scanner error to a `(line, column)` within the localized value.
fn error_position(localized: &Entity, err: &XmlError) -> Position {
    let (line, column) = match err.location {
        ErrorLocation::InValue(byte) => {
            localized.position(char_offset(localized.value(), byte))
        }
        ErrorLocation::AfterValue => last_line_end(localized.value()),
    };
    Position::LineCol(line, column)
}

impl Check for XmlCheck {
    fn name(&self) -> &str {
        "xml"
    }

    fn check(
        &self,
        ctx: &CheckContext<'_>,
        reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    ) {
        if let Err(err) = check_fragment(reference.value()) {
            tracing::debug!(key = reference.key(), error = %err, "Reference value is not well-formed");
            out.push(Diagnostic::warning(
                Position::LineCol(0, 0),
                "can't parse reference value",
                Category::XmlParse,
            ));
        }

        if let Err(err) = check_fragment(localized.value()) {
            out.push(Diagnostic::error(
                error_position(localized, &err),
                err.to_string(),
                Category::XmlParse,
            ));
        }

        let context = entity_names(reference.value());
        let used = entity_names(localized.value());

        let suffix = if ctx.known_entities.is_empty() {
            String::new()
        } else {
            format!(" ({} known)", join(ctx.known_entities))
        };
        for name in &used {
            if !ctx.known_entities.contains(name) && !context.contains(name) {
                out.push(Diagnostic::warning(
                    Position::LineCol(0, 0),
                    format!("Referencing unknown entity `{}`{}", name, suffix),
                    Category::XmlParse,
                ));
            }
        }

        if context.is_empty() {
            return;
        }
        for name in &used {
            if ctx.known_entities.contains(name) && !context.contains(name) {
                out.push(Diagnostic::warning(
                    Position::LineCol(0, 0),
                    format!(
                        "Entity `{}` referenced, but `{}` used in context",
                        name,
                        join(&context)
                    ),
                    Category::XmlParse,
                ));
            }
        }
    }
}
