//! The trait implemented by every check.

use crate::entity::Entity;
use crate::file::File;
use l10n_diagnostics::Diagnostic;
use std::collections::BTreeSet;

/// Read-only data a check may consult besides the two entities.
///
/// Everything here is fixed when the [`Checker`](crate::Checker) is composed.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// The file the entities come from.
    pub file: &'a File,
    /// Entity names defined by the reference file.
    pub known_entities: &'a BTreeSet<String>,
}

/// A single validator over a (reference, localized) entity pair.
///
/// Implementations must be pure: the findings depend only on the context and
/// the two entities. They append to `out` in their own emission order and
/// never fail; unparseable localized content is itself a finding.
///
/// # Thread Safety
///
/// Checks must be `Send + Sync` so a composed checker can serve many worker
/// threads at once.
pub trait Check: Send + Sync {
    /// Short name for this check, used for logging.
    fn name(&self) -> &str;

    /// Validate `localized` against `reference`, appending findings to `out`.
    fn check(
        &self,
        ctx: &CheckContext<'_>,
        reference: &Entity,
        localized: &Entity,
        out: &mut Vec<Diagnostic>,
    );
}
