//! Check selection and composition.
//!
//! A [`Checker`] is built once per file from a fixed table keyed on the
//! file's [`FileFormat`] and module:
//!
//! | Format | Checks, in order |
//! |---|---|
//! | `Properties` | plural, printf |
//! | `EntityFile` | xml, css, and android for Android modules |
//! | `Other` | none |
//!
//! Diagnostics from an earlier check always precede those from a later one.

use crate::check::{Check, CheckContext};
use crate::checks::{AndroidCheck, CssCheck, PluralCheck, PrintfCheck, XmlCheck};
use crate::config::CheckConfig;
use crate::entity::Entity;
use crate::file::{File, FileFormat};
use l10n_diagnostics::Diagnostic;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;

/// Compose the checks for `file` using the default configuration.
pub fn get_checks(file: &File) -> Checker {
    get_checks_with_config(file, &CheckConfig::default())
}

/// Compose the checks for `file`.
pub fn get_checks_with_config(file: &File, config: &CheckConfig) -> Checker {
    let mut checks: Vec<Box<dyn Check>> = Vec::new();

    match file.format() {
        FileFormat::Properties => {
            checks.push(Box::new(PluralCheck));
            checks.push(Box::new(PrintfCheck));
        }
        FileFormat::EntityFile => {
            checks.push(Box::new(XmlCheck));
            checks.push(Box::new(CssCheck));
            if config.is_android_module(file.module()) {
                checks.push(Box::new(AndroidCheck));
            }
        }
        FileFormat::Other => {}
    }

    let checker = Checker {
        file: file.clone(),
        checks,
        known_entities: BTreeSet::new(),
    };
    tracing::debug!(
        file = %file.path(),
        checks = ?checker.check_names(),
        "Composed checker"
    );
    checker
}

/// The composed checks for one file.
///
/// Immutable once built; reuse it for every key pair of the file, from as
/// many threads as needed.
pub struct Checker {
    file: File,
    checks: Vec<Box<dyn Check>>,
    known_entities: BTreeSet<String>,
}

impl Checker {
    /// Record the entity names the reference file defines.
    ///
    /// References to these names are not reported as unknown.
    pub fn with_known_entities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_entities = names.into_iter().map(Into::into).collect();
        self
    }

    /// Run every check on one entity pair.
    ///
    /// The returned sequence is finite and already fully computed.
    pub fn check(&self, reference: &Entity, localized: &Entity) -> Diagnostics {
        let ctx = CheckContext {
            file: &self.file,
            known_entities: &self.known_entities,
        };

        let mut out = Vec::new();
        for check in &self.checks {
            tracing::trace!(check = check.name(), key = localized.key(), "Running check");
            check.check(&ctx, reference, localized, &mut out);
        }

        Diagnostics {
            inner: out.into_iter(),
        }
    }

    /// Names of the selected checks in execution order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Whether no check applies to this file.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("file", &self.file)
            .field("checks", &self.check_names())
            .field("known_entities", &self.known_entities)
            .finish()
    }
}

/// The diagnostics for one entity pair, in emission order.
#[derive(Debug)]
pub struct Diagnostics {
    inner: std::vec::IntoIter<Diagnostic>,
}

impl Iterator for Diagnostics {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Diagnostics {}

impl FusedIterator for Diagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use l10n_diagnostics::{Category, Position, Severity};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_checker_is_send_sync() {
        assert_send_sync::<Checker>();
    }

    #[test]
    fn test_properties_selection() {
        let checker = get_checks(&File::new("foo.properties", None));
        assert_eq!(checker.check_names(), vec!["plural", "printf"]);
    }

    #[test]
    fn test_dtd_selection() {
        let checker = get_checks(&File::new("browser/strings.dtd", Some("browser")));
        assert_eq!(checker.check_names(), vec!["xml", "css"]);
    }

    #[test]
    fn test_android_dtd_selection() {
        let checker = get_checks(&File::new(
            "embedding/android/strings.dtd",
            Some("embedding/android"),
        ));
        assert_eq!(checker.check_names(), vec!["xml", "css", "android"]);
    }

    #[test]
    fn test_android_properties_never_get_android_check() {
        let checker = get_checks(&File::new(
            "embedding/android/strings.properties",
            Some("embedding/android"),
        ));
        assert_eq!(checker.check_names(), vec!["plural", "printf"]);
    }

    #[test]
    fn test_other_files_get_nothing() {
        let checker = get_checks(&File::new("foo.ftl", Some("embedding/android")));
        assert!(checker.is_empty());
        let found: Vec<_> = checker
            .check(&Entity::new("a", "'"), &Entity::new("a", "&x; %"))
            .collect();
        assert!(found.is_empty());
    }

    #[test]
    fn test_configured_android_module() {
        let config = CheckConfig {
            android_modules: vec!["mobile/android".to_string()],
        };
        let file = File::new("mobile/android/strings.dtd", Some("mobile/android"));
        let checker = get_checks_with_config(&file, &config);
        assert_eq!(checker.check_names(), vec!["xml", "css", "android"]);

        let file = File::new("embedding/android/strings.dtd", Some("embedding/android"));
        let checker = get_checks_with_config(&file, &config);
        assert_eq!(checker.check_names(), vec!["xml", "css"]);
    }

    #[test]
    fn test_earlier_checks_come_first() {
        let checker = get_checks(&File::new(
            "embedding/android/strings.dtd",
            Some("embedding/android"),
        ));
        let reference = Entity::new("ftd", "0");
        let localized = Entity::new("ftd", "'&ref;");
        let found: Vec<_> = checker.check(&reference, &localized).collect();
        let categories: Vec<_> = found.iter().map(|d| d.category).collect();
        assert_eq!(
            categories,
            vec![Category::XmlParse, Category::Number, Category::Android]
        );
    }

    #[test]
    fn test_diagnostics_is_exact_size() {
        let checker = get_checks(&File::new("foo.dtd", None));
        let found = checker.check(&Entity::new("w", "10ch"), &Entity::new("w", "&a; &b;"));
        assert_eq!(found.len(), 3);
        let first = found.into_iter().next().unwrap();
        assert_eq!(first.severity, Severity::Warning);
        assert_eq!(first.position, Position::LineCol(0, 0));
    }

    #[test]
    fn test_known_entities_are_recorded() {
        let checker = get_checks(&File::new("foo.dtd", None)).with_known_entities(["brandShortName"]);
        let found: Vec<_> = checker
            .check(
                &Entity::new("a", "plain"),
                &Entity::new("a", "&brandShortName; plain"),
            )
            .collect();
        assert!(found.is_empty());
        assert!(format!("{:?}", checker).contains("brandShortName"));
    }
}
