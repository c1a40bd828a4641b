//! Translation checks for localized string resources.
//!
//! Given a reference (source-language) entity and its translation, the checks
//! report defects that would break the product: unresolved plural
//! placeholders, malformed markup, inconsistent CSS values, unescaped quotes
//! in Android strings, broken unicode escapes, and mismatched printf
//! specifiers.
//!
//! # Overview
//!
//! - [`File`] / [`FileFormat`]: what kind of resource the entities come from
//! - [`Entity`]: one key/value pair, with a position mapper for its value
//! - [`get_checks`]: select the checks for a file and compose a [`Checker`]
//! - [`Checker::check`]: run the composed checks on one entity pair
//!
//! # Example
//!
//! ```rust
//! use l10n_checks::{Category, Entity, File, Position, Severity, get_checks};
//!
//! let file = File::new("embedding/android/strings.properties", Some("embedding/android"));
//! let checker = get_checks(&file);
//!
//! let reference = Entity::new("greeting", "string with %s");
//! let localized = Entity::new("greeting", "string with %S");
//!
//! let found: Vec<_> = checker.check(&reference, &localized).collect();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].severity, Severity::Error);
//! assert_eq!(found[0].position, Position::Offset(0));
//! assert_eq!(found[0].message, "argument 1 `S` should be `s`");
//! assert_eq!(found[0].category, Category::Printf);
//! ```
//!
//! Checks are pure: a [`Checker`] can be shared across threads and invoked
//! for many pairs concurrently.

pub mod check;
pub mod checks;
pub mod config;
pub mod dispatch;
pub mod entity;
pub mod file;

pub use check::{Check, CheckContext};
pub use config::{CheckConfig, ConfigError, DEFAULT_ANDROID_MODULES};
pub use dispatch::{Checker, Diagnostics, get_checks, get_checks_with_config};
pub use entity::Entity;
pub use file::{File, FileFormat};
pub use l10n_diagnostics::{Category, Diagnostic, Position, Severity};
