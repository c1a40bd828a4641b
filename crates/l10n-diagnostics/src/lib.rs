//! Diagnostic model for localization checks.
//!
//! Every check reports its findings as [`Diagnostic`] values. A diagnostic is
//! plain data: a [`Severity`], a [`Position`], a message, and a [`Category`]
//! tag that downstream tooling uses to filter or suppress findings.
//!
//! # Example
//!
//! ```rust
//! use l10n_diagnostics::{Category, Diagnostic, Position, Severity};
//!
//! let diag = Diagnostic::warning(Position::Offset(0), "reference is a number", Category::Number);
//! assert_eq!(diag.severity, Severity::Warning);
//! assert_eq!(diag.to_string(), "warning at 0: reference is a number [number]");
//! ```

pub mod diagnostic;

pub use diagnostic::{Category, Diagnostic, ParseCategoryError, Position, Severity};
