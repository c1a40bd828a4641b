//! Well-formedness scanning for XML fragments.
//!
//! Entity values in DTD files are XML content: text with optional inline
//! markup and entity references, but no root element of their own. This crate
//! wraps a value in a synthetic root, runs it through [`quick-xml`], and
//! reports the first well-formedness problem with a location relative to the
//! value.
//!
//! # Example
//!
//! ```rust
//! use l10n_xml::{ErrorKind, ErrorLocation, check_fragment};
//!
//! assert!(check_fragment("This is <b>bold</b> &amp; fine").is_ok());
//!
//! let err = check_fragment("This is </bad> stuff").unwrap_err();
//! assert!(matches!(err.kind, ErrorKind::MismatchedTag { .. }));
//! // Byte offset of the tag name after `</`
//! assert_eq!(err.location, ErrorLocation::InValue(10));
//! ```
//!
//! Entity references are extracted separately with [`references`], which
//! works on malformed values too.
//!
//! This is not a general XML parser. DOCTYPE declarations, XML declarations,
//! and anything else outside element content are rejected.

pub mod error;
pub mod names;
pub mod references;
pub mod scanner;

pub use error::{ErrorKind, ErrorLocation, Result, XmlError};
pub use names::{is_name, is_name_char, is_name_start_char};
pub use references::{PREDEFINED_ENTITIES, Reference, is_predefined, references};
pub use scanner::check_fragment;
