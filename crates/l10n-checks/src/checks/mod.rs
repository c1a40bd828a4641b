//! The individual checks.
//!
//! Each check is a unit struct implementing [`Check`](crate::Check). They are
//! selected and ordered by [`get_checks`](crate::get_checks).

mod android;
mod css;
mod plural;
mod printf;
mod xml;

pub use android::AndroidCheck;
pub use css::{CssCheck, CssShape, Declaration, Length};
pub use plural::PluralCheck;
pub use printf::{PrintfCheck, PrintfError, parse_printf};
pub use xml::XmlCheck;
