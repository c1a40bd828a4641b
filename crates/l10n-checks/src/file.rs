//! File descriptors.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The resource formats the checks know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileFormat {
    /// Java-style `key=value` files (`*.properties`)
    Properties,
    /// DTD entity files (`*.dtd`)
    EntityFile,
    /// Anything else; no checks apply
    Other,
}

impl FileFormat {
    /// Derive the format from a path's extension.
    ///
    /// # Example
    ///
    /// ```
    /// use l10n_checks::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path("browser/strings.dtd"), FileFormat::EntityFile);
    /// assert_eq!(FileFormat::from_path("foo.properties"), FileFormat::Properties);
    /// assert_eq!(FileFormat::from_path("foo.ini"), FileFormat::Other);
    /// ```
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("properties") => FileFormat::Properties,
            Some("dtd") => FileFormat::EntityFile,
            _ => FileFormat::Other,
        }
    }
}

/// A resource file, as far as check selection cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File {
    path: String,
    format: FileFormat,
    module: Option<String>,
}

impl File {
    /// Describe a file, deriving its format from the extension.
    pub fn new(path: impl Into<String>, module: Option<&str>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self::with_format(path, format, module)
    }

    /// Describe a file with an explicit format.
    pub fn with_format(path: impl Into<String>, format: FileFormat, module: Option<&str>) -> Self {
        Self {
            path: path.into(),
            format,
            module: module.map(str::to_string),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Top-level module the file belongs to, e.g. `embedding/android`.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}
