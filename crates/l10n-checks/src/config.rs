//! Check configuration.

use serde::{Deserialize, Serialize};

/// Modules whose DTD strings end up in Android resources.
pub const DEFAULT_ANDROID_MODULES: [&str; 2] = ["embedding/android", "mobile/android/base"];

/// Errors that can occur while loading a [`CheckConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML could not be parsed or did not match the expected shape.
    #[error("invalid check configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A module entry was empty, which would never match a file.
    #[error("android_modules entry {index} is empty")]
    EmptyModule { index: usize },
}

/// Settings that influence which checks are selected.
///
/// # Example
///
/// ```
/// use l10n_checks::CheckConfig;
///
/// let config = CheckConfig::from_toml_str(r#"android_modules = ["mobile/android"]"#).unwrap();
/// assert!(config.is_android_module(Some("mobile/android")));
/// assert!(!config.is_android_module(Some("embedding/android")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Modules whose DTD files get the Android escaping check.
    pub android_modules: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            android_modules: DEFAULT_ANDROID_MODULES
                .iter()
                .map(|module| module.to_string())
                .collect(),
        }
    }
}

impl CheckConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML, unknown keys, or empty
    /// module entries.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.android_modules.iter().position(|m| m.trim().is_empty()) {
            Some(index) => Err(ConfigError::EmptyModule { index }),
            None => Ok(()),
        }
    }

    /// Whether files in `module` get the Android escaping check.
    pub fn is_android_module(&self, module: Option<&str>) -> bool {
        module.is_some_and(|module| self.android_modules.iter().any(|m| m == module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modules() {
        let config = CheckConfig::default();
        assert!(config.is_android_module(Some("embedding/android")));
        assert!(config.is_android_module(Some("mobile/android/base")));
        assert!(!config.is_android_module(Some("browser")));
        assert!(!config.is_android_module(None));
    }

    #[test]
    fn test_module_match_is_exact() {
        let config = CheckConfig::default();
        assert!(!config.is_android_module(Some("embedding/android/sub")));
        assert!(!config.is_android_module(Some("embedding")));
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let config = CheckConfig::from_toml_str("").unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = CheckConfig::from_toml_str("android = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_empty_module_is_rejected() {
        let err = CheckConfig::from_toml_str(r#"android_modules = ["a", " "]"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyModule { index: 1 }));
        assert_eq!(err.to_string(), "android_modules entry 1 is empty");
    }
}
