//! Render options.

use crate::error::CodegenError;
use serde::Deserialize;

/// Options controlling how types are rendered for one target package.
///
/// Built with the builder methods or deserialized from the surrounding generator's
/// configuration; every field is optional there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Whether the target package is a version specific package.
    pub versioned: bool,
    /// API version of the target package, when versioned.
    pub version: Option<String>,
    /// Package holding the unversioned definitions.
    pub default_package: String,
    /// Indentation of generated definitions, in tabs.
    pub indent: usize,
    /// Whether to emit `json` and `xml` struct tags.
    pub json_tags: bool,
}

impl RenderOptions {
    /// Creates options for the default package, without struct tags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets the package of API version `version`.
    #[must_use]
    pub fn for_version(
        mut self,
        version: impl Into<String>,
        default_package: impl Into<String>,
    ) -> Self {
        self.versioned = true;
        self.version = Some(version.into());
        self.default_package = default_package.into();
        self
    }

    /// Sets the default package name.
    #[must_use]
    pub fn default_package(mut self, package: impl Into<String>) -> Self {
        self.default_package = package.into();
        self
    }

    /// Sets the indentation.
    #[must_use]
    pub fn indent(mut self, tabs: usize) -> Self {
        self.indent = tabs;
        self
    }

    /// Enables or disables struct tags.
    #[must_use]
    pub fn json_tags(mut self, enabled: bool) -> Self {
        self.json_tags = enabled;
        self
    }

    /// Checks the options are consistent.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if a versioned target has no default package to
    /// qualify unversioned types with, or names an empty version.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !self.versioned {
            return Ok(());
        }
        if self.default_package.trim().is_empty() {
            return Err(CodegenError::config(
                "versioned rendering requires a default package",
            ));
        }
        if self.version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(CodegenError::config("version must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .for_version("1.0", "app")
            .indent(2)
            .json_tags(true);
        assert!(options.versioned);
        assert_eq!(options.version.as_deref(), Some("1.0"));
        assert_eq!(options.default_package, "app");
        assert_eq!(options.indent, 2);
        assert!(options.json_tags);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        let options = RenderOptions::default();
        assert!(!options.versioned);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_versioned_without_package() {
        let options = RenderOptions {
            versioned: true,
            ..RenderOptions::default()
        };
        assert!(matches!(options.validate(), Err(CodegenError::Config { .. })));

        let options = RenderOptions::new().for_version(" ", "app");
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"json_tags": true, "default_package": "app"}"#)
                .expect("deserialize");
        assert_eq!(options, RenderOptions::new().default_package("app").json_tags(true));
    }
}
