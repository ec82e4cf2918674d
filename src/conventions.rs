//! File-based routing conventions.
//!
//! The compiler never hard-codes the names that make a folder routable. Every
//! reserved name lives in [`Conventions`], whose default reproduces the
//! Next.js 13 `app/` directory layout:
//!
//! ```text
//! app/
//! ├── page.tsx              # "/" is routable
//! ├── blog/
//! │   └── page.tsx          # "/blog"
//! ├── (auth)/               # route group, dropped from the URL
//! │   └── login/
//! │       └── page.tsx      # "/login"
//! └── utils/
//!     └── helpers.ts        # no page anywhere below, pruned
//! ```
//!
//! A YAML file can override any subset of the fields:
//!
//! ```yaml
//! app_dir: routes
//! page_prefix: "index."
//! ```

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Names and markers of a file-based routing convention.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Directory below the migrated source that holds the route tree
    pub app_dir: String,
    /// Prefix that stands in for the routes root in logical paths
    pub logical_root: String,
    /// A folder is routable when it directly holds a file starting with this
    pub page_prefix: String,
    /// Module name, relative to the folder, that the lazy loader imports
    pub page_module: String,
    /// Opening delimiter of a route group segment
    pub group_open: char,
    /// Closing delimiter of a route group segment
    pub group_close: char,
    /// Function wrapped around the dynamic import of a page module
    pub lazy_loader: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            app_dir: "app".to_string(),
            logical_root: "./app".to_string(),
            page_prefix: "page.".to_string(),
            page_module: "page".to_string(),
            group_open: '(',
            group_close: ')',
            lazy_loader: "lazy".to_string(),
        }
    }
}

impl Conventions {
    /// Parses conventions from YAML text; missing fields keep their defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let conventions: Conventions = serde_yaml::from_str(text)?;
        conventions.validate()?;
        Ok(conventions)
    }

    /// Loads conventions from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        debug!("Loading routing conventions from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Rejects conventions the deriver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_prefix.is_empty() {
            return Err(Error::ConfigError(
                "page_prefix must not be empty".to_string(),
            ));
        }
        if self.page_module.is_empty() {
            return Err(Error::ConfigError(
                "page_module must not be empty".to_string(),
            ));
        }
        if self.app_dir.is_empty() || self.app_dir.contains(['/', '\\']) {
            return Err(Error::ConfigError(format!(
                "app_dir must be a single directory name, got '{}'",
                self.app_dir
            )));
        }
        if self.group_open == self.group_close {
            return Err(Error::ConfigError(format!(
                "group delimiters must differ, both are '{}'",
                self.group_open
            )));
        }
        Ok(())
    }

    /// Returns true if `segment` is a route group such as `(marketing)`.
    pub fn is_route_group(&self, segment: &str) -> bool {
        let mut chars = segment.chars();
        segment.chars().count() >= 2
            && chars.next() == Some(self.group_open)
            && chars.next_back() == Some(self.group_close)
    }

    /// Returns true if a file with this name marks its folder as routable.
    pub fn is_page_file(&self, name: &str) -> bool {
        name.starts_with(&self.page_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_matches_next_app_router() {
        let conventions = Conventions::default();
        assert_eq!(conventions.app_dir, "app");
        assert_eq!(conventions.logical_root, "./app");
        assert_eq!(conventions.page_prefix, "page.");
        assert!(conventions.validate().is_ok());
    }

    #[test]
    fn test_route_group_detection() {
        let conventions = Conventions::default();
        assert!(conventions.is_route_group("(marketing)"));
        assert!(conventions.is_route_group("()"));
        assert!(!conventions.is_route_group("("));
        assert!(!conventions.is_route_group("blog"));
        assert!(!conventions.is_route_group("(blog"));
        assert!(!conventions.is_route_group("[id]"));
    }

    #[test]
    fn test_page_file_detection_is_extension_agnostic() {
        let conventions = Conventions::default();
        assert!(conventions.is_page_file("page.tsx"));
        assert!(conventions.is_page_file("page.js"));
        assert!(conventions.is_page_file("page.module.css"));
        assert!(!conventions.is_page_file("page"));
        assert!(!conventions.is_page_file("mypage.tsx"));
        assert!(!conventions.is_page_file("layout.tsx"));
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let yaml = "app_dir: routes\npage_prefix: \"index.\"\n";
        let conventions = Conventions::from_yaml(yaml).unwrap();
        assert_eq!(conventions.app_dir, "routes");
        assert_eq!(conventions.page_prefix, "index.");
        // Untouched fields keep their defaults
        assert_eq!(conventions.logical_root, "./app");
        assert_eq!(conventions.group_open, '(');
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let conventions = Conventions::from_yaml("").unwrap();
        assert_eq!(conventions, Conventions::default());
    }

    #[test]
    fn test_from_yaml_rejects_invalid_values() {
        let result = Conventions::from_yaml("page_prefix: \"\"\n");
        assert!(matches!(result, Err(Error::ConfigError(_))));

        let result = Conventions::from_yaml("group_open: \"|\"\ngroup_close: \"|\"\n");
        assert!(matches!(result, Err(Error::ConfigError(_))));

        let result = Conventions::from_yaml("app_dir: src/app\n");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let result = Conventions::from_yaml("app_dir: [unclosed");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conventions.yaml");
        fs::write(&path, "logical_root: \"@/app\"\n").unwrap();

        let conventions = Conventions::from_yaml_file(&path).unwrap();
        assert_eq!(conventions.logical_root, "@/app");
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = Conventions::from_yaml_file(&temp_dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
