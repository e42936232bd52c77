//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Extension of gettext translation catalogs.
pub const DEFAULT_EXTENSION: &str = ".po";

/// Configuration for walking a catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to walk.
    pub root: PathBuf,

    /// File name suffix identifying a catalog, including the leading dot.
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            Some(_) => {}
        }
        if let Some(ref extension) = self.extension {
            if extension.len() < 2 || !extension.starts_with('.') {
                return Err(format!("Invalid catalog extension: {extension:?}"));
            }
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config walking `root` for `.po` catalogs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: default_extension(),
        }
    }

    /// Check whether a file name carries the catalog extension.
    ///
    /// The comparison is an exact, case-sensitive suffix match: `fr.PO`
    /// is not a catalog.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
