//! Error types for walking, catalog I/O and command runs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a tree walk.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walker reported a failure below the root.
    #[error("Walk error at {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors reading or writing a single catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid PO content.
    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The catalog could not be written back.
    #[error("Failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Create a parse error from any displayable format-library failure.
    pub fn parse(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Path of the catalog that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Errors that abort a whole command run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Walking a catalog tree failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Reading or writing a catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Writing a diagnostic line to the output stream failed.
    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_io() {
        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::PermissionDenied { .. }));

        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert_eq!(err.to_string(), "Path not found: /test/path");
    }

    #[test]
    fn test_sync_error_is_transparent() {
        let inner = CatalogError::parse("/locale/fr.po", "bad escape");
        let message = inner.to_string();
        let err = SyncError::from(inner);
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_catalog_error_display_names_path() {
        let err = CatalogError::parse("/locale/fr.po", "unexpected token");
        assert_eq!(err.path(), std::path::Path::new("/locale/fr.po"));
        assert!(err.to_string().contains("/locale/fr.po"));
        assert!(err.to_string().contains("unexpected token"));
    }
}
