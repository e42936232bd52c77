//! Catalog tree walking for posync.
//!
//! # Overview
//!
//! - [`CatalogWalker`] lazily yields the regular `.po` files below a root,
//!   in lexical depth-first order, and stops at the first I/O error.
//! - [`IndexBuilder`] walks a destination tree and flattens every message
//!   identity into a [`CatalogIndex`].
//!
//! # Example
//!
//! ```rust,no_run
//! use posync_scan::{CatalogWalker, IndexBuilder, ScanConfig};
//!
//! let index = IndexBuilder::new().build(&ScanConfig::new("locale/dest")).unwrap();
//!
//! for path in CatalogWalker::new(&ScanConfig::new("locale/src")) {
//!     let path = path.unwrap();
//!     println!("{} ({} identities indexed)", path.display(), index.len());
//! }
//! ```

mod index;
mod walker;

pub use index::IndexBuilder;
pub use walker::CatalogWalker;

// Re-export core types for convenience
pub use posync_core::{CatalogIndex, ScanConfig, ScanError, SyncError};
