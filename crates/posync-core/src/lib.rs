//! Core types for posync.
//!
//! This crate provides the data structures shared by the scanner and the
//! sync commands: the PO catalog model, scan configuration, the
//! identity-to-file index and the error types.

mod catalog;
mod config;
mod error;
mod index;
mod normalize;

pub use catalog::{Catalog, Message};
pub use config::{DEFAULT_EXTENSION, ScanConfig, ScanConfigBuilder};
pub use error::{CatalogError, ScanError, SyncError};
pub use index::CatalogIndex;
