//! Translation sync commands for posync.
//!
//! Both commands walk a source tree of PO catalogs and look every
//! translated message up by identity in a [`CatalogIndex`] built over the
//! destination tree:
//!
//! - **Copy** ([`SyncEngine`]) - overwrite the destination translation with
//!   the source one, rewriting the destination catalog immediately
//! - **Orphans** ([`OrphanDetector`]) - report translated source messages
//!   whose identity appears nowhere in the destination tree
//!
//! Each emitted record is written as one tab-separated line to the given
//! output stream as soon as it is found.
//!
//! ```rust,no_run
//! use posync_scan::{IndexBuilder, ScanConfig};
//! use posync_sync::SyncEngine;
//!
//! let index = IndexBuilder::new().build(&ScanConfig::new("dest")).unwrap();
//! let report = SyncEngine::new()
//!     .run(&ScanConfig::new("src"), &index, &mut std::io::stdout())
//!     .unwrap();
//!
//! println!("copied {} translations", report.messages_copied);
//! ```

mod engine;
mod orphans;
mod record;

pub use engine::{SyncEngine, SyncReport};
pub use orphans::{OrphanDetector, OrphanReport};
pub use record::{OrphanRecord, SyncRecord};

// Re-export core types
pub use posync_core::{CatalogIndex, ScanConfig, SyncError};
