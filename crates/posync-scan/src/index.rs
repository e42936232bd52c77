//! Destination index construction.

use posync_core::{Catalog, CatalogIndex, ScanConfig, SyncError};
use tracing::{debug, info};

use crate::walker::CatalogWalker;

/// Builds a [`CatalogIndex`] from every catalog under a destination tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexBuilder;

impl IndexBuilder {
    /// Create a new index builder.
    pub fn new() -> Self {
        Self
    }

    /// Walk `config.root`, parse each catalog and record where every
    /// message identity lives.
    ///
    /// Catalogs visited later overwrite earlier entries for the same
    /// identity. Any walk or parse failure aborts the build; no partial
    /// index is returned.
    pub fn build(&self, config: &ScanConfig) -> Result<CatalogIndex, SyncError> {
        let mut index = CatalogIndex::new();
        let mut catalogs = 0usize;

        for path in CatalogWalker::new(config) {
            let path = path?;
            let catalog = Catalog::load(&path)?;
            catalogs += 1;

            for message in catalog.messages() {
                if let Some(previous) = index.insert(message.msgid.as_str(), path.as_path()) {
                    debug!(
                        msgid = %message.msgid,
                        previous = %previous.display(),
                        current = %path.display(),
                        "identity defined in several catalogs, keeping the later one"
                    );
                }
            }
        }

        info!(
            root = %config.root.display(),
            catalogs,
            identities = index.len(),
            "built destination index"
        );
        Ok(index)
    }
}
