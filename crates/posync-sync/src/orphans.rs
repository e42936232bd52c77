//! Report translated source messages unknown to the destination tree.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use posync_core::{Catalog, CatalogIndex, ScanConfig, SyncError};
use posync_scan::CatalogWalker;

use crate::record::OrphanRecord;

/// Orphans found in one run, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrphanReport {
    /// Source catalogs parsed.
    pub catalogs_scanned: u64,
    /// Translated messages missing from the destination index.
    pub orphans: Vec<OrphanRecord>,
}

impl OrphanReport {
    /// Check if any orphans were found.
    pub fn has_orphans(&self) -> bool {
        !self.orphans.is_empty()
    }
}

/// Read-only pass finding translations with nowhere to go.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrphanDetector;

impl OrphanDetector {
    /// Create a new orphan detector.
    pub fn new() -> Self {
        Self
    }

    /// Walk the source tree and report every translated message whose
    /// identity is absent from `index`. Each orphan is written to `out` as
    /// it is found. No catalog is modified.
    pub fn run<W: Write>(
        &self,
        source: &ScanConfig,
        index: &CatalogIndex,
        out: &mut W,
    ) -> Result<OrphanReport, SyncError> {
        let mut report = OrphanReport::default();

        for src_path in CatalogWalker::new(source) {
            let src_path = src_path?;
            let catalog = Catalog::load(&src_path)?;
            report.catalogs_scanned += 1;

            for message in catalog.messages() {
                if !message.is_translated() || index.contains(&message.msgid) {
                    continue;
                }
                let record = OrphanRecord {
                    src_path: src_path.clone(),
                    msgid: message.msgid,
                    msgstr: message.msgstr,
                };
                writeln!(out, "{record}").map_err(|source| SyncError::Output { source })?;
                report.orphans.push(record);
            }
        }

        info!(
            root = %source.root.display(),
            catalogs = report.catalogs_scanned,
            orphans = report.orphans.len(),
            "orphan scan finished"
        );
        Ok(report)
    }
}
