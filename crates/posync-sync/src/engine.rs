//! Copy translations from a source tree into the destination catalogs.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use posync_core::{Catalog, CatalogIndex, ScanConfig, SyncError};
use posync_scan::CatalogWalker;

use crate::record::SyncRecord;

/// Summary of a copy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Source catalogs parsed.
    pub catalogs_scanned: u64,
    /// Translated source messages whose identity was found in the index.
    pub messages_copied: u64,
    /// Translated source messages with no destination, skipped.
    pub messages_unmatched: u64,
    /// Destination catalog writes performed.
    pub rewrites: u64,
}

/// Copies translations into the destination catalogs named by an index.
///
/// Every match is applied as its own read-modify-write: the destination
/// catalog is parsed from disk, updated and saved before the next source
/// message is looked at. Nothing is cached between matches, so a catalog
/// hit several times in one run sees its earlier updates. A failure stops
/// the run and leaves earlier writes in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncEngine;

impl SyncEngine {
    /// Create a new sync engine.
    pub fn new() -> Self {
        Self
    }

    /// Walk the source tree and copy each translated message into the
    /// destination catalog `index` maps its identity to.
    ///
    /// A line is written to `out` for each match before the destination is
    /// rewritten. Untranslated messages and identities missing from the
    /// index are skipped silently.
    pub fn run<W: Write>(
        &self,
        source: &ScanConfig,
        index: &CatalogIndex,
        out: &mut W,
    ) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::default();

        for src_path in CatalogWalker::new(source) {
            let src_path = src_path?;
            let catalog = Catalog::load(&src_path)?;
            report.catalogs_scanned += 1;

            for message in catalog.messages().filter(|m| m.is_translated()) {
                let Some(dest_path) = index.get(&message.msgid) else {
                    report.messages_unmatched += 1;
                    continue;
                };

                let record = SyncRecord {
                    src_path: src_path.clone(),
                    dest_path: dest_path.to_path_buf(),
                    msgid: message.msgid,
                    msgstr: message.msgstr,
                };
                writeln!(out, "{record}").map_err(|source| SyncError::Output { source })?;

                report.messages_copied += 1;
                if self.apply(&record)? {
                    report.rewrites += 1;
                }
            }
        }

        info!(
            root = %source.root.display(),
            catalogs = report.catalogs_scanned,
            copied = report.messages_copied,
            unmatched = report.messages_unmatched,
            rewrites = report.rewrites,
            "copy finished"
        );
        Ok(report)
    }

    /// Re-read the destination catalog, overwrite the translation and save.
    ///
    /// Returns whether the catalog was written.
    fn apply(&self, record: &SyncRecord) -> Result<bool, SyncError> {
        let dest_path: &Path = &record.dest_path;
        let mut catalog = Catalog::load(dest_path)?;

        let updated = catalog.set_translation(&record.msgid, &record.msgstr);
        if updated == 0 {
            debug!(
                msgid = %record.msgid,
                dest = %dest_path.display(),
                "identity no longer present in destination"
            );
            return Ok(false);
        }

        catalog.save(dest_path)?;
        debug!(msgid = %record.msgid, dest = %dest_path.display(), updated, "rewrote catalog");
        Ok(true)
    }
}
