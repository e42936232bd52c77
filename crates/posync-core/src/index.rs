//! Identity-to-file lookup built over a destination tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps each message identity to the destination catalog it was last seen
/// in during one traversal.
///
/// The index is a disposable lookup structure owned by a single command
/// run. When two catalogs define the same identity, the one inserted last
/// wins, so the result follows traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    entries: HashMap<String, PathBuf>,
}

impl CatalogIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `msgid` lives in `path`, replacing any earlier location.
    ///
    /// Returns the previous location when it differs from `path`.
    pub fn insert(&mut self, msgid: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        let path = path.into();
        match self.entries.insert(msgid.into(), path.clone()) {
            Some(previous) if previous != path => Some(previous),
            _ => None,
        }
    }

    /// Destination catalog holding `msgid`, if any.
    pub fn get(&self, msgid: &str) -> Option<&Path> {
        self.entries.get(msgid).map(PathBuf::as_path)
    }

    /// Whether `msgid` is defined anywhere in the destination tree.
    pub fn contains(&self, msgid: &str) -> bool {
        self.entries.contains_key(msgid)
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
