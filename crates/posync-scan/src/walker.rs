//! Serial jwalk-based catalog walker.

use std::path::{Path, PathBuf};

use jwalk::{DirEntry, Parallelism, WalkDir};
use tracing::debug;

use posync_core::{ScanConfig, ScanError};

type Entries = Box<dyn Iterator<Item = Result<DirEntry<((), ())>, jwalk::Error>>>;

/// Lazy walk over the catalog files below a root.
///
/// Yields the path of every regular file whose name ends in the configured
/// extension. Directory entries are sorted by name and visited depth-first
/// on the calling thread. Symbolic links and other non-regular entries are
/// skipped without being opened.
///
/// The first error ends the walk: it is yielded once and every later call
/// to `next` returns `None`.
pub struct CatalogWalker {
    config: ScanConfig,
    entries: Option<Entries>,
    finished: bool,
}

impl CatalogWalker {
    /// Create a walker for the tree described by `config`.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            config: config.clone(),
            entries: None,
            finished: false,
        }
    }

    /// Root being walked.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Open the root on first use.
    fn start(&mut self) -> Result<(), ScanError> {
        let root = &self.config.root;
        std::fs::symlink_metadata(root).map_err(|e| ScanError::io(root, e))?;

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(0);

        self.entries = Some(Box::new(walker.into_iter()));
        Ok(())
    }

    fn fail(&mut self, err: ScanError) -> Option<Result<PathBuf, ScanError>> {
        self.finished = true;
        self.entries = None;
        Some(Err(err))
    }
}

impl Iterator for CatalogWalker {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.entries.is_none() {
            if let Err(err) = self.start() {
                return self.fail(err);
            }
        }

        loop {
            let mut entry = match self.entries.as_mut()?.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.config.root.clone());
                    let message = err.to_string();
                    return self.fail(ScanError::Walk { path, message });
                }
                None => {
                    self.finished = true;
                    self.entries = None;
                    return None;
                }
            };

            // jwalk yields a directory it could not list as a normal entry.
            if let Some(err) = entry.read_children_error.take() {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| entry.path());
                let message = err.to_string();
                return self.fail(ScanError::Walk { path, message });
            }

            if !entry.file_type().is_file() {
                continue;
            }
            if !self.config.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            debug!(path = %path.display(), "found catalog");
            return Some(Ok(path));
        }
    }
}

impl std::iter::FusedIterator for CatalogWalker {}
