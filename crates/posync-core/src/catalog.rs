//! PO catalog model backed by `polib`.
//!
//! A [`Catalog`] is the ordered list of messages of one `.po` file. Reads
//! hand out owned [`Message`] snapshots in file order; writes go through
//! [`Catalog::set_translation`] so everything else the format library keeps
//! (header, comments, flags, ordering) survives a rewrite.
//!
//! Files are normalized before parsing: a missing header is synthesized and
//! a partial one is completed, and malformed lines become a
//! [`CatalogError::Parse`] instead of reaching the format library.

use std::fs;
use std::io::Write;
use std::path::Path;

use polib::catalog::Catalog as PoCatalog;
use polib::message::{MessageMutView, MessageView};
use polib::po_file;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::normalize::normalize;

/// A single translatable message: its identity and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identity key of the message.
    pub msgid: String,
    /// Translated text; empty means untranslated.
    pub msgstr: String,
}

impl Message {
    /// Create a new message.
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgstr: msgstr.into(),
        }
    }

    /// Whether the message carries a translation.
    ///
    /// Only a zero-length translation counts as untranslated; whitespace is
    /// a translation.
    pub fn is_translated(&self) -> bool {
        !self.msgstr.is_empty()
    }
}

/// An ordered gettext catalog loaded from one file.
pub struct Catalog {
    inner: PoCatalog,
}

impl Catalog {
    /// Parse the catalog stored at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let read_err = |source: std::io::Error| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        };

        let bytes = fs::read(path).map_err(read_err)?;
        let text = String::from_utf8(bytes).map_err(|e| CatalogError::parse(path, e))?;
        let canonical = normalize(&text).map_err(|e| CatalogError::parse(path, e))?;

        // polib only parses from a path, so the canonical text is staged.
        let mut staged = tempfile::Builder::new()
            .prefix("posync-")
            .suffix(".po")
            .tempfile()
            .map_err(read_err)?;
        staged.write_all(canonical.as_bytes()).map_err(read_err)?;
        staged.flush().map_err(read_err)?;

        let inner = po_file::parse(staged.path()).map_err(|e| CatalogError::parse(path, e))?;
        Ok(Self { inner })
    }

    /// Serialize the whole catalog to `path`, replacing its contents.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        po_file::write(&self.inner, path).map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Messages in file order.
    ///
    /// Plural messages report an empty `msgstr`, so they never count as
    /// translated. Entries with an empty identity are header-like and are
    /// skipped.
    pub fn messages(&self) -> impl Iterator<Item = Message> + '_ {
        self.inner
            .messages()
            .filter(|message| !message.msgid().is_empty())
            .map(|message| Message {
                msgid: message.msgid().to_string(),
                msgstr: message.msgstr().unwrap_or_default().to_string(),
            })
    }

    /// Number of messages, excluding the header entry.
    pub fn len(&self) -> usize {
        self.messages().count()
    }

    /// Whether the catalog holds no messages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite the translation of every singular message whose identity is
    /// `msgid`. Returns how many messages were updated.
    pub fn set_translation(&mut self, msgid: &str, msgstr: &str) -> usize {
        let mut updated = 0;
        for mut message in self.inner.messages_mut() {
            if message.msgid() != msgid || !message.is_singular() {
                continue;
            }
            if message.set_msgstr(msgstr.to_string()).is_ok() {
                updated += 1;
            }
        }
        updated
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.messages()).finish()
    }
}
