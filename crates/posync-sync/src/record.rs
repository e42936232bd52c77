//! Diagnostic records emitted by the sync commands.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A translated source message matched to a destination catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncRecord {
    /// Source catalog the translation was read from.
    pub src_path: PathBuf,
    /// Destination catalog the translation is copied into.
    pub dest_path: PathBuf,
    /// Message identity.
    pub msgid: String,
    /// Translation being copied.
    pub msgstr: String,
}

impl fmt::Display for SyncRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "srcPath:{}\tdestPath:{}\tmsgId:{}\tmsgStr:{}",
            self.src_path.display(),
            self.dest_path.display(),
            self.msgid,
            self.msgstr
        )
    }
}

/// A translated source message with no identity match in the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanRecord {
    /// Source catalog holding the message.
    pub src_path: PathBuf,
    /// Message identity.
    pub msgid: String,
    /// Translation that has nowhere to go.
    pub msgstr: String,
}

impl fmt::Display for OrphanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "srcPath:{}\tmsgId:{}\tmsgStr:{}",
            self.src_path.display(),
            self.msgid,
            self.msgstr
        )
    }
}
