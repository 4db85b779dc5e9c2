//! Whole-document snapshot read/write.
//!
//! The snapshot format is the persisted blob itself: one pretty-printed JSON
//! value in the Document shape. Used by export/import.

use std::io::{Read, Write};

use crate::document::Document;

/// Error type for snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Writes the document as pretty JSON followed by a trailing newline.
pub fn write_snapshot<W: Write>(writer: &mut W, doc: &Document) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, doc)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads a document from a snapshot.
///
/// Unlike load-time validation in the storage layer, a malformed snapshot is
/// an error: the caller explicitly named this data and should hear about it.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}
