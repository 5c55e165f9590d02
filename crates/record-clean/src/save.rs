//! Saving records to the destination file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::OutputStyle;
use crate::error::{CleanError, Result};
use crate::record::Record;

/// Encode records as JSON. Non-ASCII characters are emitted literally.
pub fn encode_records(records: &[Record], style: OutputStyle) -> serde_json::Result<Vec<u8>> {
    match style {
        OutputStyle::Compact => serde_json::to_vec(records),
        OutputStyle::Pretty => serde_json::to_vec_pretty(records),
    }
}

/// Write records to `path`, creating or replacing it.
///
/// Uses atomic write (uniquely named temp file in the destination directory,
/// then rename): the destination is either the previous file or the complete
/// new one, never a partial write.
pub fn save_records(records: &[Record], path: &Path, style: OutputStyle) -> Result<()> {
    let bytes = encode_records(records, style).map_err(|source| CleanError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| CleanError::Io {
        operation: "create directory",
        path: parent.to_path_buf(),
        source: e,
    })?;

    // Dropping `temp` on any early return removes the temp file.
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| CleanError::Io {
        operation: "create temp file in",
        path: parent.to_path_buf(),
        source: e,
    })?;
    let temp_path = temp.path().to_path_buf();
    let io_error = |operation: &'static str| {
        let temp_path = temp_path.clone();
        move |e: std::io::Error| CleanError::Io {
            operation,
            path: temp_path,
            source: e,
        }
    };
    temp.write_all(&bytes).map_err(io_error("write"))?;
    temp.as_file().sync_all().map_err(io_error("sync"))?;

    temp.persist(path).map_err(|e| CleanError::AtomicWriteFailed {
        temp_path,
        target_path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "records written");
    Ok(())
}
