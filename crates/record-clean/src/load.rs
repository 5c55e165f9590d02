//! Loading records from the source file.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use crate::error::{CleanError, Result};
use crate::record::RecordCollection;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read and parse the full record collection from `path`.
///
/// The file must hold a single JSON array whose elements are all objects.
/// A leading UTF-8 byte-order mark is skipped.
pub fn load_records(path: &Path) -> Result<RecordCollection> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == IoErrorKind::NotFound {
            CleanError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CleanError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_records(&bytes).map_err(|source| CleanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a record collection from raw bytes.
pub fn parse_records(bytes: &[u8]) -> serde_json::Result<RecordCollection> {
    let payload = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(payload)
}
