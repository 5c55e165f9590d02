//! Record cleaning utilities.
//!
//! This crate loads an ordered collection of JSON records, removes one named
//! field from each record, and writes the collection back out.
//!
//! # Features
//!
//! - **Loading**: Read a JSON array of objects fully into memory
//! - **Stripping**: Remove a top-level key from every record, keeping key order
//! - **Saving**: Atomic write with non-ASCII characters kept literal
//!
//! # Example
//!
//! ```no_run
//! use record_clean::{CleanConfig, clean_records};
//!
//! let config = CleanConfig::default().with_destination("out/cities.json");
//! let summary = clean_records(&config)?;
//! println!("{} of {} records cleaned", summary.removed, summary.records);
//! # Ok::<(), record_clean::CleanError>(())
//! ```

mod clean;
mod config;
mod error;
mod load;
mod record;
mod save;

// === Error Types ===
pub use error::{CleanError, ErrorKind, Result};

// === Configuration ===
pub use config::{
    CleanConfig, DEFAULT_DEST_PATH, DEFAULT_SOURCE_PATH, DEFAULT_TARGET_FIELD, OutputStyle,
};

// === Records ===
pub use record::{Record, RecordCollection, strip_field, strip_record};

// === Stages ===
pub use clean::{CleanSummary, clean_records};
pub use load::{load_records, parse_records};
pub use save::{encode_records, save_records};
