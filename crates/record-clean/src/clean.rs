//! One-shot load → strip → save run.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, info_span};

use crate::config::CleanConfig;
use crate::error::Result;
use crate::load::load_records;
use crate::record::strip_field;
use crate::save::save_records;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target_field: String,
    /// Records read and written.
    pub records: usize,
    /// Records that carried the target field.
    pub removed: usize,
}

/// Load the source collection, strip the target field from every record,
/// and write the result to the destination.
///
/// Nothing is written when loading fails.
pub fn clean_records(config: &CleanConfig) -> Result<CleanSummary> {
    let clean_span = info_span!(
        "clean",
        source = %config.source_path.display(),
        destination = %config.dest_path.display(),
        target_field = %config.target_field
    );
    let _clean_guard = clean_span.enter();

    let load_start = Instant::now();
    let mut records = info_span!("load").in_scope(|| load_records(&config.source_path))?;
    info!(
        record_count = records.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let removed = info_span!("strip").in_scope(|| strip_field(&mut records, &config.target_field));
    info!(record_count = records.len(), removed, "strip complete");

    let save_start = Instant::now();
    info_span!("save")
        .in_scope(|| save_records(&records, &config.dest_path, config.output_style))?;
    info!(
        record_count = records.len(),
        duration_ms = save_start.elapsed().as_millis(),
        "save complete"
    );

    Ok(CleanSummary {
        source: config.source_path.clone(),
        destination: config.dest_path.clone(),
        target_field: config.target_field.clone(),
        records: records.len(),
        removed,
    })
}
