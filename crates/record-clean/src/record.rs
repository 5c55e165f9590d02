//! Record types and field stripping.

use serde_json::{Map, Value};

/// One entity: string keys mapped to arbitrary JSON values.
///
/// Key order is preserved from the source document.
pub type Record = Map<String, Value>;

/// Ordered sequence of records, as stored in the source file.
pub type RecordCollection = Vec<Record>;

/// Remove `field` from a single record.
///
/// Returns true when the record carried the field. Remaining keys keep
/// their relative order.
pub fn strip_record(record: &mut Record, field: &str) -> bool {
    record.shift_remove(field).is_some()
}

/// Remove `field` from every record in place.
///
/// Records without the field are left untouched. Returns the number of
/// records that carried it.
pub fn strip_field(records: &mut [Record], field: &str) -> usize {
    records
        .iter_mut()
        .map(|record| strip_record(record, field))
        .filter(|removed| *removed)
        .count()
}
