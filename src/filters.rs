//! Track filtering
//!
//! Puts records in chronological order and drops the geo fixes the feed emits while
//! it has no GPS lock. The feed normally arrives time-ordered already, so the sort is
//! a safety net rather than the primary ordering.
//!
//! The sentinel check is decimal-exact: only a fix at exactly (0, 0) is dropped.
//! Autopilot toggles are always kept.

use crate::types::Record;

/// Sort records by timestamp and drop sentinel fixes
///
/// The sort is stable, so records sharing a timestamp keep their stream order.
/// The result is a single-pass iterator meant to be consumed once by the accumulator.
pub fn filter_track(mut records: Vec<Record>) -> impl Iterator<Item = Record> {
    if !is_chronological(&records) {
        tracing::warn!("feed is not in timestamp order, re-sorting {} records", records.len());
    }
    records.sort_by_key(Record::timestamp);

    let sentinels = records.iter().filter(|r| !keep_record(r)).count();
    tracing::debug!(
        "dropping {} sentinel fixes out of {} records",
        sentinels,
        records.len()
    );

    records.into_iter().filter(keep_record)
}

/// Whether a record survives filtering: any toggle, or a fix that is not the sentinel
pub fn keep_record(record: &Record) -> bool {
    match record {
        Record::AutopilotToggle(_) => true,
        Record::GeoFix(fix) => !fix.point.is_sentinel(),
    }
}

/// True when timestamps never decrease along the slice
pub fn is_chronological(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].timestamp() <= pair[1].timestamp())
}
