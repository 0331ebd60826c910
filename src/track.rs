//! End-to-end pipeline: feed text -> records -> filtered track -> buckets

use crate::distance::accumulate_distances;
use crate::fetch::{fetch_source, FetchOptions};
use crate::filters::filter_track;
use crate::parser::parse_records;
use crate::report::DistanceSummary;
use crate::types::BucketedDistances;
use crate::Result;

/// Run an in-memory feed through normalization, filtering and accumulation
pub fn analyze_telemetry(text: &str) -> Result<BucketedDistances> {
    let records = parse_records(text)?;
    Ok(accumulate_distances(filter_track(records)))
}

/// Fetch the feed behind `url` and total the distance per autopilot state
///
/// Nothing is computed unless the fetch fully succeeds.
pub fn analyze_source(url: &str, options: &FetchOptions) -> Result<DistanceSummary> {
    let text = fetch_source(url, options)?;
    let buckets = analyze_telemetry(&text)?;
    Ok(DistanceSummary::from_buckets(&buckets))
}
