use std::time::Instant;

use listing::{full_subset, VehicleRecord, WorkingSubset};
use tracing::debug;

use crate::engine::matches;
use crate::metrics::metrics_recorder;
use crate::types::SearchQuery;

/// Run the filter stage over the full source collection.
///
/// Returns the indices of every matching record, in source order. An empty
/// query keeps the whole collection. The records themselves are untouched.
pub fn filter_collection(records: &[VehicleRecord], query: &SearchQuery) -> WorkingSubset {
    let start = Instant::now();

    let subset: WorkingSubset = if query.is_empty() {
        full_subset(records.len())
    } else {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(query, record))
            .map(|(index, _)| index)
            .collect()
    };

    let latency = start.elapsed();
    if let Some(recorder) = metrics_recorder() {
        recorder.record_filter(latency, records.len(), subset.len());
    }
    debug!(
        scanned = records.len(),
        hits = subset.len(),
        elapsed_micros = latency.as_micros(),
        "filter_complete"
    );

    subset
}
