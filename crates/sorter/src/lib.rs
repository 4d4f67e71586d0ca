//! Motormart sorter.
//!
//! Orders a working subset by one of a fixed set of keys. Each key has its
//! own direction and missing-value policy, all routed through the listing
//! layer's per-field normalizers:
//!
//! | Key     | Direction   | Missing / invalid value        |
//! |---------|-------------|--------------------------------|
//! | `price` | ascending   | `0`                            |
//! | `date`  | descending  | earliest instant (sinks last)  |
//! | `year`  | descending  | `0`                            |
//!
//! Sorting is stable, so ties keep their input order, and it never touches
//! the input: a new [`WorkingSubset`] is returned.

use std::cmp::Ordering;
use std::time::Instant;

use listing::{date_key, full_subset, price_key, year_key, VehicleRecord, WorkingSubset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The sort keys offered by the catalog's sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Date,
    Year,
}

impl SortKey {
    /// Parse a selector value.
    ///
    /// Empty and unrecognized values yield `None`, which callers treat as
    /// "leave the order alone" rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "price" => Some(SortKey::Price),
            "date" => Some(SortKey::Date),
            "year" => Some(SortKey::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Date => "date",
            SortKey::Year => "year",
        }
    }

    /// Every key, in selector order.
    pub fn all() -> [SortKey; 3] {
        [SortKey::Price, SortKey::Date, SortKey::Year]
    }
}

/// Pick what a sort acts on: the working subset when it has entries,
/// otherwise the whole collection.
pub fn sort_input(records: &[VehicleRecord], subset: &[usize]) -> WorkingSubset {
    if subset.is_empty() {
        full_subset(records.len())
    } else {
        subset.to_vec()
    }
}

/// Order `subset` by `key`, returning a new subset.
///
/// `None` is a pass-through and returns the input order unchanged.
pub fn sort_subset(
    records: &[VehicleRecord],
    subset: &[usize],
    key: Option<SortKey>,
) -> WorkingSubset {
    let Some(key) = key else {
        return subset.to_vec();
    };
    let start = Instant::now();

    let mut ordered = subset.to_vec();
    match key {
        SortKey::Price => {
            let mut keyed: Vec<(usize, f64)> =
                ordered.iter().map(|&i| (i, price_key(&records[i]))).collect();
            keyed.sort_by(|a, b| compare_f64(a.1, b.1));
            ordered = keyed.into_iter().map(|(i, _)| i).collect();
        }
        SortKey::Year => {
            let mut keyed: Vec<(usize, f64)> =
                ordered.iter().map(|&i| (i, year_key(&records[i]))).collect();
            keyed.sort_by(|a, b| compare_f64(b.1, a.1));
            ordered = keyed.into_iter().map(|(i, _)| i).collect();
        }
        SortKey::Date => {
            ordered.sort_by_cached_key(|&i| std::cmp::Reverse(date_key(&records[i])));
        }
    }

    debug!(
        key = key.as_str(),
        size = ordered.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "sort_complete"
    );
    ordered
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
