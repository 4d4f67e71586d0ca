//! # Motormart Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns the values of the catalog search form into a
//! [`SearchQuery`] and runs it across a vehicle collection. It sits directly
//! on top of the listing layer (`listing`), which has already resolved each
//! record's field shapes.
//!
//! ## Matching rules
//!
//! - `make` / `model`: case-insensitive substring containment.
//! - `year`: exact text equality (`2020` matches `"2020"`, never ranged).
//! - `enginesize`: numeric comparison when both sides are numbers (exact for
//!   cc-scale records, within [`LITER_TOLERANCE`] for liter-scale ones),
//!   otherwise a case-insensitive substring test.
//!
//! Constraints combine with logical AND, and an absent constraint matches
//! everything.
//!
//! ## Core Types
//!
//! - [`SearchForm`]: raw submitted form values.
//! - [`SearchQuery`]: trimmed, lower-cased constraints.
//! - [`EngineQuery`]: engine text plus its numeric reading.
//!
//! ## Example Usage
//!
//! ```
//! use listing::parse_collection;
//! use matcher::{filter_collection, SearchQuery};
//!
//! let records = parse_collection(br#"[
//!     {"id": "1", "make": "Toyota", "year": 2020, "engineSize": 1800, "price": 15000},
//!     {"id": "2", "make": "Toyota", "year": 2019, "engineSize": 1.8, "price": 12000}
//! ]"#).unwrap();
//!
//! let subset = filter_collection(&records, &SearchQuery::default().with_engine_size("1800"));
//! assert_eq!(subset, vec![0]);
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-filter latency and hit counts.

pub mod engine;
pub mod filter;
pub mod metrics;
pub mod types;

pub use crate::engine::{engine_matches, matches, LITER_TOLERANCE};
pub use crate::filter::filter_collection;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{EngineQuery, SearchForm, SearchQuery};
