use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use listing::{parse_collection, Scalar};
use proptest::prelude::*;
use serde_json::json;

use crate::filter::filter_collection;
use crate::metrics::{set_match_metrics, MatchMetrics};
use crate::types::SearchForm;

fn toyota_pair() -> Vec<VehicleRecord> {
    parse_collection(
        json!([
            {"id": "t1", "make": "Toyota", "model": "Corolla", "year": 2020, "engineSize": 1800, "price": 15000},
            {"id": "t2", "make": "Toyota", "model": "Auris", "year": 2019, "engineSize": 1.8, "price": 12000}
        ])
        .to_string()
        .as_bytes(),
    )
    .expect("fixture parses")
}

fn with_engine(engine: EngineSize) -> VehicleRecord {
    VehicleRecord {
        id: "e".into(),
        engine_size: Some(engine),
        ..Default::default()
    }
}

#[test]
fn make_query_matches_case_insensitively_in_source_order() {
    let records = toyota_pair();
    let query = SearchQuery::default().with_make("toyota");
    assert_eq!(filter_collection(&records, &query), vec![0, 1]);
}

#[test]
fn cc_engine_query_selects_only_cc_record() {
    let records = toyota_pair();
    let query = SearchQuery::default().with_engine_size("1800");
    assert_eq!(filter_collection(&records, &query), vec![0]);
}

#[test]
fn liter_engine_query_selects_only_liter_record() {
    let records = toyota_pair();
    let query = SearchQuery::default().with_engine_size("1.8");
    assert_eq!(filter_collection(&records, &query), vec![1]);
}

#[test]
fn liter_scale_uses_tolerance() {
    let record = with_engine(EngineSize::Numeric(1.8));
    assert!(matches(&SearchQuery::default().with_engine_size("1.805"), &record));
    assert!(!matches(&SearchQuery::default().with_engine_size("1.82"), &record));
}

#[test]
fn cc_scale_requires_exact_equality() {
    let record = with_engine(EngineSize::Numeric(1800.0));
    assert!(matches(&SearchQuery::default().with_engine_size("1800"), &record));
    assert!(!matches(&SearchQuery::default().with_engine_size("1800.004"), &record));
    assert!(!matches(&SearchQuery::default().with_engine_size("1.8"), &record));
}

#[test]
fn textual_engine_falls_back_to_substring() {
    let record = with_engine(EngineSize::Textual("2.0L Turbo".into()));
    assert!(matches(&SearchQuery::default().with_engine_size("turbo"), &record));
    assert!(matches(&SearchQuery::default().with_engine_size("2.0"), &record));
    assert!(!matches(&SearchQuery::default().with_engine_size("1.6"), &record));
}

#[test]
fn non_numeric_query_against_numeric_engine_uses_text_form() {
    let record = with_engine(EngineSize::Numeric(1800.0));
    assert!(!matches(&SearchQuery::default().with_engine_size("180"), &record));
    assert!(!matches(&SearchQuery::default().with_engine_size("1800cc"), &record));

    let query = EngineQuery {
        text: "180".into(),
        numeric: None,
    };
    assert!(engine_matches(Some(&query), Some(&EngineSize::Numeric(1800.0))));
}

#[test]
fn missing_engine_never_matches_an_engine_query() {
    let record = VehicleRecord::default();
    assert!(!matches(&SearchQuery::default().with_engine_size("1.8"), &record));
    assert!(matches(&SearchQuery::default(), &record));
}

#[test]
fn year_is_exact_text_match() {
    let numeric = VehicleRecord {
        year: Some(Scalar::Number(2020.0)),
        ..Default::default()
    };
    let textual = VehicleRecord {
        year: Some(Scalar::Text("2020".into())),
        ..Default::default()
    };
    let query = SearchQuery::default().with_year("2020");
    assert!(matches(&query, &numeric));
    assert!(matches(&query, &textual));
    assert!(!matches(&SearchQuery::default().with_year("202"), &numeric));
    assert!(!matches(&query, &VehicleRecord::default()));
}

#[test]
fn zero_year_is_treated_as_missing() {
    let query = SearchQuery::default().with_year("0");
    for year in [Scalar::Number(0.0), Scalar::Number(f64::NAN), Scalar::Text(String::new())] {
        let record = VehicleRecord {
            year: Some(year),
            ..Default::default()
        };
        assert!(!matches(&query, &record));
    }
    let textual_zero = VehicleRecord {
        year: Some(Scalar::Text("0".into())),
        ..Default::default()
    };
    assert!(matches(&query, &textual_zero));
}

#[test]
fn constraints_combine_with_and() {
    let records = toyota_pair();
    let query = SearchQuery::default().with_make("toy").with_year("2019");
    assert_eq!(filter_collection(&records, &query), vec![1]);

    let query = SearchQuery::default().with_make("toy").with_model("corolla").with_year("2019");
    assert!(filter_collection(&records, &query).is_empty());
}

#[test]
fn missing_make_does_not_match_a_make_query() {
    let record = VehicleRecord {
        make: Some(String::new()),
        ..Default::default()
    };
    assert!(!matches(&SearchQuery::default().with_make("a"), &record));
    assert!(!matches(&SearchQuery::default().with_model("a"), &VehicleRecord::default()));
}

#[test]
fn form_submission_flows_into_filter() {
    let records = toyota_pair();
    let form = SearchForm {
        make: Some(" TOYOTA ".into()),
        model: Some("".into()),
        year: Some("2020".into()),
        enginesize: None,
    };
    let subset = filter_collection(&records, &SearchQuery::from_form(&form));
    assert_eq!(subset, vec![0]);
}

#[derive(Default)]
struct RecordingMetrics {
    calls: Mutex<Vec<(usize, usize)>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_filter(&self, _latency: Duration, scanned: usize, hits: usize) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((scanned, hits));
        }
    }
}

#[test]
fn metrics_recorder_sees_filter_runs() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(recorder.clone()));

    let records: Vec<VehicleRecord> = (0..7)
        .map(|i| VehicleRecord {
            id: format!("m{i}"),
            make: Some(if i % 2 == 0 { "Mazda" } else { "Honda" }.into()),
            ..Default::default()
        })
        .collect();
    let subset = filter_collection(&records, &SearchQuery::default().with_make("mazda"));
    set_match_metrics(None);

    assert_eq!(subset, vec![0, 2, 4, 6]);
    let calls = recorder.calls.lock().expect("metrics lock");
    assert!(calls.contains(&(7, 4)));
}

fn arb_record() -> impl Strategy<Value = VehicleRecord> {
    (
        proptest::option::of("[A-Za-z ]{0,12}"),
        proptest::option::of("[A-Za-z0-9 ]{0,12}"),
        proptest::option::of(1950u32..2030),
        proptest::option::of(prop_oneof![
            (0.5f64..9.9).prop_map(EngineSize::Numeric),
            (100u32..8000).prop_map(|cc| EngineSize::Numeric(f64::from(cc))),
            "[0-9.]{1,4}[Ll]?".prop_map(EngineSize::Textual),
        ]),
    )
        .prop_map(|(make, model, year, engine_size)| VehicleRecord {
            id: "p".into(),
            make,
            model,
            year: year.map(|y| Scalar::Number(f64::from(y))),
            engine_size,
            ..Default::default()
        })
}

proptest! {
    /// Property: an all-empty query keeps every record, in order.
    #[test]
    fn empty_query_is_identity(records in proptest::collection::vec(arb_record(), 0..20)) {
        let subset = filter_collection(&records, &SearchQuery::default());
        prop_assert_eq!(subset, (0..records.len()).collect::<Vec<_>>());
    }

    /// Property: filtering preserves relative source order.
    #[test]
    fn filter_output_is_strictly_increasing(
        records in proptest::collection::vec(arb_record(), 0..20),
        make in "[a-z]{0,2}",
    ) {
        let subset = filter_collection(&records, &SearchQuery::default().with_make(&make));
        prop_assert!(subset.windows(2).all(|w| w[0] < w[1]));
        for index in subset {
            prop_assert!(matches(&SearchQuery::default().with_make(&make), &records[index]));
        }
    }

    /// Property: a cc-scale record matches its own value and never its liter reading.
    #[test]
    fn cc_records_reject_liter_queries(cc in 1000u32..8000) {
        let record = with_engine(EngineSize::Numeric(f64::from(cc)));
        let own = SearchQuery::default().with_engine_size(&cc.to_string());
        let liters = SearchQuery::default().with_engine_size(&format!("{}", f64::from(cc) / 1000.0));
        prop_assert!(matches(&own, &record));
        prop_assert!(!matches(&liters, &record));
    }
}
