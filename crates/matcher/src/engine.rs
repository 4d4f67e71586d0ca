use listing::{EngineSize, Scalar, VehicleRecord, CC_THRESHOLD};

use crate::types::{EngineQuery, SearchQuery};

#[cfg(test)]
mod tests;

/// Maximum difference at which two liter-scale engine sizes are equal.
///
/// Absorbs decimal representation noise (`1.8` vs `1.80000001`); it is not a
/// unit conversion rule.
pub const LITER_TOLERANCE: f64 = 0.01;

/// Evaluate a query against a single record.
///
/// All supplied constraints must hold; absent constraints always hold.
pub fn matches(query: &SearchQuery, record: &VehicleRecord) -> bool {
    text_matches(query.make.as_deref(), record.make.as_deref())
        && text_matches(query.model.as_deref(), record.model.as_deref())
        && year_matches(query.year.as_deref(), record)
        && engine_matches(query.engine_size.as_ref(), record.engine_size.as_ref())
}

/// Case-insensitive containment. `needle` is already lower-cased.
fn text_matches(needle: Option<&str>, field: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => field
            .filter(|f| !f.is_empty())
            .is_some_and(|f| f.to_lowercase().contains(needle)),
    }
}

/// Exact text match on the year. A zero, `NaN` or blank year counts as
/// absent and never matches.
fn year_matches(year: Option<&str>, record: &VehicleRecord) -> bool {
    match year {
        None => true,
        Some(year) => record
            .year
            .as_ref()
            .filter(|y| match y {
                Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
                Scalar::Text(s) => !s.is_empty(),
            })
            .is_some_and(|y| y.as_text() == year),
    }
}

/// Engine size comparison.
///
/// Numeric record + numeric query compares by value: exact at cc scale,
/// within [`LITER_TOLERANCE`] at liter scale. Every other combination falls
/// back to a case-insensitive substring test on the record's text form.
pub fn engine_matches(query: Option<&EngineQuery>, engine: Option<&EngineSize>) -> bool {
    let Some(query) = query else {
        return true;
    };
    let Some(engine) = engine else {
        return false;
    };

    match (engine, query.numeric) {
        (EngineSize::Numeric(value), Some(wanted)) => {
            if *value >= CC_THRESHOLD {
                *value == wanted
            } else {
                (*value - wanted).abs() < LITER_TOLERANCE
            }
        }
        _ => engine
            .comparison_text()
            .to_lowercase()
            .contains(&query.text.to_lowercase()),
    }
}
