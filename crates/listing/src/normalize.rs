//! Field normalization.
//!
//! Every field that takes part in a comparison goes through exactly one
//! function here, and each of those functions returns a definite value:
//!
//! | Field        | Function        | Fallback                     |
//! |--------------|-----------------|------------------------------|
//! | `price`      | [`price_key`]   | `0.0`                        |
//! | `year`       | [`year_key`]    | `0.0`                        |
//! | `dateAdded`  | [`date_key`]    | `DateTime::<Utc>::MIN_UTC`   |
//! | `engineSize` | [`engine_label`]| `""`                         |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::{EngineSize, VehicleRecord};

/// Numeric engine sizes at or above this value are cubic centimeters.
pub const CC_THRESHOLD: f64 = 100.0;

/// Render a number the way the catalog front-end always has: integers
/// without a fractional part, everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Coerce user or provider text into a number.
///
/// Surrounding whitespace is ignored and blank text is zero. Anything that
/// does not parse to a finite number yields `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Display label for an engine size: `1800cc`, `1.8L`, or the text as given.
pub fn engine_label(engine: Option<&EngineSize>) -> String {
    match engine {
        None => String::new(),
        Some(EngineSize::Numeric(n)) if *n >= CC_THRESHOLD => format!("{}cc", format_number(*n)),
        Some(EngineSize::Numeric(n)) => format!("{}L", format_number(*n)),
        Some(EngineSize::Textual(s)) => s.clone(),
    }
}

/// Price used for ordering; missing or non-numeric prices are zero.
pub fn price_key(record: &VehicleRecord) -> f64 {
    record
        .price
        .as_ref()
        .and_then(|p| p.as_number())
        .unwrap_or(0.0)
}

/// Model year used for ordering; missing or non-numeric years are zero.
pub fn year_key(record: &VehicleRecord) -> f64 {
    record
        .year
        .as_ref()
        .and_then(|y| y.as_number())
        .unwrap_or(0.0)
}

/// Listing timestamp used for ordering.
///
/// Records without a readable `dateAdded` get the earliest representable
/// instant so they always sort behind dated ones.
pub fn date_key(record: &VehicleRecord) -> DateTime<Utc> {
    record
        .date_added
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parse a listing timestamp.
///
/// Accepts RFC 3339, naive date-times with or without seconds (`T` or space
/// separated, read as UTC), and the date-only shapes `YYYY-MM-DD`,
/// `YYYY/MM/DD` and `YYYY-MM` (first of the month).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    const DATE_TIMES: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = DATE_TIMES
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scalar;

    #[test]
    fn engine_labels_follow_magnitude_convention() {
        assert_eq!(engine_label(Some(&EngineSize::Numeric(1800.0))), "1800cc");
        assert_eq!(engine_label(Some(&EngineSize::Numeric(100.0))), "100cc");
        assert_eq!(engine_label(Some(&EngineSize::Numeric(1.8))), "1.8L");
        assert_eq!(engine_label(Some(&EngineSize::Numeric(2.0))), "2L");
        assert_eq!(
            engine_label(Some(&EngineSize::Textual("1.6 Turbo".into()))),
            "1.6 Turbo"
        );
        assert_eq!(engine_label(None), "");
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(2020.0), "2020");
        assert_eq!(format_number(1.8), "1.8");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn coerce_number_handles_blank_and_garbage() {
        assert_eq!(coerce_number("  "), Some(0.0));
        assert_eq!(coerce_number(" 1.8 "), Some(1.8));
        assert_eq!(coerce_number("1800"), Some(1800.0));
        assert_eq!(coerce_number("1.8L"), None);
        assert_eq!(coerce_number("inf"), None);
    }

    #[test]
    fn price_and_year_default_to_zero() {
        let mut record = VehicleRecord::default();
        assert_eq!(price_key(&record), 0.0);
        assert_eq!(year_key(&record), 0.0);

        record.price = Some(Scalar::Text("POA".into()));
        record.year = Some(Scalar::Text("2018".into()));
        assert_eq!(price_key(&record), 0.0);
        assert_eq!(year_key(&record), 2018.0);
    }

    #[test]
    fn timestamps_in_common_shapes_parse() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .map(|n| n.and_utc());
        assert_eq!(parse_timestamp("2024-05-01T10:30:00Z"), expected);
        assert_eq!(parse_timestamp("2024-05-01T12:30:00+02:00"), expected);
        assert_eq!(parse_timestamp("2024-05-01T10:30:00"), expected);
        assert_eq!(parse_timestamp("2024-05-01 10:30:00"), expected);
        assert!(parse_timestamp("2024-05-01").is_some());
        assert_eq!(parse_timestamp("last tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn minute_precision_and_loose_dates_parse() {
        let at = |y, m, d, h, min| {
            NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(h, min, 0))
                .map(|n| n.and_utc())
        };
        assert_eq!(parse_timestamp("2024-03-01T10:00"), at(2024, 3, 1, 10, 0));
        assert_eq!(parse_timestamp("2024-03-01 10:00"), at(2024, 3, 1, 10, 0));
        assert_eq!(parse_timestamp("2024/03/02"), at(2024, 3, 2, 0, 0));
        assert_eq!(parse_timestamp("2024-03"), at(2024, 3, 1, 0, 0));
        assert_eq!(parse_timestamp("2024-13"), None);
    }

    #[test]
    fn missing_date_is_earliest_instant() {
        let mut record = VehicleRecord::default();
        assert_eq!(date_key(&record), DateTime::<Utc>::MIN_UTC);

        record.date_added = Some("1969-07-20".into());
        assert!(date_key(&record) > DateTime::<Utc>::MIN_UTC);
    }
}
