//! Core data model types for the listing crate.
//!
//! The data provider is loose about field types: years and prices show up as
//! numbers or strings, engine sizes as `1800`, `1.8` or `"2.0L"`. These types
//! resolve each shape once at deserialization time so the rest of the
//! pipeline never branches on JSON types again.
//!
//! ```text
//! VehicleRecord
//! ├── id: String               (string or number upstream)
//! ├── make / model: Option<String>
//! ├── year: Option<Scalar>     (Number | Text)
//! ├── engine_size: Option<EngineSize>
//! │   ├── Numeric(f64)         (>= 100 cc, < 100 liters)
//! │   └── Textual(String)      (already carries its unit)
//! ├── transmission / color: Option<String>
//! ├── price: Option<Scalar>
//! ├── date_added: Option<String>
//! ├── images: Vec<String>
//! └── model_code: Option<String>
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::normalize::{coerce_number, format_number};

/// A number-or-text field value, kept as the provider sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Text form of the value; numbers render without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            Scalar::Number(n) => format_number(*n),
            Scalar::Text(s) => s.clone(),
        }
    }

    /// Numeric form of the value, or `None` when it cannot be coerced.
    ///
    /// Blank text coerces to `0`, matching how the catalog has always read
    /// empty spreadsheet cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_finite() => Some(*n),
            Scalar::Number(_) => None,
            Scalar::Text(s) => coerce_number(s),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::Text(s)),
            _ => None,
        }
    }
}

/// Engine displacement, either numeric or free text with its own unit.
///
/// Numeric values follow the magnitude convention: `>= 100` is cubic
/// centimeters, anything smaller is liters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineSize {
    Numeric(f64),
    Textual(String),
}

impl EngineSize {
    /// Unit-less text used for substring matching.
    pub fn comparison_text(&self) -> String {
        match self {
            EngineSize::Numeric(n) => format_number(*n),
            EngineSize::Textual(s) => s.clone(),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(EngineSize::Numeric),
            Value::String(s) => Some(EngineSize::Textual(s)),
            _ => None,
        }
    }
}

/// A single vehicle listing as consumed by the pipeline.
///
/// Records are never mutated after parsing; filtering, sorting and
/// presentation all work on borrowed views.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Opaque identifier, only ever used to build detail links.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "de_scalar", skip_serializing_if = "Option::is_none")]
    pub year: Option<Scalar>,

    #[serde(default, deserialize_with = "de_engine", skip_serializing_if = "Option::is_none")]
    pub engine_size: Option<EngineSize>,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "de_scalar", skip_serializing_if = "Option::is_none")]
    pub price: Option<Scalar>,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,

    #[serde(default, deserialize_with = "de_images")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub model_code: Option<String>,
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n.as_f64().map(format_number),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value).unwrap_or_default())
}

fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

fn de_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Scalar>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::from_value))
}

fn de_engine<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<EngineSize>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(EngineSize::from_value))
}

fn de_images<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let images = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(images)
}
