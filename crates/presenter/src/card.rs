use listing::{engine_label, price_key, VehicleRecord};
use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::escape::escape_markup;
use crate::settings::PresenterSettings;

/// Image reference for a card, with its one-shot fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Primary image: the record's first image, or the placeholder.
    pub src: String,
    /// Substituted once if `src` fails to load.
    pub fallback: String,
}

/// Display-safe projection of one record. Every string is already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCard {
    pub image: ImageRef,
    /// Image alt text: `make model`.
    pub alt: String,
    /// Currency-formatted price.
    pub price: String,
    /// Card heading: `make model`.
    pub heading: String,
    /// `year — engine — transmission — color`.
    pub summary: String,
    pub model_code: String,
    pub engine: String,
    /// Link to the detail page, id URL-encoded.
    pub detail_href: String,
}

/// Fixed messages shown in place of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    NoResults,
    LoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoResults => "No vehicles found.",
            Notice::LoadFailed => "Failed to load vehicle data.",
        }
    }
}

/// One entry of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    Card(VehicleCard),
    Notice(Notice),
}

/// Project every record of `subset`, in order.
///
/// An empty subset yields exactly one [`Notice::NoResults`].
pub fn present(
    records: &[VehicleRecord],
    subset: &[usize],
    settings: &PresenterSettings,
) -> Vec<Projection> {
    if subset.is_empty() {
        return vec![Projection::Notice(Notice::NoResults)];
    }
    subset
        .iter()
        .filter_map(|&index| records.get(index))
        .map(|record| Projection::Card(project_record(record, settings)))
        .collect()
}

/// Build the display-safe projection of a single record.
pub fn project_record(record: &VehicleRecord, settings: &PresenterSettings) -> VehicleCard {
    let make = record.make.as_deref().unwrap_or_default();
    let model = record.model.as_deref().unwrap_or_default();
    let engine = engine_label(record.engine_size.as_ref());
    let year = record.year.as_ref().map(|y| y.as_text()).unwrap_or_default();

    let src = record
        .images
        .first()
        .filter(|image| !image.trim().is_empty())
        .map(String::as_str)
        .unwrap_or(settings.placeholder_image.as_str());

    let summary = [
        year.as_str(),
        engine.as_str(),
        record.transmission.as_deref().unwrap_or_default(),
        record.color.as_deref().unwrap_or_default(),
    ]
    .iter()
    .map(|part| escape_markup(part))
    .collect::<Vec<_>>()
    .join(" — ");

    let href = format!(
        "{}?id={}",
        settings.detail_page,
        urlencoding::encode(&record.id)
    );

    VehicleCard {
        image: ImageRef {
            src: escape_markup(src),
            fallback: escape_markup(&settings.placeholder_image),
        },
        alt: escape_markup(&format!("{make} {model}")),
        price: escape_markup(&format_currency(price_key(record), &settings.currency_symbol)),
        heading: format!("{} {}", escape_markup(make), escape_markup(model)),
        summary,
        model_code: escape_markup(record.model_code.as_deref().unwrap_or_default()),
        engine: escape_markup(&engine),
        detail_href: escape_markup(&href),
    }
}
