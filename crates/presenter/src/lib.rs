//! Motormart presenter.
//!
//! Maps records to display-safe projections and renders them as card markup.
//! Record content is untrusted: every text value that ends up in markup is
//! escaped against `&`, `<`, `>`, `"` and `'` first, and the source record is
//! never modified.
//!
//! An empty result never renders as an empty grid. [`present`] returns a
//! single [`Notice::NoResults`] projection instead, and a failed load is
//! represented by [`Notice::LoadFailed`].
//!
//! ```
//! use listing::parse_collection;
//! use presenter::{present, Notice, PresenterSettings, Projection};
//!
//! let settings = PresenterSettings::default();
//! assert_eq!(present(&[], &[], &settings), vec![Projection::Notice(Notice::NoResults)]);
//!
//! let records = parse_collection(br#"[{"id": "a b", "make": "<Kia>", "price": 9500}]"#).unwrap();
//! let cards = present(&records, &[0], &settings);
//! let Projection::Card(card) = &cards[0] else { unreachable!() };
//! assert_eq!(card.heading, "&lt;Kia&gt; ");
//! assert_eq!(card.price, "$9,500");
//! assert_eq!(card.detail_href, "vehicle.html?id=a%20b");
//! ```

mod card;
mod currency;
mod escape;
mod render;
mod settings;

pub use crate::card::{present, project_record, ImageRef, Notice, Projection, VehicleCard};
pub use crate::currency::format_currency;
pub use crate::escape::escape_markup;
pub use crate::render::{render_card, render_grid, render_notice};
pub use crate::settings::{PresenterSettings, SettingsError};
