//! Motormart listing layer.
//!
//! This is where vehicle data enters the catalog pipeline. We take the raw
//! JSON document served by the data provider, check its top-level shape, and
//! turn every entry into a [`VehicleRecord`] whose loosely-typed fields have
//! been resolved once, up front.
//!
//! ## What we do here
//!
//! - **Parse collections** - [`parse_collection`] accepts a JSON array and
//!   rejects anything else with a typed [`CollectionError`].
//! - **Resolve field shapes** - engine size becomes an [`EngineSize`] variant,
//!   year and price become a [`Scalar`], text fields accept numbers too.
//! - **Normalize for comparison** - [`price_key`], [`year_key`] and
//!   [`date_key`] give every record a definite sort value, and
//!   [`engine_label`] gives the display label used by the presenter.
//!
//! ## Coercion policy
//!
//! Nothing here rejects a record for carrying odd values. A price that is not
//! a number sorts as zero, a missing or unreadable date sorts as the earliest
//! possible instant, and an absent engine size simply never matches an engine
//! query. None of these fallbacks are logged.
//!
//! ## Example
//!
//! ```
//! use listing::{engine_label, parse_collection, price_key};
//!
//! let records = parse_collection(br#"[
//!     {"id": 7, "make": "Toyota", "model": "Corolla", "engineSize": 1800, "price": "15000"}
//! ]"#).unwrap();
//!
//! assert_eq!(records[0].id, "7");
//! assert_eq!(engine_label(records[0].engine_size.as_ref()), "1800cc");
//! assert_eq!(price_key(&records[0]), 15000.0);
//! ```

mod collection;
mod error;
mod normalize;
mod types;

pub use crate::collection::parse_collection;
pub use crate::error::{CollectionError, LoadError};
pub use crate::normalize::{
    coerce_number, date_key, engine_label, format_number, parse_timestamp, price_key, year_key,
    CC_THRESHOLD,
};
pub use crate::types::{EngineSize, Scalar, VehicleRecord};

/// Ordered indices into a source collection.
///
/// Filtering and sorting never copy or reorder records; they produce a new
/// `WorkingSubset` that refers back into the source slice.
pub type WorkingSubset = Vec<usize>;

/// The identity subset: every index of a collection of `len` records, in order.
pub fn full_subset(len: usize) -> WorkingSubset {
    (0..len).collect()
}
