//! Route handlers
//!
//! - `catalog`: the HTML catalog and detail pages
//! - `api`: JSON listing endpoint
//! - `health`: liveness, readiness and metrics

pub mod api;
pub mod catalog;
pub mod health;

use crate::error::ServerError;
use matcher::{SearchForm, SearchQuery};
use motormart::{CatalogContext, RenderInstruction, SortKey};
use serde::Deserialize;

/// Query parameters shared by the HTML and JSON listings.
///
/// Any of the four search fields being present, even blank, counts as a
/// search submit. A present `sort` counts as a sort change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub enginesize: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl CatalogParams {
    pub fn form(&self) -> SearchForm {
        SearchForm {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.clone(),
            enginesize: self.enginesize.clone(),
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort.as_deref().and_then(SortKey::parse)
    }
}

/// Replay a request's commands on a fresh copy of the loaded catalog.
///
/// Search runs before sort, so a request carrying both shows the filtered
/// subset in sorted order.
pub(crate) fn run_commands(
    catalog: &CatalogContext,
    params: &CatalogParams,
) -> (CatalogContext, RenderInstruction) {
    let mut ctx = catalog.clone();
    let mut instruction = ctx.current();

    let form = params.form();
    if form.is_submitted() {
        (ctx, instruction) = ctx.on_search_submit(&SearchQuery::from_form(&form));
    }
    if params.sort.is_some() {
        (ctx, instruction) = ctx.on_sort_change(params.sort_key());
    }
    (ctx, instruction)
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
