use crate::page::{render_catalog_page, render_detail_page, render_notice_page};
use crate::routes::{run_commands, CatalogParams};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use motormart::Notice;
use presenter::{escape_markup, project_record, render_notice};
use serde::Deserialize;
use std::sync::Arc;

/// `GET /`: the catalog page.
pub async fn catalog_page(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<CatalogParams>,
) -> impl IntoResponse {
    let (ctx, instruction) = run_commands(&state.catalog, &params);
    let grid = ctx.render_html(&instruction);
    Html(render_catalog_page(
        &params.form(),
        ctx.active_sort(),
        ctx.controls(),
        &grid,
    ))
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// `GET /vehicle.html?id=...`: a single vehicle.
pub async fn vehicle_page(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<DetailParams>,
) -> impl IntoResponse {
    let catalog = &state.catalog;
    if catalog.is_failed() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(render_notice_page(
                "Vehicle",
                &render_notice(Notice::LoadFailed),
            )),
        );
    }

    let record = params
        .id
        .as_deref()
        .and_then(|id| catalog.source().iter().find(|record| record.id == id));

    match record {
        Some(record) => {
            let card = project_record(record, catalog.settings());
            let gallery: Vec<String> = record
                .images
                .iter()
                .filter(|src| !src.trim().is_empty())
                .map(|src| escape_markup(src))
                .collect();
            (StatusCode::OK, Html(render_detail_page(&card, &gallery)))
        }
        None => (
            StatusCode::NOT_FOUND,
            Html(render_notice_page(
                "Vehicle",
                &render_notice(Notice::NoResults),
            )),
        ),
    }
}
