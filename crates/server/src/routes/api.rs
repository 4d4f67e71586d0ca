use crate::error::{ServerError, ServerResult};
use crate::routes::{run_commands, CatalogParams};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use motormart::{Phase, RenderInstruction, SortKey, VehicleRecord};
use serde::Serialize;
use std::sync::Arc;

/// Listing response for `GET /api/v1/vehicles`.
///
/// Records are returned as loaded, in display order. Unlike the HTML page an
/// empty result is just an empty list.
#[derive(Debug, Serialize)]
pub struct VehicleListResponse<'a> {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    pub vehicles: Vec<&'a VehicleRecord>,
}

/// `GET /api/v1/vehicles`
pub async fn list_vehicles(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<CatalogParams>,
) -> ServerResult<impl IntoResponse> {
    let (ctx, instruction) = run_commands(&state.catalog, &params);

    let indices = match instruction {
        RenderInstruction::Listing(indices) => indices,
        RenderInstruction::LoadFailed => {
            let reason = match ctx.phase() {
                Phase::Failed { reason } => reason.clone(),
                Phase::Unset | Phase::Ready { .. } => "catalog not loaded".to_string(),
            };
            return Err(ServerError::LoadFailed(reason));
        }
    };

    let source = ctx.source();
    let vehicles: Vec<&VehicleRecord> = indices.iter().filter_map(|&i| source.get(i)).collect();
    let body = serde_json::to_value(VehicleListResponse {
        count: vehicles.len(),
        sort: ctx.active_sort(),
        vehicles,
    })
    .map_err(|err| ServerError::Internal(err.to_string()))?;

    Ok(Json(body))
}
