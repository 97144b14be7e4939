//! Update Route
//!
//! - POST /_update - Rebuild the chart for the current dropdown values
//!
//! Each request carries both values and is answered on its own; nothing is
//! remembered between requests.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{UpdateRequest, UpdateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::page::update_plot;

/// POST /_update
///
/// Return the replacement document for the plot frame.
pub async fn update_chart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    tracing::info!(x = %req.x, y = %req.y, "Updating chart");

    let srcdoc = update_plot(&req.x, &req.y, state.theme())?;

    Ok(Json(UpdateResponse {
        x: req.x,
        y: req.y,
        srcdoc,
    }))
}
