//! Page Route
//!
//! - GET / - Dashboard page with the default chart

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::page::{initial_plot, render_page};

/// GET /
///
/// Render the page shell with the default chart loaded into the frame.
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let srcdoc = initial_plot(state.theme())?;
    Ok(Html(render_page(&srcdoc)))
}
