//! Campus resources API endpoint

use super::AppState;
use crate::services::resource_directory::ResourceListing;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct ResourceSearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub show_all: bool,
}

/// Search resource links, grouped by category
pub async fn search_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceSearchParams>,
) -> Json<ResourceListing> {
    debug!("GET /api/resources - q={:?} show_all={}", params.q, params.show_all);
    Json(state.resources.search(&params.q, params.show_all))
}

pub fn create_router() -> Router<AppState> {
    Router::new().route("/api/resources", get(search_resources))
}
