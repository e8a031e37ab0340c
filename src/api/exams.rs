//! Exam search API endpoints
//!
//! Course search over the loaded schedule with incremental "show more".

use super::AppState;
use crate::services::exam_filter::{ExamBrowser, ExamPage};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

/// Query parameters for `GET /api/exams`
#[derive(Debug, Default, Deserialize)]
pub struct ExamSearchParams {
    /// Case-insensitive course substring; empty matches everything
    #[serde(default)]
    pub course: String,

    /// Number of chunks revealed so far (defaults to one)
    pub chunks: Option<usize>,
}

/// Search exams by course
///
/// Returns the visible prefix of the matching rows together with the
/// pagination state needed to render a "show more" control.
pub async fn search_exams(
    State(state): State<AppState>,
    Query(params): Query<ExamSearchParams>,
) -> Json<ExamPage> {
    debug!(
        "GET /api/exams - course={:?} chunks={:?}",
        params.course, params.chunks
    );

    let mut browser = ExamBrowser::with_query(state.dataset.rows(), state.chunk_size, &params.course);
    if let Some(chunks) = params.chunks {
        browser.show_chunks(chunks);
    }

    let page = browser.page();
    debug!(
        "Exam search matched {} rows, showing {}",
        page.total_matches, page.visible
    );
    Json(page)
}

/// Create exam search routes
pub fn create_router() -> Router<AppState> {
    Router::new().route("/api/exams", get(search_exams))
}
