//! Saved exams API endpoints
//!
//! The selection lives in the browser's `savedExams` cookie. Each request
//! loads it from the `Cookie` header and every change is answered with the
//! `Set-Cookie` header that persists (or deletes) it.

use super::AppState;
use crate::error::AppResult;
use crate::models::{ExamDraft, ExamRecord};
use crate::services::exam_validation::submit_draft;
use crate::services::selection_store::SelectionStore;
use crate::storage::CookieStore;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use axum_extra::TypedHeader;
use headers::Cookie;
use tracing::{debug, info};

type CookieHeader = Option<TypedHeader<Cookie>>;

fn selection_store(state: &AppState, cookies: CookieHeader) -> SelectionStore<CookieStore> {
    let jar = match cookies {
        Some(TypedHeader(cookie)) => CookieStore::from_pairs(cookie.iter(), state.time_provider.clone()),
        None => CookieStore::empty(state.time_provider.clone()),
    };
    SelectionStore::load_with_retention(jar, state.retention)
}

/// Attach pending `Set-Cookie` headers to `body`
fn with_cookies(store: SelectionStore<CookieStore>, status: StatusCode, body: impl IntoResponse) -> Response {
    let mut jar = store.into_storage();
    let set_cookies = jar
        .take_set_cookies()
        .into_iter()
        .map(|value| (SET_COOKIE, value));
    (status, AppendHeaders(set_cookies), body).into_response()
}

/// List saved exams
pub async fn list_saved_exams(State(state): State<AppState>, cookies: CookieHeader) -> Json<Vec<ExamRecord>> {
    debug!("GET /api/saved - Listing saved exams");

    let store = selection_store(&state, cookies);
    Json(store.exams().to_vec())
}

/// Save the exam, or unsave it if already saved
pub async fn toggle_saved_exam(
    State(state): State<AppState>,
    cookies: CookieHeader,
    Json(exam): Json<ExamRecord>,
) -> AppResult<Response> {
    debug!("POST /api/saved/toggle - {} {}", exam.course, exam.section);

    let mut store = selection_store(&state, cookies);
    let exams = store.toggle(exam)?.to_vec();
    Ok(with_cookies(store, StatusCode::OK, Json(exams)))
}

/// Unsave the exam
pub async fn remove_saved_exam(
    State(state): State<AppState>,
    cookies: CookieHeader,
    Json(exam): Json<ExamRecord>,
) -> AppResult<Response> {
    debug!("POST /api/saved/remove - {} {}", exam.course, exam.section);

    let mut store = selection_store(&state, cookies);
    let exams = store.remove(&exam)?.to_vec();
    Ok(with_cookies(store, StatusCode::OK, Json(exams)))
}

/// Validate a manually entered exam and save it
///
/// Responds 201 with the stored record, or 422 with per-field messages.
pub async fn add_manual_exam(
    State(state): State<AppState>,
    cookies: CookieHeader,
    Json(draft): Json<ExamDraft>,
) -> AppResult<Response> {
    debug!("POST /api/saved - Manual entry {:?}", draft);

    let mut store = selection_store(&state, cookies);
    let exam = submit_draft(&mut store, &state.validator, &draft)?;
    info!("Manual exam {} {} saved", exam.course, exam.section);
    Ok(with_cookies(store, StatusCode::CREATED, Json(exam)))
}

/// Create saved exam routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/saved", get(list_saved_exams).post(add_manual_exam))
        .route("/api/saved/toggle", post(toggle_saved_exam))
        .route("/api/saved/remove", post(remove_saved_exam))
}
