//! Advisor proxy endpoints
//!
//! Forwards chat calls to the remote advisor so the frontend only talks to
//! this origin. Remote failures surface as 502.

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::services::advisor_client::AdvisorReply;
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatProxyRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Start a new advisor session
pub async fn create_session(State(state): State<AppState>) -> AppResult<Json<Value>> {
    debug!("POST /api/advisor/sessions - Creating session");

    let session_id = state.advisor.create_session().await?;
    info!("Advisor session {} created", session_id);
    Ok(Json(json!({ "sessionId": session_id })))
}

/// Load a session transcript
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Value>> {
    debug!("GET /api/advisor/sessions/{} - Loading transcript", session_id);

    let messages = state.advisor.fetch_session(&session_id).await?;
    Ok(Json(json!({ "messages": messages })))
}

/// Send a message and return the advisor's reply
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatProxyRequest>,
) -> AppResult<Json<AdvisorReply>> {
    debug!("POST /api/advisor/chat - session={:?}", request.session_id);

    if request.message.trim().is_empty() {
        return Err(AppError::bad_request("Missing message"));
    }

    let reply = state
        .advisor
        .send_message(request.session_id.as_deref(), &request.message)
        .await?;
    Ok(Json(reply))
}

/// Clear the remote chat history
pub async fn clear_history(State(state): State<AppState>) -> AppResult<Json<Value>> {
    debug!("POST /api/advisor/clear-history");

    state.advisor.clear_history().await?;
    Ok(Json(json!({ "message": "Chat history cleared" })))
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/advisor/sessions", post(create_session))
        .route("/api/advisor/sessions/:id", get(get_session))
        .route("/api/advisor/chat", post(chat))
        .route("/api/advisor/clear-history", post(clear_history))
}
