//! Shared fixtures for integration tests

use axum::{
    body::Body,
    extract::Path,
    http::{header, Request, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use exam_planner::api::{self, AppState};
use exam_planner::services::{
    AdvisorClient, DraftValidator, ExamDataset, MockTimeProvider, ResourceDirectory,
    ValidationMode,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const SCHEDULE: &str = include_str!("../../data/final_schedule.json");

/// Nothing listens on the discard port, so advisor calls fail fast
pub const UNREACHABLE_ADVISOR: &str = "http://127.0.0.1:9/";

/// 2024-12-01 08:30:00 UTC
pub fn clock() -> MockTimeProvider {
    MockTimeProvider::new_from_ymd_hms(2024, 12, 1, 8, 30, 0).unwrap()
}

pub fn test_state(advisor_url: &str) -> AppState {
    AppState {
        dataset: Arc::new(ExamDataset::from_json_str(SCHEDULE).unwrap()),
        validator: Arc::new(DraftValidator::new(ValidationMode::Strict).unwrap()),
        resources: ResourceDirectory::default(),
        chunk_size: 8,
        retention: chrono::Duration::days(30),
        time_provider: Arc::new(clock()),
        advisor: AdvisorClient::new(advisor_url, Duration::from_secs(5)).unwrap(),
    }
}

pub fn test_app() -> Router {
    api::create_app(test_state(UNREACHABLE_ADVISOR), &[])
}

/// Response pieces the cookie tests look at
pub struct Exchange {
    pub status: StatusCode,
    pub set_cookies: Vec<String>,
    pub body: Value,
}

impl Exchange {
    /// `name=value` part of the first `Set-Cookie`, ready to send back
    pub fn cookie(&self) -> String {
        self.set_cookies[0]
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }
}

/// Send one request through the router with an optional `Cookie` header
pub async fn exchange(
    app: Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Exchange {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    Exchange {
        status,
        set_cookies,
        body,
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StubChat {
    #[serde(default)]
    session_id: Option<String>,
    message: String,
}

/// Stand-in for the remote advisor
///
/// `"fail"` gets a 500, `"slow"` is answered after a delay, anything else is
/// echoed back tagged with the session id.
fn stub_advisor() -> Router {
    Router::new()
        .route(
            "/api/sessions",
            post(|| async { Json(json!({ "sessionId": "session-1" })) }),
        )
        .route(
            "/api/sessions/:id",
            get(|Path(id): Path<String>| async move {
                if id != "session-1" {
                    return Err(StatusCode::NOT_FOUND);
                }
                Ok(Json(json!({
                    "messages": [
                        {"role": "user", "content": "When is MATH 100?", "timestamp": "2024-11-30T10:00:00Z"},
                        {"role": "bot", "content": "December 9 at 2:00 PM.", "timestamp": "2024-11-30T10:00:02Z"}
                    ]
                })))
            }),
        )
        .route(
            "/api/chat",
            post(|Json(chat): Json<StubChat>| async move {
                match chat.message.as_str() {
                    "fail" => return Err(StatusCode::INTERNAL_SERVER_ERROR),
                    "slow" => tokio::time::sleep(Duration::from_millis(300)).await,
                    _ => {}
                }
                Ok(Json(json!({
                    "content": format!("echo: {}", chat.message),
                    "metadata": { "session": chat.session_id }
                })))
            }),
        )
        .route("/api/clear-history", post(|| async { StatusCode::OK }))
}

/// Serve the stub on an ephemeral port and return its base URL
pub async fn spawn_stub_advisor() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_advisor()).await.unwrap();
    });
    format!("http://{address}/")
}
