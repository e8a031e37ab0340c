//! API module for Exam Planner
//!
//! Contains all REST API endpoints and routing.

pub mod advisor;
pub mod exams;
pub mod resources;
pub mod saved_exams;

use crate::services::advisor_client::AdvisorClient;
use crate::services::exam_dataset::ExamDataset;
use crate::services::exam_validation::DraftValidator;
use crate::services::resource_directory::ResourceDirectory;
use crate::services::time_provider::SharedTimeProvider;
use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<ExamDataset>,
    pub validator: Arc<DraftValidator>,
    pub resources: ResourceDirectory,
    pub chunk_size: usize,
    pub retention: chrono::Duration,
    pub time_provider: SharedTimeProvider,
    pub advisor: AdvisorClient,
}

async fn health_check() -> &'static str {
    "OK"
}

/// All API routes, without middleware
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(exams::create_router())
        .merge(saved_exams::create_router())
        .merge(resources::create_router())
        .merge(advisor::create_router())
}

/// API routes with tracing and CORS applied
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    crate::request_span!(request.method(), request.uri().path())
                }))
                .layer(cors_layer(cors_origins)),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
