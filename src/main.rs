//! Exam Planner backend that serves the frontend and the schedule API

use std::sync::Arc;

use anyhow::Context;
use exam_planner::api::{self, AppState};
use exam_planner::config::Config;
use exam_planner::logging::{init_logging, log_startup};
use exam_planner::services::{
    AdvisorClient, DraftValidator, ExamDataset, ResourceDirectory, SystemTimeProvider,
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    init_logging(&config.log_level, config.log_format);
    config.log_config();

    let dataset = ExamDataset::from_path(&config.dataset_path)
        .with_context(|| format!("Failed to load exam schedule from {:?}", config.dataset_path))?;
    let validator = DraftValidator::new(config.validation_mode)?;
    let advisor = AdvisorClient::new(&config.advisor_url, config.request_timeout_duration())?;

    let state = AppState {
        dataset: Arc::new(dataset),
        validator: Arc::new(validator),
        resources: ResourceDirectory::default(),
        chunk_size: config.chunk_size,
        retention: config.retention(),
        time_provider: Arc::new(SystemTimeProvider::new()),
        advisor,
    };
    let exam_count = state.dataset.len();

    let mut app = api::create_app(state, &config.cors_origins);

    // Serve the built frontend, falling back to index.html for client routes
    if let Some(frontend_dir) = &config.frontend_dir {
        info!("Serving frontend from {:?}", frontend_dir);
        let index = frontend_dir.join("index.html");
        app = app.fallback_service(ServeDir::new(frontend_dir).fallback(ServeFile::new(index)));
    }

    let bind_address = config.bind_address();
    log_startup(&bind_address, exam_count);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
