//! Logging configuration for Exam Planner
//!
//! Structured logging setup with appropriate levels and formatting.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize the application logging system
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str, format: LogFormat) {
    let default_filter = format!("exam_planner={level},tower_http={level},axum::rejection=trace");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = match format {
        LogFormat::Json => json_layer().boxed(),
        LogFormat::Pretty => console_layer().boxed(),
    };

    // Ignore a second initialization (tests, embedded use)
    let _ = Registry::default().with(layer.with_filter(env_filter)).try_init();

    tracing::info!("Logging system initialized");
}

/// JSON logging layer for production
fn json_layer() -> impl Layer<Registry> + Send + Sync {
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

/// Console logging layer for development
fn console_layer() -> impl Layer<Registry> + Send + Sync {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
}

/// Create a span for request logging
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            status_code = tracing::field::Empty,
        )
    };
}

/// Log application startup
pub fn log_startup(bind_address: &str, exam_count: usize) {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %bind_address,
        exam_count,
        "Exam Planner starting up"
    );
}

/// Log a change to the saved exam selection
pub fn log_selection_change(operation: &str, course: &str, section: &str, saved_count: usize) {
    tracing::info!(
        operation = %operation,
        course = %course,
        section = %section,
        saved_count,
        "Saved exams updated"
    );
}

/// Log a stored value that could not be decoded and was discarded
pub fn log_storage_recovery(key: &str, error: &str) {
    tracing::warn!(
        key = %key,
        error = %error,
        "Discarding unreadable stored value"
    );
}

/// Log a dataset row that was skipped while loading
pub fn log_dataset_row_skipped(row_index: usize, cell_count: usize) {
    tracing::warn!(
        row_index,
        cell_count,
        "Skipping malformed dataset row"
    );
}

/// Log an advisor API call outcome
pub fn log_advisor_call(endpoint: &str, success: bool, detail: Option<&str>) {
    if success {
        tracing::debug!(endpoint = %endpoint, "Advisor call succeeded");
    } else {
        tracing::warn!(
            endpoint = %endpoint,
            detail = ?detail,
            "Advisor call failed"
        );
    }
}

/// Log error with context
pub fn log_error(error: &str, context: &str) {
    tracing::error!(
        error = %error,
        context = %context,
        "Application error occurred"
    );
}
