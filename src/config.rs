//! Configuration management for Exam Planner
//!
//! Handles environment variables and application settings.

use crate::logging::LogFormat;
use crate::services::exam_filter::DEFAULT_CHUNK_SIZE;
use crate::services::exam_validation::ValidationMode;
use crate::services::selection_store::DEFAULT_RETENTION_DAYS;
use std::env;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Exam schedule JSON document
    pub dataset_path: PathBuf,

    /// Rows revealed per "show more"
    pub chunk_size: usize,

    /// Days a saved selection is retained after the last change
    pub retention_days: i64,

    /// Course/section casing rules for manual entries
    pub validation_mode: ValidationMode,

    /// Base URL of the remote advisor API
    pub advisor_url: String,

    /// Outbound request timeout in seconds
    pub request_timeout: u64,

    /// CORS origins (empty means allow all)
    pub cors_origins: Vec<String>,

    /// Built frontend to serve, if any
    pub frontend_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            dataset_path: PathBuf::from("data/final_schedule.json"),
            chunk_size: DEFAULT_CHUNK_SIZE,
            retention_days: DEFAULT_RETENTION_DAYS,
            validation_mode: ValidationMode::Strict,
            advisor_url: "http://127.0.0.1:5000/".to_string(),
            request_timeout: 30,
            cors_origins: vec![],
            frontend_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("EXAM_PLANNER_{name}"));
        let mut config = Self::default();

        // Server configuration
        if let Some(host) = var("HOST") {
            config.host = host;
        }

        if let Some(port) = var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        if let Some(environment) = var("ENVIRONMENT") {
            config.environment = environment;
        }

        // Logging
        if let Some(log_level) = var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Some(log_format) = var("LOG_FORMAT") {
            config.log_format = match log_format.to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidLogFormat(log_format)),
            };
        }

        // Exam schedule
        if let Some(dataset_path) = var("DATASET_PATH") {
            config.dataset_path = PathBuf::from(dataset_path);
        }

        if let Some(chunk_size) = var("CHUNK_SIZE") {
            config.chunk_size = chunk_size
                .parse()
                .map_err(|_| ConfigError::InvalidChunkSize(chunk_size))?;
        }

        if let Some(retention_days) = var("RETENTION_DAYS") {
            config.retention_days = retention_days
                .parse()
                .map_err(|_| ConfigError::InvalidRetention(retention_days))?;
        }

        if let Some(mode) = var("VALIDATION_MODE") {
            config.validation_mode = mode.parse().map_err(ConfigError::InvalidValidationMode)?;
        }

        // Advisor
        if let Some(advisor_url) = var("ADVISOR_URL") {
            config.advisor_url = advisor_url;
        }

        if let Some(timeout) = var("REQUEST_TIMEOUT") {
            config.request_timeout = timeout
                .parse()
                .map_err(|_| ConfigError::InvalidRequestTimeout(timeout))?;
        }

        // CORS origins
        if let Some(cors_origins) = var("CORS_ORIGINS") {
            config.cors_origins = cors_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Frontend directory
        if let Some(frontend_dir) = var("FRONTEND_DIR") {
            config.frontend_dir = Some(PathBuf::from(frontend_dir));
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size.to_string()));
        }

        if self.retention_days <= 0 {
            return Err(ConfigError::InvalidRetention(self.retention_days.to_string()));
        }

        if self.dataset_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatasetPath);
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                self.request_timeout.to_string(),
            ));
        }

        Url::parse(&self.advisor_url)
            .map_err(|e| ConfigError::InvalidAdvisorUrl(format!("{}: {e}", self.advisor_url)))?;

        Ok(())
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(self.retention_days)
    }

    pub fn request_timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout)
    }

    /// Log configuration
    pub fn log_config(&self) {
        info!("Configuration loaded:");
        info!("  Environment: {}", self.environment);
        info!("  Bind address: {}", self.bind_address());
        info!("  Dataset: {:?}", self.dataset_path);
        info!("  Chunk size: {}", self.chunk_size);
        info!("  Retention: {} days", self.retention_days);
        info!("  Validation mode: {:?}", self.validation_mode);
        info!("  Advisor URL: {}", self.advisor_url);
        info!("  Request timeout: {}s", self.request_timeout);
        info!("  CORS origins: {:?}", self.cors_origins);
        info!("  Frontend directory: {:?}", self.frontend_dir);
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid log format: {0} (expected pretty or json)")]
    InvalidLogFormat(String),

    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(String),

    #[error("Invalid retention days: {0}")]
    InvalidRetention(String),

    #[error("Invalid validation mode: {0} (expected strict or permissive)")]
    InvalidValidationMode(String),

    #[error("Invalid request timeout: {0}")]
    InvalidRequestTimeout(String),

    #[error("Invalid advisor URL: {0}")]
    InvalidAdvisorUrl(String),

    #[error("Empty dataset path")]
    EmptyDatasetPath,
}
