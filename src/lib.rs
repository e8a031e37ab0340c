//! Exam Planner library
//!
//! Final-exam schedule browser: course search, a cookie-persisted selection
//! of saved exams, validated manual entries, campus resources and a proxy to
//! the advisory chat service.

pub mod logging;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
