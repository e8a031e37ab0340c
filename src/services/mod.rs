//! Services module for Exam Planner
//!
//! Contains all business logic and service implementations.

pub mod advisor_client;
pub mod advisor_session;
pub mod exam_dataset;
pub mod exam_filter;
pub mod exam_validation;
pub mod resource_directory;
pub mod selection_store;
pub mod time_provider;

// Re-export commonly used services
pub use advisor_client::{AdvisorClient, AdvisorError, AdvisorReply};
pub use advisor_session::{AdvisorSession, SessionState};
pub use exam_dataset::{DatasetError, ExamDataset};
pub use exam_filter::{filter_exams, ExamBrowser, ExamPage, Paginator};
pub use exam_validation::{submit_draft, DraftValidator, SubmitError, ValidationMode};
pub use resource_directory::{ResourceDirectory, ResourceListing};
pub use selection_store::SelectionStore;
pub use time_provider::{MockTimeProvider, SharedTimeProvider, SystemTimeProvider, TimeProvider};
