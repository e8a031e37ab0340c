//! Models module for Exam Planner
//!
//! Contains all data models and their validation logic.

pub mod chat_message;
pub mod exam_draft;
pub mod exam_record;
pub mod resource_link;

// Re-export commonly used types
pub use chat_message::{ChatMessage, ChatRole};
pub use exam_draft::{ExamDraft, ExamField, FieldErrors};
pub use exam_record::{ExamRecord, ExamRow};
pub use resource_link::{ResourceGroup, ResourceLink};
