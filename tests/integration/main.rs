//! Integration Tests
//!
//! HTTP-level tests against the full router, plus advisor tests against a
//! local stub of the remote chat service.

mod support;

mod test_exam_api;
mod test_saved_exams_api;
