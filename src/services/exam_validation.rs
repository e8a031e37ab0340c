//! Exam Entry Validation
//!
//! Field-by-field checks for manually entered exams, and admission of a
//! valid draft into the selection store.

use crate::models::{ExamDraft, ExamField, ExamRecord, FieldErrors};
use crate::services::selection_store::SelectionStore;
use crate::storage::{KeyValueStore, StorageError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

pub const COURSE_MESSAGE: &str = r#"Format should be like "CMPUT 175""#;
pub const SECTION_MESSAGE: &str = "Section should be 1-3 characters";
pub const DATE_MESSAGE: &str = "Format: MM/DD/YYYY";
pub const TIME_MESSAGE: &str = "Format: HH:MM AM/PM";
pub const LENGTH_MESSAGE: &str = "Format: X hours or X hrs";
pub const REQUIRED_MESSAGE: &str = "Required field";
pub const DUPLICATE_MESSAGE: &str = "This exam is already saved";

/// How strictly course and section casing is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Course letters and section must be upper-case
    #[default]
    Strict,
    /// Either case is accepted and upper-cased on admission
    Permissive,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(other.to_string()),
        }
    }
}

/// Compiled field patterns
#[derive(Debug, Clone)]
pub struct DraftValidator {
    mode: ValidationMode,
    course: Regex,
    section: Regex,
    date: Regex,
    time: Regex,
    bare_number: Regex,
    length: Regex,
}

impl DraftValidator {
    pub fn new(mode: ValidationMode) -> Result<Self, regex::Error> {
        let case_insensitive = mode == ValidationMode::Permissive;
        Ok(Self {
            mode,
            course: RegexBuilder::new(r"^[A-Z]{2,6}[ \t]*[0-9]{3}$")
                .case_insensitive(case_insensitive)
                .unicode(false)
                .build()?,
            section: RegexBuilder::new(r"^[A-Z0-9]{1,3}$")
                .case_insensitive(case_insensitive)
                .unicode(false)
                .build()?,
            date: Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$")?,
            time: Regex::new(r"(?i-u)^(0?[1-9]|1[0-2]):[0-5][0-9][ \t]*(AM|PM)$")?,
            bare_number: Regex::new(r"^[0-9]+(\.[0-9]+)?$")?,
            length: Regex::new(r"(?i-u)^([0-9]+(?:\.[0-9]+)?)[ \t]*(hour|hours|hr|hrs)$")?,
        })
    }

    pub fn validate_course(&self, value: &str) -> String {
        check(self.course.is_match(value.trim()), COURSE_MESSAGE)
    }

    pub fn validate_section(&self, value: &str) -> String {
        check(self.section.is_match(value.trim()), SECTION_MESSAGE)
    }

    pub fn validate_date(&self, value: &str) -> String {
        check(self.date.is_match(value.trim()), DATE_MESSAGE)
    }

    pub fn validate_time(&self, value: &str) -> String {
        check(self.time.is_match(value.trim()), TIME_MESSAGE)
    }

    /// Validates the already-normalized length; the amount must be positive
    pub fn validate_length(&self, value: &str) -> String {
        let positive = self
            .length
            .captures(value.trim())
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .is_some_and(|amount| amount > 0.0);
        check(positive, LENGTH_MESSAGE)
    }

    pub fn validate_required(value: &str) -> String {
        check(!value.trim().is_empty(), REQUIRED_MESSAGE)
    }

    /// Rewrite a bare number such as `"2"` to `"2 hours"`
    pub fn normalize_length(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if self.bare_number.is_match(trimmed) {
            format!("{trimmed} hours")
        } else {
            trimmed.to_string()
        }
    }

    /// Message for one field of the draft, after length normalization
    pub fn validate_field(&self, draft: &ExamDraft, field: ExamField) -> String {
        let value = draft.get(field);
        match field {
            ExamField::Course => self.validate_course(value),
            ExamField::Section => self.validate_section(value),
            ExamField::Date => self.validate_date(value),
            ExamField::Time => self.validate_time(value),
            ExamField::Length => self.validate_length(&self.normalize_length(value)),
            ExamField::Window | ExamField::Location => Self::validate_required(value),
        }
    }

    /// Messages for every field
    pub fn validate(&self, draft: &ExamDraft) -> FieldErrors {
        use strum::IntoEnumIterator;

        let mut errors = FieldErrors::new();
        for field in ExamField::iter() {
            errors.set(field, self.validate_field(draft, field));
        }
        errors
    }

    /// Turn a valid draft into a record: trimmed fields, normalized length,
    /// and upper-cased course/section in permissive mode.
    pub fn admit(&self, draft: &ExamDraft) -> Result<ExamRecord, FieldErrors> {
        let errors = self.validate(draft);
        if !errors.is_valid() {
            return Err(errors);
        }

        let (course, section) = match self.mode {
            ValidationMode::Strict => (draft.course.trim().to_string(), draft.section.trim().to_string()),
            ValidationMode::Permissive => (
                draft.course.trim().to_uppercase(),
                draft.section.trim().to_uppercase(),
            ),
        };

        Ok(ExamRecord::new(
            course,
            section,
            draft.date.trim(),
            draft.time.trim(),
            self.normalize_length(&draft.length),
            draft.window.trim(),
            draft.location.trim(),
        ))
    }
}

/// Why a draft was not saved
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Exam entry has invalid fields")]
    Invalid(FieldErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Validate a draft and, if it passes, append it to the selection
///
/// Rejected drafts leave the selection untouched. A draft for an exam that
/// is already saved is rejected on the section field.
pub fn submit_draft<S: KeyValueStore>(
    store: &mut SelectionStore<S>,
    validator: &DraftValidator,
    draft: &ExamDraft,
) -> Result<ExamRecord, SubmitError> {
    let exam = validator.admit(draft).map_err(SubmitError::Invalid)?;

    if store.contains(&exam) {
        debug!("Rejecting duplicate draft for {} {}", exam.course, exam.section);
        let mut errors = FieldErrors::new();
        errors.set(ExamField::Section, DUPLICATE_MESSAGE);
        return Err(SubmitError::Invalid(errors));
    }

    store.add(exam.clone())?;
    Ok(exam)
}

fn check(valid: bool, message: &str) -> String {
    if valid {
        String::new()
    } else {
        message.to_string()
    }
}
