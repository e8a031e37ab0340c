//! Exam Draft Model
//!
//! Transient form state for a manually entered exam, plus the per-field
//! validation messages shown next to each input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Fields of the "add exam" form, in schedule order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExamField {
    Course,
    Section,
    Date,
    Time,
    Length,
    Window,
    Location,
}

/// Free-text exam entry as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDraft {
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub window: String,
    #[serde(default)]
    pub location: String,
}

impl ExamDraft {
    /// Raw value of a field
    pub fn get(&self, field: ExamField) -> &str {
        match field {
            ExamField::Course => &self.course,
            ExamField::Section => &self.section,
            ExamField::Date => &self.date,
            ExamField::Time => &self.time,
            ExamField::Length => &self.length,
            ExamField::Window => &self.window,
            ExamField::Location => &self.location,
        }
    }

    /// Replace a field value
    pub fn set(&mut self, field: ExamField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ExamField::Course => self.course = value,
            ExamField::Section => self.section = value,
            ExamField::Date => self.date = value,
            ExamField::Time => self.time = value,
            ExamField::Length => self.length = value,
            ExamField::Window => self.window = value,
            ExamField::Location => self.location = value,
        }
    }
}

/// Validation message per field; an empty string means the field is valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ExamField, String>);

impl Default for FieldErrors {
    fn default() -> Self {
        Self(ExamField::iter().map(|field| (field, String::new())).collect())
    }
}

impl FieldErrors {
    /// All fields valid
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for a field (empty if valid)
    pub fn get(&self, field: ExamField) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }

    /// Record the message for a field
    pub fn set(&mut self, field: ExamField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the message for a field, as when the user edits it again
    pub fn clear(&mut self, field: ExamField) {
        self.set(field, String::new());
    }

    /// True when no field carries a message
    pub fn is_valid(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Fields that failed, in schedule order
    pub fn iter_invalid(&self) -> impl Iterator<Item = (ExamField, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
    }
}
