//! Exam Record Model
//!
//! One row of the final-exam schedule. Stored, exported and bundled as a
//! seven-element JSON array; exposed to Rust code with named fields.

use serde::{Deserialize, Serialize};

/// Number of fields in an exam row
pub const EXAM_FIELD_COUNT: usize = 7;

/// Positional wire form of an exam record
pub type ExamRow = [String; EXAM_FIELD_COUNT];

/// A single final exam
///
/// Two records describe the same exam when their course and section match,
/// regardless of the remaining fields. See [`ExamRecord::same_exam`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExamRow", into = "ExamRow")]
pub struct ExamRecord {
    /// Course code (e.g. "CMPUT 175")
    pub course: String,

    /// Section (e.g. "A1")
    pub section: String,

    /// Exam date, MM/DD/YYYY
    pub date: String,

    /// Start time, HH:MM AM/PM
    pub time: String,

    /// Free-text length (e.g. "2 hours")
    pub length: String,

    /// Completion window
    pub window: String,

    /// Room or building
    pub location: String,
}

impl ExamRecord {
    /// Create a record from its seven fields in schedule order
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        course: impl Into<String>,
        section: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        length: impl Into<String>,
        window: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            section: section.into(),
            date: date.into(),
            time: time.into(),
            length: length.into(),
            window: window.into(),
            location: location.into(),
        }
    }

    /// Identity key used for deduplication
    pub fn identity(&self) -> (&str, &str) {
        (&self.course, &self.section)
    }

    /// Whether both records refer to the same exam (course + section)
    pub fn same_exam(&self, other: &ExamRecord) -> bool {
        self.identity() == other.identity()
    }

    /// Fields in schedule order
    pub fn to_row(&self) -> ExamRow {
        self.clone().into()
    }
}

impl From<ExamRow> for ExamRecord {
    fn from(row: ExamRow) -> Self {
        let [course, section, date, time, length, window, location] = row;
        Self {
            course,
            section,
            date,
            time,
            length,
            window,
            location,
        }
    }
}

impl From<ExamRecord> for ExamRow {
    fn from(record: ExamRecord) -> Self {
        [
            record.course,
            record.section,
            record.date,
            record.time,
            record.length,
            record.window,
            record.location,
        ]
    }
}
