//! Selection Store
//!
//! The user's saved exams, persisted through a [`KeyValueStore`] after every
//! change. A non-empty selection is written with a fixed retention window; an
//! empty selection deletes the stored entry instead of writing `[]`.

use crate::logging::{log_selection_change, log_storage_recovery};
use crate::models::ExamRecord;
use crate::storage::{KeyValueStore, StorageError, SAVED_EXAMS_KEY};
use chrono::Duration;
use tracing::debug;

/// Default retention of the stored selection, in days
pub const DEFAULT_RETENTION_DAYS: i64 = 30;

/// Saved exams backed by a key/value store
#[derive(Debug)]
pub struct SelectionStore<S> {
    storage: S,
    exams: Vec<ExamRecord>,
    retention: Duration,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Load the persisted selection with the default 30-day retention
    pub fn load(storage: S) -> Self {
        Self::load_with_retention(storage, Duration::days(DEFAULT_RETENTION_DAYS))
    }

    /// Load the persisted selection
    ///
    /// A missing entry yields an empty selection; so does an unreadable one,
    /// which is logged and otherwise ignored.
    pub fn load_with_retention(storage: S, retention: Duration) -> Self {
        let exams = match storage.read(SAVED_EXAMS_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<ExamRecord>>(&raw) {
                Ok(exams) => exams,
                Err(e) => {
                    log_storage_recovery(SAVED_EXAMS_KEY, &e.to_string());
                    Vec::new()
                }
            },
        };

        debug!("Loaded {} saved exams", exams.len());
        Self {
            storage,
            exams,
            retention,
        }
    }

    /// Saved exams in insertion order
    pub fn exams(&self) -> &[ExamRecord] {
        &self.exams
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// Whether an exam with the same course and section is saved
    pub fn contains(&self, exam: &ExamRecord) -> bool {
        self.exams.iter().any(|saved| saved.same_exam(exam))
    }

    /// Remove the exam if saved, otherwise append it
    pub fn toggle(&mut self, exam: ExamRecord) -> Result<&[ExamRecord], StorageError> {
        if self.contains(&exam) {
            self.exams.retain(|saved| !saved.same_exam(&exam));
            log_selection_change("toggle_off", &exam.course, &exam.section, self.exams.len());
        } else {
            log_selection_change("toggle_on", &exam.course, &exam.section, self.exams.len() + 1);
            self.exams.push(exam);
        }
        self.persist()
    }

    /// Remove every saved entry with the exam's identity
    pub fn remove(&mut self, exam: &ExamRecord) -> Result<&[ExamRecord], StorageError> {
        self.exams.retain(|saved| !saved.same_exam(exam));
        log_selection_change("remove", &exam.course, &exam.section, self.exams.len());
        self.persist()
    }

    /// Append unconditionally
    pub fn add(&mut self, exam: ExamRecord) -> Result<&[ExamRecord], StorageError> {
        log_selection_change("add", &exam.course, &exam.section, self.exams.len() + 1);
        self.exams.push(exam);
        self.persist()
    }

    /// Hand back the storage adapter, e.g. to collect response cookies
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<&[ExamRecord], StorageError> {
        if self.exams.is_empty() {
            self.storage.delete(SAVED_EXAMS_KEY)?;
        } else {
            let serialized = serde_json::to_string(&self.exams)
                .map_err(|e| StorageError::Encoding(e.to_string()))?;
            self.storage
                .write(SAVED_EXAMS_KEY, &serialized, self.retention)?;
        }
        Ok(&self.exams)
    }
}
