//! Exam Search and Pagination
//!
//! Case-insensitive course search over the schedule, revealed in fixed-size
//! chunks. Results are recomputed from scratch whenever the query changes.

use crate::models::ExamRecord;
use serde::Serialize;
use url::Url;

/// Default number of rows revealed per "show more"
pub const DEFAULT_CHUNK_SIZE: usize = 8;

/// Rows whose course contains `query`, ignoring case, in dataset order
pub fn filter_exams<'a>(rows: &'a [ExamRecord], query: &str) -> Vec<&'a ExamRecord> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| needle.is_empty() || row.course.to_lowercase().contains(&needle))
        .collect()
}

/// The `course` query parameter of a page URL, or an empty string
pub fn course_query_from_url(page_url: &str) -> Result<String, url::ParseError> {
    let url = Url::parse(page_url)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == "course")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default())
}

/// Chunked reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    chunk_size: usize,
    chunks_shown: usize,
}

impl Paginator {
    /// Paginator showing the first chunk; a zero chunk size is treated as 1
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            chunks_shown: 1,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunks_shown(&self) -> usize {
        self.chunks_shown
    }

    /// Number of rows visible out of `total`
    pub fn visible_count(&self, total: usize) -> usize {
        total.min(self.chunks_shown.saturating_mul(self.chunk_size))
    }

    pub fn visible<'r, T>(&self, rows: &'r [T]) -> &'r [T] {
        &rows[..self.visible_count(rows.len())]
    }

    pub fn can_show_more(&self, total: usize) -> bool {
        self.chunks_shown < total.div_ceil(self.chunk_size)
    }

    /// Reveal one more chunk; returns false when everything was already visible
    pub fn show_more(&mut self, total: usize) -> bool {
        if !self.can_show_more(total) {
            return false;
        }
        self.chunks_shown += 1;
        true
    }

    pub fn reset(&mut self) {
        self.chunks_shown = 1;
    }
}

/// Snapshot of the visible search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamPage {
    pub query: String,
    pub rows: Vec<ExamRecord>,
    pub total_matches: usize,
    pub visible: usize,
    pub chunk_size: usize,
    pub chunks_shown: usize,
    pub can_show_more: bool,
}

/// Search view over a dataset
#[derive(Debug, Clone)]
pub struct ExamBrowser<'a> {
    dataset: &'a [ExamRecord],
    query: String,
    matches: Vec<&'a ExamRecord>,
    paginator: Paginator,
}

impl<'a> ExamBrowser<'a> {
    pub fn new(dataset: &'a [ExamRecord], chunk_size: usize) -> Self {
        Self {
            dataset,
            query: String::new(),
            matches: filter_exams(dataset, ""),
            paginator: Paginator::new(chunk_size),
        }
    }

    /// Browser pre-populated with `query`, as from a `course` URL parameter
    pub fn with_query(dataset: &'a [ExamRecord], chunk_size: usize, query: &str) -> Self {
        let mut browser = Self::new(dataset, chunk_size);
        browser.set_query(query);
        browser
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the query, re-filter, and collapse to the first chunk
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.matches = filter_exams(self.dataset, query);
        self.paginator.reset();
    }

    pub fn show_more(&mut self) -> bool {
        self.paginator.show_more(self.matches.len())
    }

    /// Expand to `chunks` chunks, stopping once everything is visible
    pub fn show_chunks(&mut self, chunks: usize) {
        while self.paginator.chunks_shown() < chunks && self.show_more() {}
    }

    pub fn can_show_more(&self) -> bool {
        self.paginator.can_show_more(self.matches.len())
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn visible_rows(&self) -> &[&'a ExamRecord] {
        self.paginator.visible(&self.matches)
    }

    pub fn page(&self) -> ExamPage {
        let rows: Vec<ExamRecord> = self.visible_rows().iter().map(|&row| row.clone()).collect();
        ExamPage {
            query: self.query.clone(),
            visible: rows.len(),
            rows,
            total_matches: self.matches.len(),
            chunk_size: self.paginator.chunk_size(),
            chunks_shown: self.paginator.chunks_shown(),
            can_show_more: self.can_show_more(),
        }
    }
}
