//! Catalog query pipeline - filter and order the in-memory video list.
//!
//! Listing surfaces fetch the whole catalog once and then narrow it locally
//! on every input change; no round-trip happens per query. This module is
//! the single implementation of that narrowing, shared by every consumer.
//!
//! The pipeline is pure: identical inputs always produce an identical
//! output sequence, values and order.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::VideoRecord;

/// Synthetic category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Sort order for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending by creation time.
    #[default]
    Newest,
    /// Ascending by creation time.
    Oldest,
    /// Ascending locale-aware order of the title.
    Title,
    /// Ascending locale-aware order of the instructor name.
    Instructor,
    /// Unrecognised sort key from the wire - leave the filtered order as-is.
    #[serde(other)]
    Unsorted,
}

/// A catalog query: free-text term, category filter, sort order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against title, description and
    /// instructor. Empty means no term filter.
    #[serde(default)]
    pub term: String,
    /// Exact, case-sensitive category match. `"all"` means no filter.
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub sort: SortKey,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: default_category(),
            sort: SortKey::default(),
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the pipeline: filter `records` by term and category, then order
    /// by the sort key. Returns an owned, possibly empty list; never fails.
    pub fn apply(&self, records: &[VideoRecord]) -> Vec<VideoRecord> {
        let term = self.term.to_lowercase();

        let mut selected: Vec<VideoRecord> = records
            .iter()
            .filter(|record| {
                (term.is_empty() || matches_term(record, &term))
                    && (self.category == ALL_CATEGORIES || record.category == self.category)
            })
            .cloned()
            .collect();

        match self.sort {
            SortKey::Newest => selected.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Oldest => selected.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::Title => selected.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
            SortKey::Instructor => {
                selected.sort_by(|a, b| locale_cmp(&a.instructor, &b.instructor))
            }
            SortKey::Unsorted => {}
        }

        selected
    }
}

/// Does the term (already lowercased) appear in any searchable field?
fn matches_term(record: &VideoRecord, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
        || record.instructor.to_lowercase().contains(term)
}

/// Locale-aware-ish string ordering: case-folded comparison with the raw
/// string as tiebreak so the order is total and deterministic.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Category choices for a filter control: `"all"` first, then distinct
/// categories in first-seen order from `records`. Not sorted alphabetically;
/// the ordering is part of the contract.
pub fn category_options(records: &[VideoRecord]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if !options[1..].contains(&record.category) {
            options.push(record.category.clone());
        }
    }
    options
}

/// Headline numbers for a dashboard over the in-memory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Total records.
    pub total: usize,
    /// Distinct categories.
    pub categories: usize,
    /// Records created within the last seven days of `now`.
    pub added_this_week: usize,
    /// Records owned by the given instructor id (0 when no owner given).
    pub owned: usize,
}

/// Derive [`CatalogSummary`] from the in-memory list.
pub fn summarize(
    records: &[VideoRecord],
    now: DateTime<Utc>,
    owner: Option<&str>,
) -> CatalogSummary {
    let week_ago = now - Duration::days(7);
    CatalogSummary {
        total: records.len(),
        categories: category_options(records).len() - 1,
        added_this_week: records.iter().filter(|r| r.created_at > week_ago).count(),
        owned: owner
            .map(|id| records.iter().filter(|r| r.instructor_id == id).count())
            .unwrap_or(0),
    }
}
