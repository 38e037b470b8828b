//! In-memory catalog browser - the state behind a listing surface.
//!
//! Holds the fetched record list and the current query, and re-runs the
//! [`CatalogQuery`] pipeline whenever a consumer asks for the visible set.
//! Two concerns beyond plain state live here:
//!
//! - Search term edits are debounced: a term is applied only after
//!   [`DEBOUNCE_INTERVAL`] of inactivity, and a pending term is cancelled
//!   when the browser is dropped so it can never land after teardown.
//! - Refreshes carry a generation number. A response from an older refresh
//!   than the one last applied is discarded instead of overwriting newer
//!   local state.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::catalog::VideoRecord;
use crate::query::{self, CatalogQuery, CatalogSummary, SortKey};

/// How long a search term must be stable before it is applied.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

struct BrowserState {
    records: Vec<VideoRecord>,
    query: CatalogQuery,
    /// Generation of the refresh whose records are currently held.
    applied_generation: u64,
    /// Highest generation handed out by `begin_refresh`.
    issued_generation: u64,
}

/// State holder for a catalog listing surface.
pub struct CatalogBrowser {
    state: Arc<Mutex<BrowserState>>,
    debounce: Duration,
    pending_term: Mutex<Option<JoinHandle<()>>>,
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self::with_debounce(DEBOUNCE_INTERVAL)
    }

    /// Override the debounce interval (tests use a short one).
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(BrowserState {
                records: Vec::new(),
                query: CatalogQuery::default(),
                applied_generation: 0,
                issued_generation: 0,
            })),
            debounce,
            pending_term: Mutex::new(None),
        }
    }

    /// Start a refresh and get its generation token.
    pub fn begin_refresh(&self) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.issued_generation += 1;
        state.issued_generation
    }

    /// Apply the records fetched by the refresh with the given generation.
    ///
    /// Returns false (and leaves state untouched) when a newer refresh has
    /// already been applied - the stale in-flight response loses.
    pub fn apply_refresh(&self, generation: u64, records: Vec<VideoRecord>) -> bool {
        let mut state = self.state.lock().unwrap();
        if generation <= state.applied_generation {
            tracing::debug!(
                generation,
                applied = state.applied_generation,
                "Discarding stale refresh"
            );
            return false;
        }
        state.applied_generation = generation;
        state.records = records;
        true
    }

    /// Prepend a record the consumer just created.
    pub fn record_created(&self, record: VideoRecord) {
        let mut state = self.state.lock().unwrap();
        state.records.insert(0, record);
    }

    /// Drop a record the consumer just deleted.
    pub fn record_deleted(&self, id: &str) {
        let mut state = self.state.lock().unwrap();
        state.records.retain(|r| r.id != id);
    }

    /// Apply a search term immediately.
    pub fn set_term(&self, term: impl Into<String>) {
        self.cancel_pending_term();
        self.state.lock().unwrap().query.term = term.into();
    }

    /// Apply a search term after the debounce interval of inactivity.
    ///
    /// Each call cancels the previous pending term. Must be called from
    /// within a tokio runtime.
    pub fn set_term_debounced(&self, term: impl Into<String>) {
        let term = term.into();
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            state.lock().unwrap().query.term = term;
        });

        let mut pending = self.pending_term.lock().unwrap();
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    pub fn set_category(&self, category: impl Into<String>) {
        self.state.lock().unwrap().query.category = category.into();
    }

    pub fn set_sort(&self, sort: SortKey) {
        self.state.lock().unwrap().query.sort = sort;
    }

    /// The current query (term as applied, not as pending).
    pub fn query(&self) -> CatalogQuery {
        self.state.lock().unwrap().query.clone()
    }

    /// All held records in fetch order.
    pub fn records(&self) -> Vec<VideoRecord> {
        self.state.lock().unwrap().records.clone()
    }

    /// The filtered, ordered view the surface renders.
    pub fn visible(&self) -> Vec<VideoRecord> {
        let state = self.state.lock().unwrap();
        state.query.apply(&state.records)
    }

    /// Category choices for the filter control.
    pub fn categories(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        query::category_options(&state.records)
    }

    /// Dashboard numbers over the held records.
    pub fn summary(&self, owner: Option<&str>) -> CatalogSummary {
        let state = self.state.lock().unwrap();
        query::summarize(&state.records, Utc::now(), owner)
    }

    fn cancel_pending_term(&self) {
        if let Some(handle) = self.pending_term.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CatalogBrowser {
    fn drop(&mut self) {
        self.cancel_pending_term();
    }
}
