//! Filter controller
//!
//! Owns the current search term and the filtered view over a caller-supplied
//! record set. The term updates immediately on every change; the view
//! follows once input has been quiet for the debounce delay. An empty term
//! bypasses the delay and restores the full set at once.

use crate::debounce::DebounceScheduler;
use crate::predicate::filter_records;
use crate::FilterConfig;
use parking_lot::Mutex;
use reflect_core::Searchable;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// State shared between the controller and its pending filter pass
struct FilterState<R> {
    /// Full record set (read-only)
    records: Arc<[R]>,
    /// Current search term
    term: String,
    /// Term the current filtered view was computed for
    view_term: String,
    /// Current filtered view
    filtered: Vec<R>,
    /// Bumped on every republish of `filtered`
    revision: watch::Sender<u64>,
}

impl<R: Searchable + Clone> FilterState<R> {
    /// Recompute `filtered` from the current term and publish it
    fn refilter(&mut self) {
        self.filtered = if self.term.is_empty() {
            self.records.to_vec()
        } else {
            filter_records(&self.term, &self.records)
        };
        self.view_term.clone_from(&self.term);
        debug!(
            "Filter settled on {:?}: {} of {} records",
            self.term,
            self.filtered.len(),
            self.records.len()
        );
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Debounced incremental filter over a record set
///
/// Must be driven from within a Tokio runtime: non-empty terms arm a timer
/// task on it.
pub struct FilterController<R> {
    state: Arc<Mutex<FilterState<R>>>,
    scheduler: DebounceScheduler,
}

impl<R> FilterController<R>
where
    R: Searchable + Clone + Send + Sync + 'static,
{
    /// Create a controller showing every record, with the configured delay
    pub fn new(records: Vec<R>, config: &FilterConfig) -> Self {
        Self::with_delay(records, config.delay())
    }

    /// Create a controller with an explicit debounce delay
    pub fn with_delay(records: Vec<R>, delay: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        let state = FilterState {
            filtered: records.clone(),
            records: records.into(),
            term: String::new(),
            view_term: String::new(),
            revision,
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            scheduler: DebounceScheduler::new(delay),
        }
    }

    /// Handle a search-term change event
    ///
    /// The term is stored immediately. An exact empty string cancels any
    /// pending pass and restores the full set now; anything else (including
    /// whitespace) schedules a pass that filters by whatever the term is when
    /// the timer fires.
    pub fn on_search_term_change(&mut self, term: &str) {
        self.state.lock().term = term.to_string();

        if term.is_empty() {
            self.scheduler.cancel();
            self.state.lock().refilter();
            return;
        }

        let state = Arc::clone(&self.state);
        self.scheduler.schedule(move || state.lock().refilter());
    }

    /// Clear the search
    pub fn reset(&mut self) {
        self.on_search_term_change("");
    }

    /// Swap in a new full record set
    ///
    /// Cancels any pending pass and republishes the view for the current
    /// term immediately.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.scheduler.cancel();
        let mut state = self.state.lock();
        state.records = records.into();
        state.refilter();
    }

    /// Wait for a pending pass, if any, to settle
    pub async fn settle(&mut self) {
        self.scheduler.wait().await;
    }

    /// Cancel any pending pass; the controller stays usable
    pub fn dispose(&mut self) {
        self.scheduler.cancel();
    }

    /// Current search term
    pub fn search_term(&self) -> String {
        self.state.lock().term.clone()
    }

    /// Current filtered view
    pub fn filtered(&self) -> Vec<R> {
        self.state.lock().filtered.clone()
    }

    /// Filtered view together with the term it was computed for
    ///
    /// Read under one lock. `search_term()` may already hold a newer,
    /// still-pending term.
    pub fn view(&self) -> (String, Vec<R>) {
        let state = self.state.lock();
        (state.view_term.clone(), state.filtered.clone())
    }

    /// Full record set
    pub fn records(&self) -> Arc<[R]> {
        Arc::clone(&self.state.lock().records)
    }

    /// Is a filter pass waiting for input to settle?
    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Debounce delay
    pub fn delay(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Watch the revision counter, bumped whenever the view is republished
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.state.lock().revision.subscribe()
    }
}
