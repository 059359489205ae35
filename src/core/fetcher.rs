//! Order-test range fetcher
//!
//! [`OrderTestRangeFetcher`] owns everything the order-test view shows: the
//! selected [`DateRange`], the fetched records, the loading flag, the
//! validation error slot, and the [`Paginator`].
//!
//! # Lifecycle
//!
//! ```text
//! idle --select_range--> loading --apply--> populated | empty
//!                           ^                     |
//!                           +----select_range-----+
//! ```
//!
//! Selecting a valid range returns a [`FetchRequest`]. The request borrows
//! nothing from the fetcher, so a caller can run it on another task and
//! keep handling input while the view shows "loading"; the resulting
//! [`FetchOutcome`] is handed back through [`OrderTestRangeFetcher::apply`].
//! Requests are never cancelled. If two are in flight, whichever outcome
//! is applied last wins, even if it belongs to an older range.

use super::clock::Clock;
use super::notify::Notifier;
use super::paginator::{PageControl, Paginator};
use super::table::{TableRenderer, TableRow};
use crate::adapters::orders::OrderTestSource;
use crate::config::PaginationConfig;
use crate::domain::{DateRange, FetchError, OrderTestRecord, RangeError, ValidRange};
use crate::log_error_with_context;
use std::sync::Arc;

/// What the order-test view currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// A request is outstanding
    Loading,

    /// Not loading and there are no records ("No data found.")
    Empty,

    /// Not loading and at least one record is available
    Populated,
}

/// A request for one validated range
pub struct FetchRequest {
    range: ValidRange,
    source: Arc<dyn OrderTestSource>,
}

impl FetchRequest {
    pub fn range(&self) -> &ValidRange {
        &self.range
    }

    /// Performs the request
    pub async fn send(self) -> FetchOutcome {
        let result = self.source.fetch_range(&self.range).await;
        FetchOutcome {
            range: self.range,
            result,
        }
    }
}

impl std::fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRequest")
            .field("range", &self.range)
            .field("base_url", &self.source.base_url())
            .finish()
    }
}

/// Result of a [`FetchRequest`]
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub range: ValidRange,
    pub result: Result<Vec<OrderTestRecord>, FetchError>,
}

/// Owns the selected range, fetched records and page state
pub struct OrderTestRangeFetcher {
    source: Arc<dyn OrderTestSource>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    range: DateRange,
    records: Vec<OrderTestRecord>,
    loading: bool,
    validation_error: Option<RangeError>,
    last_fetch_error: Option<FetchError>,
    paginator: Paginator,
    reset_on_new_data: bool,
    requests_issued: u64,
}

impl OrderTestRangeFetcher {
    /// Create a fetcher with default pagination
    pub fn new(
        source: Arc<dyn OrderTestSource>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            clock,
            notifier,
            range: DateRange::empty(),
            records: Vec::new(),
            loading: false,
            validation_error: None,
            last_fetch_error: None,
            paginator: Paginator::default(),
            reset_on_new_data: false,
            requests_issued: 0,
        }
    }

    /// Applies pagination settings
    pub fn with_pagination(mut self, config: &PaginationConfig) -> Self {
        self.paginator = Paginator::from_config(config);
        self.reset_on_new_data = config.reset_on_new_data;
        self
    }

    /// Selects a new date range
    ///
    /// - A rejected range is returned as `Err`, stored in the error slot,
    ///   and forwarded to the notifier. The range in effect is unchanged.
    /// - An incomplete range becomes the selection but issues no request.
    /// - Reselecting the range already in effect issues no request.
    /// - Otherwise the range becomes the selection, the fetcher enters the
    ///   loading state, and the request to perform is returned.
    pub fn select_range(&mut self, range: DateRange) -> Result<Option<FetchRequest>, RangeError> {
        let valid = match range.validate(self.clock.now()) {
            Ok(valid) => valid,
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    kept_start = ?self.range.start,
                    kept_end = ?self.range.end,
                    "Rejected date range, keeping previous selection"
                );
                self.notifier.notify(&error);
                self.validation_error = Some(error.clone());
                return Err(error);
            }
        };

        self.validation_error = None;

        let Some(valid) = valid else {
            tracing::debug!("Incomplete date range selected, nothing to fetch");
            self.range = range;
            return Ok(None);
        };

        if self.range == range {
            tracing::debug!(range = %valid, "Range already selected, not refetching");
            return Ok(None);
        }

        self.range = range;
        Ok(Some(self.issue(valid)))
    }

    /// Issues a new request for the range in effect, if it is complete
    ///
    /// The range is revalidated against the clock first.
    pub fn refresh(&mut self) -> Result<Option<FetchRequest>, RangeError> {
        match self.range.validate(self.clock.now()) {
            Ok(Some(valid)) => Ok(Some(self.issue(valid))),
            Ok(None) => Ok(None),
            Err(error) => {
                self.notifier.notify(&error);
                self.validation_error = Some(error.clone());
                Err(error)
            }
        }
    }

    fn issue(&mut self, range: ValidRange) -> FetchRequest {
        self.loading = true;
        self.requests_issued += 1;
        tracing::debug!(
            range = %range,
            requests_issued = self.requests_issued,
            "Issuing order-test request"
        );
        FetchRequest {
            range,
            source: Arc::clone(&self.source),
        }
    }

    /// Applies the outcome of a request
    ///
    /// A successful outcome replaces the record set entirely. A failed one
    /// is logged and leaves the previous records in place. Either way the
    /// loading flag is cleared.
    pub fn apply(&mut self, outcome: FetchOutcome) -> DisplayState {
        if outcome.range.as_range() != self.range {
            tracing::debug!(
                outcome_range = %outcome.range,
                "Applying outcome for a range that is no longer selected"
            );
        }

        match outcome.result {
            Ok(records) => {
                tracing::info!(
                    range = %outcome.range,
                    count = records.len(),
                    "Order tests loaded"
                );
                self.records = records;
                self.last_fetch_error = None;
                if self.reset_on_new_data {
                    self.paginator.reset();
                }
            }
            Err(error) => {
                log_error_with_context!(
                    &error,
                    format!("Order-test fetch for {} failed, keeping previous records", outcome.range)
                );
                self.last_fetch_error = Some(error);
            }
        }

        self.loading = false;
        self.display_state()
    }

    /// Performs `request` and applies its outcome
    pub async fn fetch(&mut self, request: FetchRequest) -> DisplayState {
        let outcome = request.send().await;
        self.apply(outcome)
    }

    /// Selects `range` and, if that issues a request, waits for it
    pub async fn select_and_fetch(&mut self, range: DateRange) -> Result<DisplayState, RangeError> {
        match self.select_range(range)? {
            Some(request) => Ok(self.fetch(request).await),
            None => Ok(self.display_state()),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.records.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn records(&self) -> &[OrderTestRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error slot for the last rejected range; cleared by the next
    /// accepted selection
    pub fn validation_error(&self) -> Option<&RangeError> {
        self.validation_error.as_ref()
    }

    /// Last fetch failure, cleared by the next successful fetch
    pub fn last_fetch_error(&self) -> Option<&FetchError> {
        self.last_fetch_error.as_ref()
    }

    /// Number of requests issued so far
    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Page control click
    pub fn select_page(&mut self, index: usize) {
        self.paginator.select_page(index);
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_count(&self) -> usize {
        Paginator::page_count(self.records.len())
    }

    /// Records on the current page
    pub fn visible_records(&self) -> &[OrderTestRecord] {
        self.paginator.visible(&self.records)
    }

    /// Table rows for the current page
    pub fn visible_rows(&self) -> Vec<TableRow> {
        TableRenderer::rows(self.visible_records(), self.paginator.first_index())
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        self.paginator.controls(self.records.len())
    }
}
