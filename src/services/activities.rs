// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activities list controller.
//!
//! Owns the state behind the activities view - filter set, sort, page
//! position, loading flag - and mediates the fetch cycle against the
//! backend:
//! 1. A UI event mutates filter/sort/page state
//! 2. The controller fetches the matching page and total count
//! 3. Derived state (total pages) is recomputed
//! 4. Failures become a single localized error toast
//!
//! Every backend failure is swallowed here after being reported; callers
//! never see structured errors from this type.

use crate::config::FeedConfig;
use crate::debounce::{DebounceToken, Debouncer, SEARCH_DEBOUNCE};
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType, Filters, SortOrder, DEFAULT_SORT_COLUMN};
use crate::notify::{Catalog, EnglishCatalog, MessageKey, Notifier};
use crate::services::api::{ActivitiesApi, ActivityPageQuery};

/// State and fetch orchestration for one activities list view.
///
/// All state lives for exactly as long as the owning view: constructed
/// together, mutated only through these operations, dropped together.
/// Single-task cooperative model - nothing here needs a lock.
pub struct ActivitiesController<A, N> {
    api: A,
    notifier: N,
    catalog: Box<dyn Catalog>,
    user_id: u64,
    num_records: u32,

    // UI-bound state, read directly by the view layer.
    pub activity_types: Vec<ActivityType>,
    pub activities: Vec<Activity>,
    pub user_number_activities: u64,
    /// 1-based page position
    pub page_number: u32,
    pub total_pages: u32,
    pub is_loading: bool,
    pub filters: Filters,
    pub sort_by: String,
    pub sort_order: SortOrder,

    // Request bookkeeping.
    fetch_seq: u64,
    debouncer: Debouncer,
}

impl<A: ActivitiesApi, N: Notifier> ActivitiesController<A, N> {
    /// Create a controller for one view, with the user id and page size
    /// injected rather than read from ambient state.
    pub fn new(config: FeedConfig, api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            catalog: Box::new(EnglishCatalog),
            user_id: config.user_id,
            num_records: config.num_records_per_page,
            activity_types: Vec::new(),
            activities: Vec::new(),
            user_number_activities: 0,
            page_number: 1,
            total_pages: 1,
            is_loading: true,
            filters: Filters::default(),
            sort_by: DEFAULT_SORT_COLUMN.to_string(),
            sort_order: SortOrder::Desc,
            fetch_seq: 0,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// Replace the built-in English catalog with the app's i18n catalog.
    pub fn with_catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Server-configured page size this controller paginates with.
    pub fn num_records(&self) -> u32 {
        self.num_records
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Load the enumerable activity categories for the filter control.
    ///
    /// On failure the previous list (possibly empty) is left untouched.
    pub async fn fetch_activity_types(&mut self) {
        match self.api.activity_types().await {
            Ok(types) => self.activity_types = types,
            Err(e) => self.report(MessageKey::ErrorFailedFetchActivityTypes, &e),
        }
    }

    /// Jump to a page. No bounds check (the pager only renders valid
    /// pages) and no fetch - the view triggers that separately.
    pub fn set_page_number(&mut self, page: u32) {
        self.page_number = page;
    }

    /// Run the fetch cycle under the current filters/sort/page,
    /// optionally overriding the selected type first.
    ///
    /// The loading flag is set for the whole cycle and cleared on every
    /// path, including failure.
    pub async fn update_activities(&mut self, activity_type: Option<String>) {
        if let Some(activity_type) = activity_type {
            self.filters.selected_type = Some(activity_type);
        }

        self.is_loading = true;
        let seq = self.begin_fetch();
        if let Err(e) = self.fetch_activities(seq).await {
            self.report(MessageKey::ErrorFetchingActivities, &e);
        }
        self.is_loading = false;
    }

    /// Reset to the first page and re-fetch. Call whenever a filter
    /// changes.
    pub async fn apply_filters(&mut self) {
        self.page_number = 1;
        self.update_activities(None).await;
    }

    /// Reset every filter and the sort to defaults, then re-fetch from
    /// page 1.
    pub async fn clear_filters(&mut self) {
        self.filters = Filters::default();
        self.sort_by = DEFAULT_SORT_COLUMN.to_string();
        self.sort_order = SortOrder::Desc;
        self.apply_filters().await;
    }

    /// Sort by a column: reselecting the current column flips the
    /// direction, a new column starts descending. The page position is
    /// kept - sorting is not a filter change.
    pub async fn handle_sort(&mut self, column: &str) {
        if self.sort_by == column {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = column.to_string();
            self.sort_order = SortOrder::Desc;
        }
        self.update_activities(None).await;
    }

    /// React to a name-search keystroke.
    ///
    /// Clearing the term fetches immediately from page 1. A non-empty
    /// term waits out a 500 ms quiet period first; a newer keystroke
    /// invalidates this one, so only the trailing call fetches.
    pub async fn perform_name_search(&mut self) {
        if self.filters.name_search.is_empty() {
            self.page_number = 1;
            self.apply_filters().await;
            return;
        }

        let token = self.debouncer.arm();
        self.finish_name_search(token).await;
    }

    /// Tail of a debounced search: wait out the quiet period, then fetch
    /// unless a newer keystroke invalidated `token` in the meantime.
    async fn finish_name_search(&mut self, token: DebounceToken) {
        if !self.debouncer.wait(token).await {
            tracing::trace!("Name search superseded while debouncing");
            return;
        }
        self.apply_filters().await;
    }

    // ─── Fetch cycle ─────────────────────────────────────────────────────

    /// Issue a new fetch sequence number. Responses are applied only if
    /// their sequence number is still the latest when they resolve, so
    /// overlapping fetches can't leave an older result on screen.
    fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Clear the list, fetch the page and the total count, derive the
    /// page count.
    ///
    /// The two calls share one filter set captured up front; a filter
    /// change landing between them affects only the next cycle
    /// (accepted eventual consistency within one cycle). On error the
    /// list stays empty.
    async fn fetch_activities(&mut self, seq: u64) -> Result<()> {
        self.activities.clear();

        let filters = self.filters.clone();
        tracing::debug!(
            user_id = self.user_id,
            page = self.page_number,
            sort_by = %self.sort_by,
            sort_order = self.sort_order.as_str(),
            "Fetching activities page"
        );

        let page = self
            .api
            .user_activities_page(ActivityPageQuery {
                user_id: self.user_id,
                page: self.page_number,
                per_page: self.num_records,
                filters: filters.clone(),
                sort_by: self.sort_by.clone(),
                sort_order: self.sort_order,
            })
            .await?;
        let count = self.api.user_activities_count(self.user_id, &filters).await?;

        self.apply_fetch_result(seq, page, count);
        Ok(())
    }

    /// Apply a completed fetch to the view state, unless a newer fetch
    /// was issued while this one was in flight. Returns whether the
    /// result was applied.
    fn apply_fetch_result(&mut self, seq: u64, page: Vec<Activity>, count: u64) -> bool {
        if seq != self.fetch_seq {
            tracing::debug!(seq, latest = self.fetch_seq, "Discarding stale fetch result");
            return false;
        }

        self.activities = page;
        self.user_number_activities = count;
        self.total_pages = pages_for(count, self.num_records);
        true
    }

    /// Single error-reporting path: localize, log, toast, swallow.
    fn report(&self, key: MessageKey, error: &AppError) {
        let message = format!("{} - {}", self.catalog.message(key), error);
        tracing::warn!(error = %error, key = key.as_str(), "Activities fetch failed");
        self.notifier.error(&message);
    }
}

/// Total page count for `count` records at `per_page` records per page.
fn pages_for(count: u64, per_page: u32) -> u32 {
    count.div_ceil(per_page as u64) as u32
}
