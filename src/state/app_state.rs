//! Application state and transitions.
//!
//! `AppState` is the root state type: the fetched company list (with
//! its load status) plus the UI state driving the query pipeline. All
//! transitions are pure; the shell calls mutators and re-renders from
//! [`AppState::directory_view`].

use crate::model::{Company, FetchError, FilterCriteria, SortSpec};
use crate::query;
use crate::state::editor::LineEditor;
use std::collections::BTreeSet;

/// Load status of the directory feed.
///
/// One fetch per session: `Loading` until the single result arrives,
/// then `Ready` or `Failed` for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight; show the loading placeholder.
    Loading,
    /// Companies loaded (possibly zero of them).
    Ready,
    /// Fetch failed; terminal for the session, no retry.
    Failed {
        /// Human-readable failure message (status code or error text).
        message: String,
    },
}

/// Which control currently receives text input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal key-action handling.
    #[default]
    Browse,
    /// Typing in the search box; every keystroke re-filters.
    EditSearch(LineEditor),
    /// Typing the minimum-employees number; digits only.
    EditMinEmployees(LineEditor),
}

/// Everything the renderer needs for one frame of the directory:
/// the current page and the data for the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    /// Companies on the current page, filtered and sorted.
    pub items: Vec<Company>,
    /// Total page count for the filtered result (0 when empty).
    pub total_pages: usize,
    /// Current 1-based page number.
    pub current_page: usize,
    /// Distinct industries in the full unfiltered list, sorted.
    pub industries: Vec<String>,
    /// Distinct locations in the full unfiltered list, sorted.
    pub locations: Vec<String>,
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full unfiltered company list (empty until the feed resolves).
    companies: Vec<Company>,
    /// Feed load status.
    load: LoadState,

    // UI state driving the pipeline
    search_query: String,
    filters: FilterCriteria,
    sort: SortSpec,
    current_page: usize,
    page_size: usize,

    /// Which control has text input focus.
    pub mode: InputMode,
    /// Selected row within the current page (TUI affordance only).
    pub selected: usize,
}

impl AppState {
    /// Fresh state: loading, empty query, default filters and sort,
    /// page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            companies: Vec::new(),
            load: LoadState::Loading,
            search_query: String::new(),
            filters: FilterCriteria::default(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size,
            mode: InputMode::Browse,
            selected: 0,
        }
    }

    // ===== Feed =====

    /// Apply the single feed result: `Ready` with the list on success,
    /// `Failed` with the error message otherwise.
    pub fn apply_feed_result(&mut self, result: Result<Vec<Company>, FetchError>) {
        match result {
            Ok(companies) => {
                self.companies = companies;
                self.load = LoadState::Ready;
            }
            Err(error) => {
                self.companies = Vec::new();
                self.load = LoadState::Failed {
                    message: error.to_string(),
                };
            }
        }
    }

    /// Current load status.
    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// The full unfiltered company list.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    // ===== UI state accessors =====

    /// Current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current filter criteria.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Current sort spec.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ===== Mutators =====
    //
    // Changing the result set invalidates the old page position, so
    // search/filter/sort mutations reset the page to 1. `set_page`
    // touches nothing else.

    /// Set the search query; resets the page to 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        self.selected = 0;
    }

    /// Replace the filter criteria; resets the page to 1.
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.filters = criteria;
        self.current_page = 1;
        self.selected = 0;
    }

    /// Set the sort spec; resets the page to 1.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort = spec;
        self.current_page = 1;
        self.selected = 0;
    }

    /// Jump directly to a page. No side effects on query/filters/sort,
    /// and no clamping: the shell disables out-of-range navigation.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.selected = 0;
    }

    /// Restore search, filters, sort, and page to their defaults.
    /// The loaded company list is untouched.
    pub fn reset(&mut self) {
        self.search_query = String::new();
        self.filters = FilterCriteria::default();
        self.sort = SortSpec::default();
        self.current_page = 1;
        self.selected = 0;
    }

    // ===== Presentation boundary =====

    /// Distinct industries in the full unfiltered list, sorted
    /// lexicographically. Used to populate the industry filter options.
    pub fn industries(&self) -> Vec<String> {
        distinct(self.companies.iter().map(|c| c.industry.as_str()))
    }

    /// Distinct locations in the full unfiltered list, sorted
    /// lexicographically.
    pub fn locations(&self) -> Vec<String> {
        distinct(self.companies.iter().map(|c| c.location.as_str()))
    }

    /// Run the pipeline (filter -> sort -> paginate) for the current
    /// UI state and expose the visible page.
    ///
    /// Cheap and side-effect-free, so it is simply re-run after every
    /// mutation rather than cached.
    pub fn directory_view(&self) -> DirectoryView {
        let filtered = query::filter(&self.companies, &self.search_query, &self.filters);
        let sorted = query::sort(&filtered, self.sort);
        let page = query::paginate(&sorted, self.page_size, self.current_page);

        DirectoryView {
            items: page.items,
            total_pages: page.total_pages,
            current_page: self.current_page,
            industries: self.industries(),
            locations: self.locations(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(String::from).collect()
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
