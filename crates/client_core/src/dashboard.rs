//! Filter and pagination state for the launch dashboard.
//!
//! Every mutation is a reducer that returns the fetches it makes necessary.
//! Requests carry a generation number and [`DashboardState::apply`] drops any
//! outcome that is not from the newest generation of its kind.

use shared::{
    domain::{FilterField, FilterOptions, LaunchRecord, YearlyCount},
    protocol::{Endpoint, QueryParams, QueryValue, PAGE_SIZE},
};
use tracing::debug;

use crate::view::table::Pagination;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filters {
    pub since: String,
    pub until: String,
    pub agency: String,
    pub state: String,
    pub lv_type: String,
    pub site: String,
}

impl Filters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Since => &self.since,
            FilterField::Until => &self.until,
            FilterField::Agency => &self.agency,
            FilterField::State => &self.state,
            FilterField::LvType => &self.lv_type,
            FilterField::Site => &self.site,
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Since => &mut self.since,
            FilterField::Until => &mut self.until,
            FilterField::Agency => &mut self.agency,
            FilterField::State => &mut self.state,
            FilterField::LvType => &mut self.lv_type,
            FilterField::Site => &mut self.site,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn query_params(&self) -> QueryParams {
        FilterField::ALL
            .iter()
            .map(|field| {
                (
                    field.query_key(),
                    Some(QueryValue::from(self.get(*field))),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    FilterOptions,
    AttemptsCount { generation: u64, params: QueryParams },
    AttemptsByYear { generation: u64, params: QueryParams },
    LaunchPage { generation: u64, params: QueryParams },
}

impl FetchRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchRequest::FilterOptions => Endpoint::FilterOptions,
            FetchRequest::AttemptsCount { .. } => Endpoint::OrbitalAttempts,
            FetchRequest::AttemptsByYear { .. } => Endpoint::AttemptsByYear,
            FetchRequest::LaunchPage { .. } => Endpoint::Launches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    FilterOptions(FilterOptions),
    AttemptsCount { generation: u64, count: u64 },
    AttemptsByYear { generation: u64, years: Vec<YearlyCount> },
    LaunchPage { generation: u64, rows: Vec<LaunchRecord> },
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    filters: Filters,
    offset: u32,
    query_params: QueryParams,
    query_generation: u64,
    page_generation: u64,
    filter_options: FilterOptions,
    attempts: u64,
    attempts_by_year: Vec<YearlyCount>,
    launches: Vec<LaunchRecord>,
}

impl DashboardState {
    pub fn new() -> Self {
        let filters = Filters::default();
        Self {
            query_params: filters.query_params(),
            filters,
            offset: 0,
            query_generation: 0,
            page_generation: 0,
            filter_options: FilterOptions::default(),
            attempts: 0,
            attempts_by_year: Vec::new(),
            launches: Vec::new(),
        }
    }

    /// Initial fetches: filter options once, then stats and the first page.
    pub fn mount(&mut self) -> Vec<FetchRequest> {
        self.query_generation += 1;
        self.page_generation += 1;
        let mut requests = vec![FetchRequest::FilterOptions];
        requests.extend(self.stats_requests());
        requests.push(self.page_request());
        requests
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> Vec<FetchRequest> {
        let value = value.into();
        let slot = self.filters.slot_mut(field);
        if *slot == value {
            return Vec::new();
        }
        *slot = value;
        self.filters_changed()
    }

    pub fn reset_filters(&mut self) -> Vec<FetchRequest> {
        if self.filters.is_empty() {
            return self.set_offset(0);
        }
        self.filters = Filters::default();
        self.filters_changed()
    }

    /// Moves to the page containing `offset`, rounded down to a page boundary.
    pub fn set_offset(&mut self, offset: u32) -> Vec<FetchRequest> {
        let offset = offset - offset % PAGE_SIZE;
        if offset == self.offset {
            return Vec::new();
        }
        self.offset = offset;
        self.page_generation += 1;
        vec![self.page_request()]
    }

    pub fn next_page(&mut self) -> Vec<FetchRequest> {
        if !self.pagination().has_next() {
            return Vec::new();
        }
        self.set_offset(self.offset.saturating_add(PAGE_SIZE))
    }

    pub fn previous_page(&mut self) -> Vec<FetchRequest> {
        self.set_offset(self.offset.saturating_sub(PAGE_SIZE))
    }

    fn filters_changed(&mut self) -> Vec<FetchRequest> {
        self.offset = 0;
        self.query_params = self.filters.query_params();
        self.query_generation += 1;
        self.page_generation += 1;
        let mut requests = Vec::from(self.stats_requests());
        requests.push(self.page_request());
        requests
    }

    fn stats_requests(&self) -> [FetchRequest; 2] {
        [
            FetchRequest::AttemptsCount {
                generation: self.query_generation,
                params: self.query_params.clone(),
            },
            FetchRequest::AttemptsByYear {
                generation: self.query_generation,
                params: self.query_params.clone(),
            },
        ]
    }

    fn page_request(&self) -> FetchRequest {
        FetchRequest::LaunchPage {
            generation: self.page_generation,
            params: self.page_params(),
        }
    }

    /// Stores `outcome` unless a newer request of the same kind is outstanding.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::FilterOptions(options) => {
                self.filter_options = options;
                true
            }
            FetchOutcome::AttemptsCount { generation, count } => {
                if !self.is_current(Endpoint::OrbitalAttempts, generation, self.query_generation) {
                    return false;
                }
                self.attempts = count;
                true
            }
            FetchOutcome::AttemptsByYear { generation, years } => {
                if !self.is_current(Endpoint::AttemptsByYear, generation, self.query_generation) {
                    return false;
                }
                self.attempts_by_year = years;
                true
            }
            FetchOutcome::LaunchPage { generation, rows } => {
                if !self.is_current(Endpoint::Launches, generation, self.page_generation) {
                    return false;
                }
                self.launches = rows;
                true
            }
        }
    }

    fn is_current(&self, endpoint: Endpoint, generation: u64, latest: u64) -> bool {
        if generation != latest {
            debug!(%endpoint, generation, latest, "discarding stale response");
            return false;
        }
        true
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn page_params(&self) -> QueryParams {
        let mut params = self.query_params.clone();
        params.insert("limit", Some(PAGE_SIZE.into()));
        params.insert("offset", Some(self.offset.into()));
        params
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn attempts_by_year(&self) -> &[YearlyCount] {
        &self.attempts_by_year
    }

    pub fn launches(&self) -> &[LaunchRecord] {
        &self.launches
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.launches.len())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
