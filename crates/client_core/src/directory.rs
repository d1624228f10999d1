//! Directory controller: owns the employee collection and the load/retry
//! lifecycle.
//!
//! `DirectoryState` is the reducer half. It is driven by `begin_load` /
//! `complete_load` pairs so that a UI can run the fetch elsewhere (a worker
//! thread) and feed the result back as an event. `DirectoryController` pairs
//! the state with an injected `EmployeeSource` for callers that can await the
//! fetch inline.
//!
//! # Invariants
//! - `loading` and `error` are never set at the same time.
//! - `filtered_employees` is always `filter_employees(employees, search_query)`.
//! - Only the completion of the most recently issued load may change state.

use shared::domain::Employee;
use tracing::{debug, info, warn};

use crate::{error::FetchFailure, search::filter_employees, EmployeeSource};

/// Sequence number handed out by `begin_load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed,
    /// A newer load was issued before this one finished; nothing changed.
    Stale,
}

/// Coarse lifecycle phase. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryPhase {
    Loading,
    Failed,
    Ready,
}

#[derive(Debug, Clone)]
pub struct DirectoryState {
    employees: Vec<Employee>,
    filtered_employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    search_query: String,
    latest_ticket: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryState {
    /// Mount-time state: nothing loaded yet, loading.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            filtered_employees: Vec::new(),
            loading: true,
            error: None,
            search_query: String::new(),
            latest_ticket: 0,
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        debug!(ticket = self.latest_ticket, "employee load started");
        LoadTicket(self.latest_ticket)
    }

    /// Clears the error and starts a new load. Returns `None` (and changes
    /// nothing) unless the directory is currently in the error state.
    pub fn begin_retry(&mut self) -> Option<LoadTicket> {
        self.error.take()?;
        info!("retrying employee load");
        Some(self.begin_load())
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Employee>, FetchFailure>,
    ) -> LoadOutcome {
        if ticket.0 != self.latest_ticket {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale employee load"
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(employees) => {
                let count = employees.len();
                self.employees = employees;
                self.refilter();
                info!(count, shown = self.filtered_employees.len(), "employees loaded");
                LoadOutcome::Loaded { count }
            }
            Err(failure) => {
                warn!(kind = ?failure.kind(), "employee load failed: {failure}");
                self.error = Some(failure.into_message());
                LoadOutcome::Failed
            }
        }
    }

    /// Commits a settled query and recomputes the visible subset.
    pub fn apply_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refilter();
        debug!(
            query = %self.search_query,
            shown = self.filtered_employees.len(),
            "search applied"
        );
    }

    fn refilter(&mut self) {
        self.filtered_employees = filter_employees(&self.employees, &self.search_query);
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filtered_employees(&self) -> &[Employee] {
        &self.filtered_employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn phase(&self) -> DirectoryPhase {
        if self.loading {
            DirectoryPhase::Loading
        } else if self.error.is_some() {
            DirectoryPhase::Failed
        } else {
            DirectoryPhase::Ready
        }
    }
}

/// Directory state bound to the data source it loads from.
pub struct DirectoryController<S> {
    source: S,
    state: DirectoryState,
    mounted: bool,
}

impl<S: EmployeeSource> DirectoryController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DirectoryState::new(),
            mounted: false,
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the initial load. Later calls do nothing and return `None`.
    pub async fn mount(&mut self) -> Option<LoadOutcome> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.load().await)
    }

    /// One fetch from the source, applied to the state.
    pub async fn load(&mut self) -> LoadOutcome {
        let ticket = self.state.begin_load();
        let result = self.source.list_employees().await;
        self.state.complete_load(ticket, result)
    }

    /// Reloads after a failure. Outside the error state this is a no-op that
    /// returns `None` and performs no fetch.
    pub async fn retry(&mut self) -> Option<LoadOutcome> {
        let ticket = self.state.begin_retry()?;
        let result = self.source.list_employees().await;
        Some(self.state.complete_load(ticket, result))
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.state.apply_search(query);
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
