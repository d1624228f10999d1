//! Client-side search: the match predicate and the input debouncer.
//!
//! Filtering is local and synchronous. The debouncer only limits how often
//! the filtered view is recomputed while the user is typing.

use std::time::{Duration, Instant};

use shared::domain::Employee;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match against first name, last name or role.
///
/// Each field is checked on its own, so a query spanning two fields
/// ("ada love") never matches. A blank query matches everything.
pub fn matches_query(employee: &Employee, query: &str) -> bool {
    if is_blank_query(query) {
        return true;
    }
    field_matches(employee, &query.to_lowercase())
}

fn field_matches(employee: &Employee, needle: &str) -> bool {
    employee.first_name.to_lowercase().contains(needle)
        || employee.last_name.to_lowercase().contains(needle)
        || employee.role.to_lowercase().contains(needle)
}

/// Order-preserving subsequence of `employees` matching `query`.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    if is_blank_query(query) {
        return employees.to_vec();
    }
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| field_matches(employee, &needle))
        .cloned()
        .collect()
}

/// Handle for the one scheduled settle. Dropping or replacing it cancels the
/// settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSettle {
    deadline: Instant,
}

/// Tracks the search box contents and decides when a query has settled.
///
/// The caller drives time explicitly: `input`/`clear` on each edit, `poll`
/// from its event loop. `time_until_settle` tells a frame-driven UI when to
/// wake up next.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    search_term: String,
    pending: Option<PendingSettle>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            search_term: String::new(),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current raw input, echoed back into the text box.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Records an edit. A changed value cancels any pending settle and
    /// schedules a new one `delay` after `now`.
    pub fn input(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.reschedule(now);
    }

    pub fn clear(&mut self, now: Instant) {
        self.input(String::new(), now);
    }

    fn reschedule(&mut self, now: Instant) {
        self.pending = Some(PendingSettle {
            deadline: now + self.delay,
        });
    }

    /// Returns the settled query once its deadline has passed. Each scheduled
    /// settle fires at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(self.search_term.clone())
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn time_until_settle(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }

    /// Drops the pending settle without firing it (teardown).
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("canceled pending search settle");
        }
    }
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
