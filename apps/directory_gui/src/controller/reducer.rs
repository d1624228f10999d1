//! Screen state for the directory window, independent of egui.
//!
//! Combines the directory reducer with the search debouncer and remembers
//! which load is still in flight so plumbing failures can end it.

use std::time::{Duration, Instant};

use client_core::{
    DirectoryState, DirectoryView, FetchFailure, FetchFailureKind, LoadOutcome, LoadTicket,
    SearchDebouncer,
};

use crate::controller::events::{UiError, UiEvent};

pub struct DirectoryScreen {
    directory: DirectoryState,
    search: SearchDebouncer,
    in_flight: Option<LoadTicket>,
    status: String,
}

impl DirectoryScreen {
    pub fn new(debounce: Duration) -> Self {
        Self {
            directory: DirectoryState::new(),
            search: SearchDebouncer::new(debounce),
            in_flight: None,
            status: "Starting...".to_string(),
        }
    }

    /// Starts the initial load. The caller queues the returned ticket.
    pub fn mount(&mut self) -> LoadTicket {
        let ticket = self.directory.begin_load();
        self.in_flight = Some(ticket);
        ticket
    }

    pub fn retry(&mut self) -> Option<LoadTicket> {
        let ticket = self.directory.begin_retry()?;
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::EmployeesLoaded { ticket, result } => {
                match self.directory.complete_load(ticket, result) {
                    LoadOutcome::Stale => return,
                    LoadOutcome::Loaded { count } => {
                        self.status = format!("Loaded {count} employees");
                    }
                    LoadOutcome::Failed => {
                        self.status = "Employee load failed".to_string();
                    }
                }
                self.in_flight = None;
            }
            UiEvent::Error(err) => self.fail_in_flight(&err),
        }
    }

    /// Ends the in-flight load, if any, with a plumbing error so the window
    /// does not spin forever.
    pub fn fail_in_flight(&mut self, err: &UiError) {
        tracing::error!(context = ?err.context(), "desktop plumbing error: {}", err.message());
        self.status = err.user_message();
        if let Some(ticket) = self.in_flight.take() {
            let failure = FetchFailure::new(FetchFailureKind::Transport, err.user_message());
            self.directory.complete_load(ticket, Err(failure));
        }
    }

    pub fn on_search_input(&mut self, term: String, now: Instant) {
        self.search.input(term, now);
    }

    pub fn on_clear(&mut self, now: Instant) {
        self.search.clear(now);
    }

    /// Applies the settled query, if one is due. Returns true when it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(query) => {
                self.directory.apply_search(query);
                true
            }
            None => false,
        }
    }

    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.search.time_until_settle(now)
    }

    pub fn search_term(&self) -> &str {
        self.search.search_term()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView::from_state(&self.directory)
    }

    pub fn teardown(&mut self) {
        self.search.cancel();
    }
}
