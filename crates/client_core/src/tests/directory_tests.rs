use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use super::*;
use crate::error::{FetchFailureKind, FETCH_FAILURE_FALLBACK};

struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<Employee>, FetchFailure>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<Vec<Employee>, FetchFailure>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeSource for ScriptedSource {
    async fn list_employees(&self) -> Result<Vec<Employee>, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(FetchFailure::transport()))
    }
}

fn pioneers() -> Vec<Employee> {
    vec![
        Employee::new(1, "Ada", "Lovelace", "Engineer"),
        Employee::new(2, "Alan", "Turing", "Scientist"),
    ]
}

#[test]
fn fresh_state_is_loading_without_error() {
    let state = DirectoryState::new();
    assert!(state.is_loading());
    assert_eq!(state.error(), None);
    assert_eq!(state.phase(), DirectoryPhase::Loading);
    assert!(state.employees().is_empty());
}

#[test]
fn successful_load_fills_both_collections() {
    let mut state = DirectoryState::new();
    let ticket = state.begin_load();
    let outcome = state.complete_load(ticket, Ok(pioneers()));

    assert_eq!(outcome, LoadOutcome::Loaded { count: 2 });
    assert_eq!(state.phase(), DirectoryPhase::Ready);
    assert_eq!(state.employees(), pioneers().as_slice());
    assert_eq!(state.filtered_employees(), pioneers().as_slice());
}

#[test]
fn failed_load_keeps_previous_collection() {
    let mut state = DirectoryState::new();
    let first = state.begin_load();
    state.complete_load(first, Ok(pioneers()));
    state.apply_search("turing");

    let second = state.begin_load();
    assert_eq!(state.error(), None);
    let outcome = state.complete_load(second, Err(FetchFailure::transport()));

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(FETCH_FAILURE_FALLBACK));
    assert_eq!(state.employees().len(), 2);
    assert_eq!(state.filtered_employees().len(), 1);
}

#[test]
fn reload_reapplies_active_query() {
    let mut state = DirectoryState::new();
    let first = state.begin_load();
    state.complete_load(first, Ok(pioneers()));
    state.apply_search("ada");

    let second = state.begin_load();
    let mut refreshed = pioneers();
    refreshed.push(Employee::new(3, "Adam", "Osborne", "Researcher"));
    state.complete_load(second, Ok(refreshed));

    let shown: Vec<i64> = state.filtered_employees().iter().map(|e| e.id.0).collect();
    assert_eq!(shown, vec![1, 3]);
    assert_eq!(state.search_query(), "ada");
}

#[test]
fn retry_is_refused_outside_error_state() {
    let mut state = DirectoryState::new();
    assert_eq!(state.begin_retry(), None);

    let ticket = state.begin_load();
    state.complete_load(ticket, Ok(pioneers()));
    assert_eq!(state.begin_retry(), None);
    assert_eq!(state.phase(), DirectoryPhase::Ready);
}

#[test]
fn retry_clears_error_and_enters_loading() {
    let mut state = DirectoryState::new();
    let ticket = state.begin_load();
    state.complete_load(ticket, Err(FetchFailure::transport()));
    assert_eq!(state.phase(), DirectoryPhase::Failed);

    let retry = state.begin_retry().expect("retry allowed");
    assert!(retry > ticket);
    assert_eq!(state.error(), None);
    assert_eq!(state.phase(), DirectoryPhase::Loading);
    assert_eq!(state.begin_retry(), None);
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = DirectoryState::new();
    let slow = state.begin_load();
    let fast = state.begin_load();

    assert_eq!(
        state.complete_load(fast, Ok(pioneers())),
        LoadOutcome::Loaded { count: 2 }
    );
    assert_eq!(
        state.complete_load(slow, Err(FetchFailure::transport())),
        LoadOutcome::Stale
    );
    assert_eq!(state.phase(), DirectoryPhase::Ready);
    assert_eq!(state.employees().len(), 2);
}

#[test]
fn stale_completion_does_not_end_newer_loading() {
    let mut state = DirectoryState::new();
    let slow = state.begin_load();
    let _fast = state.begin_load();

    assert_eq!(state.complete_load(slow, Ok(pioneers())), LoadOutcome::Stale);
    assert!(state.is_loading());
    assert!(state.employees().is_empty());
}

#[test]
fn loading_and_error_are_never_both_set() {
    let mut state = DirectoryState::new();
    let check = |state: &DirectoryState| {
        assert!(!(state.is_loading() && state.error().is_some()));
    };
    check(&state);
    let ticket = state.begin_load();
    check(&state);
    state.complete_load(ticket, Err(FetchFailure::transport()));
    check(&state);
    let ticket = state.begin_retry().expect("retry");
    check(&state);
    state.complete_load(ticket, Ok(Vec::new()));
    check(&state);
}

#[tokio::test]
async fn mount_loads_exactly_once() {
    let mut controller = DirectoryController::new(ScriptedSource::new(vec![Ok(pioneers())]));

    assert_eq!(
        controller.mount().await,
        Some(LoadOutcome::Loaded { count: 2 })
    );
    assert_eq!(controller.mount().await, None);
    assert_eq!(controller.source().calls(), 1);
}

#[tokio::test]
async fn retry_after_failure_issues_one_more_fetch() {
    let mut controller = DirectoryController::new(ScriptedSource::new(vec![
        Err(FetchFailure::from_status(500, br#"{"message":"db down"}"#)),
        Ok(pioneers()),
    ]));

    assert_eq!(controller.mount().await, Some(LoadOutcome::Failed));
    assert_eq!(controller.state().error(), Some("db down"));

    assert_eq!(
        controller.retry().await,
        Some(LoadOutcome::Loaded { count: 2 })
    );
    assert_eq!(controller.source().calls(), 2);
    assert_eq!(controller.state().error(), None);
}

#[tokio::test]
async fn retry_without_error_performs_no_fetch() {
    let mut controller = DirectoryController::new(ScriptedSource::new(vec![Ok(pioneers())]));
    controller.mount().await;

    assert_eq!(controller.retry().await, None);
    assert_eq!(controller.source().calls(), 1);
}

#[tokio::test]
async fn each_load_performs_one_fetch() {
    let mut controller = DirectoryController::new(ScriptedSource::new(vec![
        Ok(pioneers()),
        Err(FetchFailure::new(FetchFailureKind::Decode, "bad payload")),
    ]));

    controller.load().await;
    controller.search("alan");
    assert_eq!(controller.load().await, LoadOutcome::Failed);

    assert_eq!(controller.source().calls(), 2);
    assert_eq!(controller.state().filtered_employees().len(), 1);
    assert_eq!(controller.state().error(), Some("bad payload"));
}
