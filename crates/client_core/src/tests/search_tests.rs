use super::*;

fn staff() -> Vec<Employee> {
    vec![
        Employee::new(1, "Ada", "Lovelace", "Engineer"),
        Employee::new(2, "Alan", "Turing", "Scientist"),
        Employee::new(3, "Grace", "Hopper", "Rear Admiral"),
        Employee::new(4, "Edsger", "Dijkstra", "Engineer"),
    ]
}

fn ids(employees: &[Employee]) -> Vec<i64> {
    employees.iter().map(|employee| employee.id.0).collect()
}

#[test]
fn predicate_ignores_case_on_every_field() {
    let ada = Employee::new(1, "Ada", "Lovelace", "Engineer");
    for query in ["ADA", "aDa", "LOVE", "lAcE", "gInEe", "ENGINEER"] {
        assert!(matches_query(&ada, query), "query {query:?} should match");
    }
    assert!(!matches_query(&ada, "turing"));
}

#[test]
fn predicate_does_not_match_across_fields() {
    let ada = Employee::new(1, "Ada", "Lovelace", "Engineer");
    assert!(!matches_query(&ada, "ada love"));
    assert!(!matches_query(&ada, "adalovelace"));
}

#[test]
fn query_is_not_trimmed_before_matching() {
    let ada = Employee::new(1, "Ada", "Lovelace", "Engineer");
    assert!(!matches_query(&ada, "ada "));
    assert!(matches_query(&ada, "  "));
}

#[test]
fn blank_query_returns_full_collection_in_order() {
    let employees = staff();
    assert_eq!(filter_employees(&employees, ""), employees);
    assert_eq!(filter_employees(&employees, " \t "), employees);
}

#[test]
fn filtered_output_preserves_source_order() {
    let employees = staff();
    assert_eq!(ids(&filter_employees(&employees, "engineer")), vec![1, 4]);
    assert_eq!(ids(&filter_employees(&employees, "a")), vec![1, 2, 3, 4]);
    assert_eq!(ids(&filter_employees(&employees, "r")), vec![1, 2, 3, 4]);
    assert_eq!(ids(&filter_employees(&employees, "ur")), vec![2]);
}

#[test]
fn filter_on_empty_collection_is_empty() {
    assert!(filter_employees(&[], "ada").is_empty());
    assert!(filter_employees(&[], "").is_empty());
}

#[test]
fn burst_of_edits_settles_once_with_final_value() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();

    debouncer.input("a", start);
    debouncer.input("ad", start + Duration::from_millis(100));
    assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
    debouncer.input("ada", start + Duration::from_millis(250));
    assert_eq!(debouncer.search_term(), "ada");

    assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
    assert_eq!(debouncer.poll(start + Duration::from_millis(549)), None);
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(550)),
        Some("ada".to_string())
    );
    assert_eq!(debouncer.poll(start + Duration::from_millis(2000)), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn unchanged_input_does_not_restart_timer() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();
    debouncer.input("ada", start);
    debouncer.input("ada", start + Duration::from_millis(200));
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(300)),
        Some("ada".to_string())
    );
}

#[test]
fn clear_empties_term_immediately_and_settles_later() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();
    debouncer.input("ada", start);
    assert!(debouncer.poll(start + Duration::from_millis(300)).is_some());

    let cleared_at = start + Duration::from_millis(1000);
    debouncer.clear(cleared_at);
    assert_eq!(debouncer.search_term(), "");
    assert_eq!(debouncer.poll(cleared_at + Duration::from_millis(10)), None);
    assert_eq!(
        debouncer.poll(cleared_at + DEFAULT_DEBOUNCE),
        Some(String::new())
    );
}

#[test]
fn reports_remaining_time_until_settle() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::new(Duration::from_millis(500));
    assert_eq!(debouncer.time_until_settle(start), None);
    debouncer.input("x", start);
    assert_eq!(
        debouncer.time_until_settle(start + Duration::from_millis(200)),
        Some(Duration::from_millis(300))
    );
    assert_eq!(
        debouncer.time_until_settle(start + Duration::from_millis(900)),
        Some(Duration::ZERO)
    );
}

#[test]
fn cancel_drops_pending_settle() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();
    debouncer.input("grace", start);
    debouncer.cancel();
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    assert_eq!(debouncer.search_term(), "grace");
}
