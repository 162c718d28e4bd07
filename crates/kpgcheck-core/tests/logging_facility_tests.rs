#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use kpgcheck_core::errors::KpgError;
use kpgcheck_core::logging_facility::test_capture::init_test_capture;
use kpgcheck_core::rules::DuplicateNameChecker;
use kpgcheck_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use kpgcheck_core::{
    log_op_end, log_op_error, log_op_start, AmbiguityPolicy, ConsistencyCheck,
    CrossFileComparator, Field, SynonymRegistry,
};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = KpgError::MissingField {
        field: "Scan Add".to_string(),
        entry: 3,
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field("err_code"), Some("ERR_MISSING_FIELD"));
}

#[test]
fn test_checker_logs_start_and_end_with_counts() {
    let capture = init_test_capture();
    let source = "logging_checker_unique_4.htm";
    let records = vec![
        common::channel("North", "Lincoln").with(Field::PttId, "1"),
        common::channel("South", "Lincoln").with(Field::PttId, "2"),
    ];

    DuplicateNameChecker.run(source, &records);

    let events: Vec<_> = capture
        .events_for_op("check_duplicate_names")
        .into_iter()
        .filter(|e| e.field("file") == Some(source) || e.event.as_deref() == Some(EVENT_END))
        .collect();
    let start = events
        .iter()
        .find(|e| e.field("file") == Some(source))
        .expect("start event for this file");
    assert_eq!(start.event.as_deref(), Some(EVENT_START));
    assert_eq!(start.field("record_count"), Some("2"));
    assert!(events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.field("discrepancy_count") == Some("1")));
}

#[test]
fn test_ambiguous_synonym_warns_exactly_once() {
    let capture = init_test_capture();
    let name = "Ambiguous Unique 5";
    let lines = [
        format!(r#""{}" "B5""#, name),
        format!(r#""{}" "C5""#, name),
        format!(r#""{}" "D5""#, name),
    ];

    let registry = SynonymRegistry::from_lines(&lines, AmbiguityPolicy::LastWins).unwrap();

    assert_eq!(registry.warnings().len(), 1);
    let warnings = capture.count_events(|e| e.level == Level::WARN && e.field("name") == Some(name));
    assert_eq!(warnings, 1);
}

#[test]
fn test_comparator_logs_diff_sizes() {
    let capture = init_test_capture();
    let a = vec![common::channel("LogZone6", "Alpha")];
    let b = vec![
        common::channel("LogZone6", "Alpha"),
        common::channel("LogZone6", "Beta"),
    ];

    let diff = CrossFileComparator.compare(&a, &b);

    assert_eq!(diff.added.len(), 1);
    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("compare_files")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("added") == Some("1")
            && e.field("record_count").is_none()
    });
    assert!(found >= 1);
}
