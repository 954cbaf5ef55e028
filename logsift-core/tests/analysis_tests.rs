// logsift-core/tests/analysis_tests.rs
use anyhow::Result;

use logsift_core::{
    analyze, extract_errors, ErrorRecord, GroupStats, KeywordClassifier, LogCapture, LogHeader,
    LogRecord,
};

/// Builds a raw record with the given severity, origin, and message.
fn record(level: &str, tag: &str, process: &str, message: &str) -> LogRecord {
    LogRecord {
        header: LogHeader {
            log_level: level.to_string(),
            tag: tag.to_string(),
            process_name: process.to_string(),
            ..Default::default()
        },
        message: message.to_string(),
    }
}

/// Builds an already-extracted error record carrying only a message.
fn error_with_message(message: &str) -> ErrorRecord {
    ErrorRecord {
        message: message.to_string(),
        ..Default::default()
    }
}

// --- Extraction ---

#[test]
fn test_extraction_keeps_exactly_the_error_records() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "A", "p1", "one"),
            record("INFO", "A", "p1", "two"),
            record("WARN", "B", "p2", "three"),
            record("ERROR", "B", "p2", "four"),
            record("DEBUG", "C", "p3", "five"),
        ],
    };

    let errors = extract_errors(&capture);
    let expected = capture
        .records
        .iter()
        .filter(|r| r.header.log_level == "ERROR")
        .count();
    assert_eq!(errors.len(), expected);
    assert_eq!(errors.len(), 2);
    assert!(errors.len() <= capture.records.len());
}

#[test]
fn test_extraction_is_case_sensitive() {
    let capture = LogCapture {
        records: vec![
            record("error", "A", "p1", "lower"),
            record("Error", "A", "p1", "mixed"),
            record("", "A", "p1", "absent"),
            record("ERROR", "A", "p1", "exact"),
        ],
    };

    let errors = extract_errors(&capture);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "exact");
}

#[test]
fn test_extraction_preserves_capture_order_and_fields() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "Net", "svc", "first"),
            record("ERROR", "Ui", "app", "second"),
        ],
    };

    let errors = extract_errors(&capture);
    assert_eq!(errors[0].tag, "Net");
    assert_eq!(errors[0].process_name, "svc");
    assert_eq!(errors[0].message, "first");
    assert_eq!(errors[1].message, "second");
}

#[test]
fn test_missing_timestamp_displays_na() {
    let record = error_with_message("anything");
    assert_eq!(record.timestamp_display(), "N/A");
}

// --- Grouping ---

#[test]
fn test_groups_partition_the_error_set() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "A", "p1", "1"),
            record("ERROR", "B", "p2", "2"),
            record("ERROR", "A", "p1", "3"),
            record("ERROR", "", "", "4"),
        ],
    };
    let errors = extract_errors(&capture);

    let by_tag = GroupStats::by_tag(&errors);
    let by_process = GroupStats::by_process(&errors);

    // Sum of member counts equals the error count for both dimensions.
    assert_eq!(by_tag.total_records(), errors.len());
    assert_eq!(by_process.total_records(), errors.len());

    // Each record sits in exactly the group matching its key.
    assert_eq!(by_tag.get("A").unwrap().len(), 2);
    assert_eq!(by_tag.get("B").unwrap().len(), 1);

    // The empty string is a regular key, not a special case.
    assert_eq!(by_tag.get("").unwrap().len(), 1);
    assert_eq!(by_process.get("").unwrap().len(), 1);
}

#[test]
fn test_ranked_orders_by_count_descending() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "rare", "p", "1"),
            record("ERROR", "common", "p", "2"),
            record("ERROR", "common", "p", "3"),
            record("ERROR", "common", "p", "4"),
            record("ERROR", "middling", "p", "5"),
            record("ERROR", "middling", "p", "6"),
        ],
    };
    let errors = extract_errors(&capture);

    let ranked = GroupStats::by_tag(&errors);
    let keys: Vec<&str> = ranked.ranked().iter().map(|g| g.key).collect();
    assert_eq!(keys, vec!["common", "middling", "rare"]);
}

#[test]
fn test_ranked_ties_keep_first_seen_order() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "x", "p", "1"),
            record("ERROR", "y", "p", "2"),
            record("ERROR", "y", "p", "3"),
            record("ERROR", "z", "p", "4"),
            record("ERROR", "x", "p", "5"),
        ],
    };
    let errors = extract_errors(&capture);

    // x and y both hold two records; x's key appeared first in the capture.
    let ranked = GroupStats::by_tag(&errors);
    let keys: Vec<&str> = ranked.ranked().iter().map(|g| g.key).collect();
    assert_eq!(keys, vec!["x", "y", "z"]);
}

#[test]
fn test_group_members_keep_encounter_order() {
    let capture = LogCapture {
        records: vec![
            record("ERROR", "A", "p", "first"),
            record("ERROR", "B", "p", "other"),
            record("ERROR", "A", "p", "second"),
        ],
    };
    let errors = extract_errors(&capture);

    let by_tag = GroupStats::by_tag(&errors);
    let group = by_tag.get("A").unwrap();
    let messages: Vec<&str> = group.records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

// --- Classification ---

#[test]
fn test_classifier_is_case_insensitive_and_deterministic() {
    let classifier = KeywordClassifier::default();

    let lower = error_with_message("Null pointer");
    let upper = error_with_message("NULL POINTER");
    let benign = error_with_message("ok");

    assert!(classifier.is_critical(&lower));
    assert!(classifier.is_critical(&upper));
    assert!(!classifier.is_critical(&benign));

    // Same message, same verdict, every time.
    assert_eq!(classifier.is_critical(&lower), classifier.is_critical(&lower));
}

#[test]
fn test_classifier_matches_substrings_not_whole_words() {
    let classifier = KeywordClassifier::default();
    assert!(classifier.matches_message("failure to bind service"));
    assert!(classifier.matches_message("watchdog timeout reached"));
    assert!(classifier.matches_message("Unhandled RuntimeException in worker"));
    assert!(!classifier.matches_message("all systems nominal"));
}

#[test]
fn test_classifier_accepts_alternative_keyword_sets() -> Result<()> {
    let classifier = KeywordClassifier::new(["anr"])?;
    assert!(classifier.matches_message("ANR in com.example.app"));
    assert!(!classifier.matches_message("Fail to connect"));
    Ok(())
}

#[test]
fn test_criticals_preserve_capture_order() {
    let classifier = KeywordClassifier::default();
    let records = vec![
        error_with_message("crash in renderer"),
        error_with_message("nothing to see"),
        error_with_message("fatal exception"),
    ];

    let criticals = classifier.criticals(&records);
    assert_eq!(criticals.len(), 2);
    assert_eq!(criticals[0].message, "crash in renderer");
    assert_eq!(criticals[1].message, "fatal exception");
}

// --- Rates and the end-to-end scenario ---

#[test]
fn test_error_rate_three_of_ten_is_thirty_percent() {
    let mut records = Vec::new();
    for i in 0..10 {
        let level = if i < 3 { "ERROR" } else { "INFO" };
        records.push(record(level, "t", "p", "m"));
    }
    let analysis = analyze(&LogCapture { records });

    assert_eq!(analysis.total_records, 10);
    assert_eq!(analysis.error_count(), 3);
    assert_eq!(format!("{:.2}", analysis.error_rate_pct()), "30.00");
}

#[test]
fn test_empty_capture_reports_zero_rate_without_fault() {
    let analysis = analyze(&LogCapture::default());
    assert_eq!(analysis.total_records, 0);
    assert_eq!(analysis.error_count(), 0);
    assert_eq!(format!("{:.2}", analysis.error_rate_pct()), "0.00");
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let capture: LogCapture = serde_json::from_str(
        r#"{"logcatMessages": [
            {"header": {"logLevel": "ERROR", "tag": "A", "processName": "p1"}, "message": "Fail to connect"},
            {"header": {"logLevel": "INFO"}, "message": "ok"}
        ]}"#,
    )?;

    let analysis = analyze(&capture);
    assert_eq!(analysis.total_records, 2);
    assert_eq!(analysis.error_count(), 1);
    assert_eq!(format!("{:.2}", analysis.error_rate_pct()), "50.00");

    let by_tag = GroupStats::by_tag(&analysis.error_records);
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag.get("A").unwrap().len(), 1);

    let classifier = KeywordClassifier::default();
    let criticals = classifier.criticals(&analysis.error_records);
    assert_eq!(criticals.len(), 1);
    assert_eq!(criticals[0].message, "Fail to connect");
    Ok(())
}
