//! Tests for the report rollup.

use proptest::prelude::*;

use super::service::{ReportService, format_completion_percentage, sort_and_collapse};
use super::types::DriverOrderCounts;

fn driver(
    terminal_id: i32,
    terminal_name: &str,
    driver_id: i32,
    noncomplete: u64,
    complete: u64,
) -> DriverOrderCounts {
    DriverOrderCounts {
        terminal_id,
        terminal_name: terminal_name.to_string(),
        driver_id,
        driver_no: format!("D{driver_id}"),
        last_name: format!("Last{driver_id}"),
        first_name: format!("First{driver_id}"),
        noncomplete_count: noncomplete,
        complete_count: complete,
    }
}

#[test]
fn test_single_driver_scenario() {
    // Driver at terminal "North" with 3 open and 2 completed orders.
    let report = ReportService::build_completion_report(vec![driver(1, "North", 5, 3, 2)]);

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.noncomplete_count, 3);
    assert_eq!(row.complete_count, 2);
    assert_eq!(row.completion_percentage, "40.0%");

    assert_eq!(report.by_terminal.len(), 1);
    let north = &report.by_terminal[0];
    assert_eq!(north.name, "North");
    assert_eq!(north.active, 3);
    assert_eq!(north.complete, 2);
    assert_eq!(north.total, 5);
    assert!((north.percent_complete - 40.0).abs() < f64::EPSILON);

    assert_eq!(report.total.name, "Total");
    assert_eq!(report.total.total, 5);
    assert!((report.total.percent_complete - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_driver_with_no_orders() {
    let report = ReportService::build_completion_report(vec![driver(1, "North", 5, 0, 0)]);

    assert_eq!(report.rows[0].completion_percentage, "0%");
    let north = &report.by_terminal[0];
    assert_eq!(north.total, 0);
    assert!((north.percent_complete - 0.0).abs() < f64::EPSILON);
    assert!((report.total.percent_complete - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_terminal_buckets_in_first_seen_order() {
    let report = ReportService::build_completion_report(vec![
        driver(2, "South", 1, 1, 0),
        driver(2, "South", 2, 0, 1),
        driver(7, "North", 3, 2, 2),
        driver(9, "West", 4, 0, 0),
    ]);

    let names: Vec<&str> = report.by_terminal.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["South", "North", "West"]);

    let south = &report.by_terminal[0];
    assert_eq!(south.active, 1);
    assert_eq!(south.complete, 1);
    assert_eq!(south.total, 2);
    assert!((south.percent_complete - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_report() {
    let report = ReportService::build_completion_report(vec![]);
    assert!(report.rows.is_empty());
    assert!(report.by_terminal.is_empty());
    assert_eq!(report.total.total, 0);
    assert!((report.total.percent_complete - 0.0).abs() < f64::EPSILON);
}

#[rstest::rstest]
#[case(0, 0, "0%")]
#[case(2, 3, "40.0%")]
#[case(1, 0, "100.0%")]
#[case(1, 2, "33.33%")]
#[case(2, 1, "66.67%")]
#[case(1, 7, "12.5%")]
#[case(1, 31, "3.12%")]
#[case(3, 29, "9.38%")]
fn test_percentage_formatting(
    #[case] complete: u64,
    #[case] noncomplete: u64,
    #[case] expected: &str,
) {
    assert_eq!(format_completion_percentage(complete, noncomplete), expected);
}

#[test]
fn test_sort_and_collapse_orders_by_identity_tuple() {
    let rows = sort_and_collapse(vec![
        driver(7, "North", 3, 0, 0),
        driver(2, "South", 9, 0, 0),
        driver(2, "South", 1, 0, 0),
    ]);

    let ids: Vec<(i32, i32)> = rows.iter().map(|r| (r.terminal_id, r.driver_id)).collect();
    assert_eq!(ids, vec![(2, 1), (2, 9), (7, 3)]);
}

#[test]
fn test_sort_and_collapse_drops_duplicate_identities() {
    let rows = sort_and_collapse(vec![
        driver(1, "North", 5, 3, 2),
        driver(1, "North", 5, 3, 2),
        driver(1, "North", 6, 1, 0),
    ]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].driver_id, 5);
    assert_eq!(rows[1].driver_id, 6);
}

#[test]
fn test_row_serializes_with_legacy_field_names() {
    let report = ReportService::build_completion_report(vec![driver(1, "North", 5, 3, 2)]);
    let json = serde_json::to_value(&report.rows[0]).unwrap();

    assert_eq!(json["terminal_name"], "North");
    assert_eq!(json["noncomplete_count"], 3);
    assert_eq!(json["complete_count"], 2);
    assert_eq!(json["completion_percentage"], "40.0%");
    // Join keys are stripped from the output row.
    assert!(json.get("terminal_id").is_none());
    assert!(json.get("driver_id").is_none());

    let summary = serde_json::to_value(&report.total).unwrap();
    assert_eq!(summary["name"], "Total");
    assert_eq!(summary["active"], 3);
    assert_eq!(summary["complete"], 2);
    assert_eq!(summary["total"], 5);
    assert_eq!(summary["percent_complete"], 40.0);
}

proptest! {
    /// total == active + complete at driver, terminal, and grand-total levels.
    #[test]
    fn test_totals_are_consistent_at_every_level(
        counts in prop::collection::vec((0i32..5, 0i32..50, 0u64..100, 0u64..100), 0..40),
    ) {
        let input: Vec<DriverOrderCounts> = counts
            .iter()
            .map(|&(t, d, nc, c)| driver(t, &format!("Terminal {t}"), d, nc, c))
            .collect();

        let report = ReportService::build_completion_report(sort_and_collapse(input));

        for bucket in &report.by_terminal {
            prop_assert_eq!(bucket.total, bucket.active + bucket.complete);
        }
        prop_assert_eq!(report.total.total, report.total.active + report.total.complete);
    }

    /// Terminal summaries partition the rows exactly: terminal totals sum to
    /// the grand total.
    #[test]
    fn test_terminal_buckets_partition_the_rows(
        counts in prop::collection::vec((0i32..5, 0i32..50, 0u64..100, 0u64..100), 0..40),
    ) {
        let input: Vec<DriverOrderCounts> = counts
            .iter()
            .map(|&(t, d, nc, c)| driver(t, &format!("Terminal {t}"), d, nc, c))
            .collect();

        let report = ReportService::build_completion_report(sort_and_collapse(input));

        let terminal_sum: u64 = report.by_terminal.iter().map(|s| s.total).sum();
        prop_assert_eq!(terminal_sum, report.total.total);

        let row_sum: u64 = report
            .rows
            .iter()
            .map(|r| r.noncomplete_count + r.complete_count)
            .sum();
        prop_assert_eq!(row_sum, report.total.total);
    }

    /// The percentage string is the literal "0%" exactly when both counts
    /// are zero; otherwise it always carries a decimal point and ends in %.
    #[test]
    fn test_percentage_string_shape(complete in 0u64..1000, noncomplete in 0u64..1000) {
        let formatted = format_completion_percentage(complete, noncomplete);
        if complete + noncomplete == 0 {
            prop_assert_eq!(formatted, "0%");
        } else {
            prop_assert!(formatted.ends_with('%'));
            prop_assert!(formatted.contains('.'));
        }
    }

    /// Percent complete stays within [0, 100] and is 0 for empty buckets.
    #[test]
    fn test_percent_complete_bounds(
        counts in prop::collection::vec((0i32..3, 0i32..20, 0u64..100, 0u64..100), 0..20),
    ) {
        let input: Vec<DriverOrderCounts> = counts
            .iter()
            .map(|&(t, d, nc, c)| driver(t, &format!("Terminal {t}"), d, nc, c))
            .collect();

        let report = ReportService::build_completion_report(sort_and_collapse(input));

        for bucket in report.by_terminal.iter().chain(std::iter::once(&report.total)) {
            prop_assert!(bucket.percent_complete >= 0.0);
            prop_assert!(bucket.percent_complete <= 100.0);
            if bucket.total == 0 {
                prop_assert!((bucket.percent_complete - 0.0).abs() < f64::EPSILON);
            }
        }
    }
}
