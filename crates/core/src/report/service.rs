//! Report rollup service.

use std::collections::HashMap;

use super::types::{CompletionReport, CompletionSummary, DriverOrderCounts, DriverRow};

/// Service for building the driver completion report.
pub struct ReportService;

impl ReportService {
    /// Builds the completion report from ordered per-driver counts.
    ///
    /// Single pass: each driver row is formatted, its join keys stripped,
    /// and its counts accumulated into the terminal bucket (keyed by
    /// terminal name, created on first sight) and the grand total.
    /// Percentages are computed once at the end of the pass; the running
    /// totals make the result identical to recomputing per row.
    #[must_use]
    pub fn build_completion_report(counts: Vec<DriverOrderCounts>) -> CompletionReport {
        let mut rows = Vec::with_capacity(counts.len());
        let mut by_terminal: Vec<CompletionSummary> = Vec::new();
        let mut terminal_index: HashMap<String, usize> = HashMap::new();
        let mut total = CompletionSummary::named("Total");

        for driver in counts {
            let completion_percentage =
                format_completion_percentage(driver.complete_count, driver.noncomplete_count);

            let bucket_index = *terminal_index
                .entry(driver.terminal_name.clone())
                .or_insert_with(|| {
                    by_terminal.push(CompletionSummary::named(driver.terminal_name.clone()));
                    by_terminal.len() - 1
                });
            accumulate(
                &mut by_terminal[bucket_index],
                driver.noncomplete_count,
                driver.complete_count,
            );
            accumulate(&mut total, driver.noncomplete_count, driver.complete_count);

            rows.push(DriverRow {
                terminal_name: driver.terminal_name,
                driver_no: driver.driver_no,
                last_name: driver.last_name,
                first_name: driver.first_name,
                noncomplete_count: driver.noncomplete_count,
                complete_count: driver.complete_count,
                completion_percentage,
            });
        }

        for bucket in &mut by_terminal {
            set_percent_complete(bucket);
        }
        set_percent_complete(&mut total);

        CompletionReport {
            rows,
            by_terminal,
            total,
        }
    }
}

/// Orders rows by the identity tuple and collapses duplicate identities.
///
/// Mirrors the query's GROUP BY / ORDER BY so the rollup always sees a
/// sorted, de-duplicated sequence regardless of how the rows were produced.
#[must_use]
pub fn sort_and_collapse(mut counts: Vec<DriverOrderCounts>) -> Vec<DriverOrderCounts> {
    counts.sort_by(|a, b| a.identity_key().cmp(&b.identity_key()));
    counts.dedup_by(|a, b| a.identity_key() == b.identity_key());
    counts
}

/// Formats a driver's completion percentage.
///
/// `round(complete / (complete + noncomplete) * 100, 2)` with a trailing
/// `%`, printed with at least one decimal place (`40.0%`, `33.33%`). The
/// literal `0%` when both counts are zero, which also avoids dividing by
/// zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_completion_percentage(complete: u64, noncomplete: u64) -> String {
    let denominator = complete + noncomplete;
    if denominator == 0 {
        return "0%".to_string();
    }
    let percentage = round2(complete as f64 / denominator as f64 * 100.0);
    if percentage.fract() == 0.0 {
        format!("{percentage:.1}%")
    } else {
        format!("{percentage}%")
    }
}

fn accumulate(summary: &mut CompletionSummary, noncomplete: u64, complete: u64) {
    summary.active += noncomplete;
    summary.complete += complete;
    summary.total += noncomplete + complete;
}

#[allow(clippy::cast_precision_loss)]
fn set_percent_complete(summary: &mut CompletionSummary) {
    if summary.total > 0 {
        summary.percent_complete =
            round2(summary.complete as f64 / summary.total as f64 * 100.0);
    }
}

// Ties round to even so exact .xx5 halves match the legacy report
// (1/32 -> 3.12, not 3.13).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
