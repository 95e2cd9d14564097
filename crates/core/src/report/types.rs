//! Report data types.

use serde::{Deserialize, Serialize};

/// Per-driver order counts as returned by the report query.
///
/// Carries the terminal and driver ids as join/sort keys; they are stripped
/// when the row is converted to a [`DriverRow`] for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOrderCounts {
    /// Terminal ID (sort key, not an output field).
    pub terminal_id: i32,
    /// Terminal name.
    pub terminal_name: String,
    /// Driver's employee ID (sort key, not an output field).
    pub driver_id: i32,
    /// Driver number.
    pub driver_no: String,
    /// Driver last name.
    pub last_name: String,
    /// Driver first name.
    pub first_name: String,
    /// Orders still open for the target date.
    pub noncomplete_count: u64,
    /// Orders completed for the target date.
    pub complete_count: u64,
}

impl DriverOrderCounts {
    /// Identity tuple the query groups and orders by.
    #[must_use]
    pub fn identity_key(&self) -> (i32, &str, i32, &str, &str, &str) {
        (
            self.terminal_id,
            &self.terminal_name,
            self.driver_id,
            &self.driver_no,
            &self.last_name,
            &self.first_name,
        )
    }
}

/// Final per-driver output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRow {
    /// Terminal name.
    pub terminal_name: String,
    /// Driver number.
    pub driver_no: String,
    /// Driver last name.
    pub last_name: String,
    /// Driver first name.
    pub first_name: String,
    /// Orders still open for the target date.
    pub noncomplete_count: u64,
    /// Orders completed for the target date.
    pub complete_count: u64,
    /// Completed orders as a percentage of all counted orders, formatted
    /// with a trailing `%`; the literal `0%` when both counts are zero.
    pub completion_percentage: String,
}

/// Accumulated counts for one terminal, or for the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Terminal name, or `Total` for the grand total.
    pub name: String,
    /// Accumulated non-complete count.
    pub active: u64,
    /// Accumulated complete count.
    pub complete: u64,
    /// Accumulated total (`active + complete`).
    pub total: u64,
    /// Percent complete, rounded to 2 decimals; 0 until `total > 0`.
    pub percent_complete: f64,
}

impl CompletionSummary {
    /// Creates an empty summary bucket.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: 0,
            complete: 0,
            total: 0,
            percent_complete: 0.0,
        }
    }
}

/// The assembled driver completion report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Per-driver rows, ordered by the query's identity tuple.
    pub rows: Vec<DriverRow>,
    /// Terminal subtotals in first-seen order.
    pub by_terminal: Vec<CompletionSummary>,
    /// Grand total across all rows.
    pub total: CompletionSummary,
}
