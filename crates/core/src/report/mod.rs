//! Driver completion report generation.
//!
//! This module provides pure business logic for the daily driver completion
//! report: per-driver order counts roll up into terminal subtotals and a
//! grand total, each with a completion percentage.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::{ReportService, format_completion_percentage, sort_and_collapse};
pub use types::*;
