//! Driver completion report route.
//!
//! One synchronous report run per request: query, rollup, spreadsheet
//! export, HTML render, email dispatch. Any stage failure is folded into
//! `success = false` with the error's message; rows computed before the
//! failing stage are still returned.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use dispatch_core::export;
use dispatch_core::render;
use dispatch_core::report::{CompletionReport, DriverRow, ReportService};
use dispatch_db::{ReportFilter, ReportRepository};
use dispatch_shared::{AppError, AppResult};

use crate::AppState;

/// Subject line of the report email.
const REPORT_SUBJECT: &str = "Driver Completion Report";

/// Timestamp format shown in the email body.
const REPORT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report", get(run_report).post(run_report))
}

/// Query parameters for the report run.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Driver-type classification (defaults to the configured type).
    pub driver_type: Option<String>,
    /// Target date, ISO formatted (defaults to today).
    pub date: Option<NaiveDate>,
    /// Comma-separated terminal ids.
    pub terminals: Option<String>,
    /// Comma-separated driver numbers.
    pub driver_numbers: Option<String>,
}

/// Response for the report run. Always HTTP 200; `success` carries the
/// outcome.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Per-driver rows (present even when delivery failed).
    pub report: Vec<DriverRow>,
    /// Whether the full run, including delivery, succeeded.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// GET|POST /report
async fn run_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<ReportResponse> {
    let filter = build_filter(&state, &query);

    let report = match compute_report(&state, &filter).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Failed to compute driver report");
            return Json(ReportResponse {
                report: vec![],
                success: false,
                message: e.to_string(),
            });
        }
    };

    let delivery = deliver_report(&state, &report).await;
    match &delivery {
        Ok(()) => {
            info!(rows = report.rows.len(), "Driver report generated and delivered");
        }
        Err(e) => error!(error = %e, "Failed to deliver driver report"),
    }

    Json(fold_outcome(report, delivery))
}

/// Folds the delivery outcome into the response.
///
/// A failed delivery keeps the rows computed before it and carries the
/// error's message with `success = false`.
fn fold_outcome(report: CompletionReport, delivery: AppResult<()>) -> ReportResponse {
    let (success, message) = match delivery {
        Ok(()) => (true, "Driver report generated successfully".to_string()),
        Err(e) => (false, e.to_string()),
    };
    ReportResponse {
        report: report.rows,
        success,
        message,
    }
}

/// Resolves query parameters against the configured defaults.
fn build_filter(state: &AppState, query: &ReportQuery) -> ReportFilter {
    let report_config = &state.config.report;
    ReportFilter {
        driver_type: query
            .driver_type
            .clone()
            .unwrap_or_else(|| report_config.driver_type.clone()),
        target_date: query.date.unwrap_or_else(|| Local::now().date_naive()),
        terminals: query.terminals.as_deref().map(parse_id_list),
        driver_numbers: query.driver_numbers.as_deref().map(parse_name_list),
    }
}

/// Runs the query and the in-memory rollup.
async fn compute_report(state: &AppState, filter: &ReportFilter) -> AppResult<CompletionReport> {
    let repo = ReportRepository::new((*state.db).clone());
    let counts = repo
        .query_driver_counts(filter, &state.config.report)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ReportService::build_completion_report(counts))
}

/// Exports the workbook, renders the HTML summary, and emails both.
async fn deliver_report(state: &AppState, report: &CompletionReport) -> AppResult<()> {
    let now = Local::now().naive_local();

    let workbook = export::write_completion_workbook(&report.rows)
        .map_err(|e| AppError::Export(e.to_string()))?;
    let file_name = export::export_file_name(&now);
    let export_path = std::path::Path::new(&state.config.report.export_dir).join(&file_name);
    tokio::fs::write(&export_path, &workbook)
        .await
        .map_err(|e| AppError::Export(e.to_string()))?;
    info!(path = %export_path.display(), "Wrote driver report workbook");

    let day_of_report = now.format(REPORT_TIMESTAMP_FORMAT).to_string();
    let html = render::render_driver_report(&day_of_report, &report.total, &report.by_terminal);

    state
        .email_service
        .send_report(REPORT_SUBJECT, &html, &file_name, workbook)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(())
}

/// Parses comma-separated integer ids, skipping malformed entries.
fn parse_id_list(s: &str) -> Vec<i32> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Parses a comma-separated string list, dropping empty entries.
fn parse_name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
