//! Driver completion workbook writer.

use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::report::DriverRow;

/// Name of the single worksheet in the export.
pub const SHEET_NAME: &str = "Driver_Completion";

const HEADERS: [&str; 7] = [
    "Terminal",
    "Driver No",
    "Last Name",
    "First Name",
    "Non-Complete",
    "Complete",
    "Completion %",
];

/// Spreadsheet export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook construction or serialization failed.
    #[error("Workbook error: {0}")]
    Workbook(#[from] XlsxError),
}

/// Writes the driver rows to a single-sheet workbook and returns the xlsx
/// bytes.
#[allow(clippy::cast_possible_truncation)]
pub fn write_completion_workbook(rows: &[DriverRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.terminal_name.as_str())?;
        sheet.write(r, 1, row.driver_no.as_str())?;
        sheet.write(r, 2, row.last_name.as_str())?;
        sheet.write(r, 3, row.first_name.as_str())?;
        sheet.write(r, 4, row.noncomplete_count)?;
        sheet.write(r, 5, row.complete_count)?;
        sheet.write(r, 6, row.completion_percentage.as_str())?;
    }

    sheet.set_column_width(0, 24)?;
    for col in 1u16..=3 {
        sheet.set_column_width(col, 16)?;
    }
    for col in 4u16..=6 {
        sheet.set_column_width(col, 14)?;
    }
    if !rows.is_empty() {
        sheet.set_freeze_panes(1, 0)?;
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

/// File name for the export, timestamped at second granularity.
///
/// Concurrent invocations within the same second collide on this name; the
/// report is a once-a-day operation, so the window is accepted.
#[must_use]
pub fn export_file_name(now: &NaiveDateTime) -> String {
    format!("Driver_Completion_Report_{}.xlsx", now.format("%H_%M_%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_rows() -> Vec<DriverRow> {
        vec![
            DriverRow {
                terminal_name: "North".to_string(),
                driver_no: "D5".to_string(),
                last_name: "Alvarez".to_string(),
                first_name: "Maria".to_string(),
                noncomplete_count: 3,
                complete_count: 2,
                completion_percentage: "40.0%".to_string(),
            },
            DriverRow {
                terminal_name: "South".to_string(),
                driver_no: "D9".to_string(),
                last_name: "Okafor".to_string(),
                first_name: "Chike".to_string(),
                noncomplete_count: 0,
                complete_count: 0,
                completion_percentage: "0%".to_string(),
            },
        ]
    }

    #[test]
    fn test_workbook_bytes_are_xlsx() {
        let bytes = write_completion_workbook(&sample_rows()).expect("workbook write failed");
        assert!(bytes.len() > 4, "xlsx too small");
        // xlsx files are zip containers, so they start with the PK signature
        assert_eq!(bytes[0], 0x50);
        assert_eq!(bytes[1], 0x4B);
    }

    #[test]
    fn test_workbook_with_no_rows() {
        let bytes = write_completion_workbook(&[]).expect("workbook write failed");
        assert_eq!(bytes[0], 0x50);
        assert_eq!(bytes[1], 0x4B);
    }

    #[test]
    fn test_export_file_name_uses_time_of_day() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 3, 7)
            .unwrap();
        assert_eq!(
            export_file_name(&now),
            "Driver_Completion_Report_14_03_07.xlsx"
        );
    }
}
