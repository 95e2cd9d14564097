//! Spreadsheet export of the driver completion rows.

pub mod xlsx;

pub use xlsx::{ExportError, SHEET_NAME, export_file_name, write_completion_workbook};
