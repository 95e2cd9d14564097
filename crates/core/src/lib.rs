//! Core report logic for Dispatch.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies.
//!
//! # Modules
//!
//! - `report` - Driver completion rollup (driver rows, terminal subtotals, grand total)
//! - `export` - Spreadsheet export of the driver rows
//! - `render` - HTML rendering of the report summary

pub mod export;
pub mod render;
pub mod report;
