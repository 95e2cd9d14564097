//! HTML rendering of the report summary for the notification email.

pub mod html;

pub use html::render_driver_report;
