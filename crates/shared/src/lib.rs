//! Shared configuration, errors, and email transport for Dispatch.
//!
//! This crate provides the pieces used across all other crates:
//! - Layered application configuration
//! - Application-wide error types
//! - SMTP email delivery with attachment support

pub mod config;
pub mod email;
pub mod error;

pub use config::{AppConfig, EmailConfig, ReportConfig};
pub use email::{EmailError, EmailService};
pub use error::{AppError, AppResult};
