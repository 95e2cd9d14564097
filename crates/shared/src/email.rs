//! Email service for sending report emails.
//!
//! Uses `lettre` for SMTP transport.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::EmailConfig;

/// MIME type for xlsx workbook attachments.
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    /// No recipients configured.
    #[error("No recipients configured")]
    NoRecipients,
}

/// Email service for sending report emails.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Sends an HTML email with a spreadsheet attachment to the configured
    /// recipient list.
    ///
    /// # Errors
    ///
    /// Returns an error if no recipients are configured, an address fails to
    /// parse, or the message cannot be built or sent.
    pub async fn send_report(
        &self,
        subject: &str,
        html_body: &str,
        attachment_name: &str,
        attachment_bytes: Vec<u8>,
    ) -> Result<(), EmailError> {
        if self.config.recipients.is_empty() {
            return Err(EmailError::NoRecipients);
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let mut builder = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .subject(subject);

        for recipient in &self.config.recipients {
            builder = builder.to(recipient
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?);
        }

        let xlsx_type = ContentType::parse(XLSX_MIME)
            .map_err(|e| EmailError::BuildError(e.to_string()))?;

        let email = builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(html_body.to_string()))
                    .singlepart(
                        Attachment::new(attachment_name.to_string())
                            .body(attachment_bytes, xlsx_type),
                    ),
            )
            .map_err(|e| EmailError::BuildError(e.to_string()))?;

        let transport = self.create_transport()?;
        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            recipients: vec!["ops@example.com".to_string()],
            ..EmailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_send_report_without_recipients() {
        let service = EmailService::new(EmailConfig::default());
        let result = service
            .send_report("subject", "<p>body</p>", "report.xlsx", vec![])
            .await;
        assert!(matches!(result, Err(EmailError::NoRecipients)));
    }

    #[test]
    fn test_xlsx_mime_parses() {
        assert!(ContentType::parse(XLSX_MIME).is_ok());
    }

    #[test]
    fn test_transport_builds_from_config() {
        let service = EmailService::new(test_config());
        assert!(service.create_transport().is_ok());
    }
}
