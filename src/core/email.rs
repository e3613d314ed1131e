use crate::utils::error::{EtlError, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::path::Path;

/// SMTP submission settings. The password travels to the relay in
/// plaintext over STARTTLS, mirroring the manual reporting flow this
/// replaces; do not reuse these credentials anywhere that matters.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub relay: String,
    pub username: String,
    pub password: String,
}

/// Builds the multipart message: plain-text body plus one file attachment.
pub fn build_report_message(
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
    attachment_path: &Path,
) -> Result<Message> {
    let file_name = attachment_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("report.csv")
        .to_string();
    let content = std::fs::read(attachment_path)?;

    let content_type =
        ContentType::parse("application/octet-stream").map_err(|e| EtlError::ProcessingError {
            message: format!("Invalid attachment content type: {}", e),
        })?;
    let attachment = Attachment::new(file_name).body(content, content_type);

    let message = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .to(to.parse::<Mailbox>()?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(body.to_string()),
                )
                .singlepart(attachment),
        )?;

    Ok(message)
}

/// Sends a report with one attachment through an authenticated STARTTLS
/// session on the submission port.
pub fn send_report(
    smtp: &SmtpSettings,
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
    attachment_path: &Path,
) -> Result<()> {
    let message = build_report_message(from, to, subject, body, attachment_path)?;

    let mailer = SmtpTransport::starttls_relay(&smtp.relay)?
        .credentials(Credentials::new(
            smtp.username.clone(),
            smtp.password.clone(),
        ))
        .build();

    mailer.send(&message)?;
    tracing::info!("Report sent to {}", to);
    Ok(())
}
