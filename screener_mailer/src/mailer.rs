//! SMTP dispatch of the rendered report.
//!
//! The connection is plaintext with a STARTTLS upgrade, then authenticated
//! with the relay credentials. Unlike the fetch stage there is no retry here:
//! a failed submission is the run's failure and propagates to the caller.
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use screener_common::{JobError, Result, RunConfig};

/// Verify every field needed to submit mail before any socket is opened.
fn check_mail_config(config: &RunConfig) -> Result<()> {
    if config.smtp_host.is_empty()
        || config.smtp_user.is_empty()
        || config.smtp_pass.is_empty()
        || config.from_email.is_empty()
        || config.to_emails.is_empty()
    {
        return Err(JobError::Config(
            "Email config missing. Set SMTP_HOST, SMTP_USER, SMTP_PASS, FROM_EMAIL and TO_EMAILS."
                .to_string(),
        ));
    }
    Ok(())
}

/// Send one HTML message with the given subject to all configured recipients.
pub fn send_report(config: &RunConfig, subject: &str, html_body: &str) -> Result<()> {
    check_mail_config(config)?;

    let mut builder = Message::builder()
        .from(config.from_email.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_HTML);
    for recipient in &config.to_emails {
        builder = builder.to(recipient.parse()?);
    }
    let message = builder.body(html_body.to_string())?;

    let credentials = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
    let transport = SmtpTransport::starttls_relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(credentials)
        .build();

    transport.send(&message)?;
    info!("Email sent to: {:?}", config.to_emails);
    Ok(())
}
