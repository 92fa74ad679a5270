//! Error types for the screener mail job.
//!
//! The `JobError` enum unifies the failure cases the job can hit: missing or
//! invalid configuration, HTTP transport problems, JSON decoding, and mail
//! building/submission, allowing every stage to propagate a single error type.
use thiserror::Error;

/// Unified error type for the whole job.
#[derive(Error, Debug)]
pub enum JobError {
    /// Missing or invalid configuration value; fatal before any network call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport failure (connect, timeout, body read) via `reqwest`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the screener, with a short body prefix.
    #[error("Unexpected HTTP status: {0}")]
    Status(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed sender or recipient mail address.
    #[error("Mail address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Failure while assembling the outgoing message.
    #[error("Mail build error: {0}")]
    MailBuild(#[from] lettre::error::Error),

    /// SMTP transport failure (connect, STARTTLS, auth, submission).
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
