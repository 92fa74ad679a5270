//! Immutable run configuration sourced from the environment.
//!
//! The job reads everything once at process start into a `RunConfig` value and
//! passes it explicitly to each stage. Nothing here is mutated afterwards, and
//! no stage reads the environment on its own.
use std::env;

use crate::error::JobError;
use crate::result::Result;

/// Default SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Default number of rows per exchange table.
pub const DEFAULT_TOP_N: usize = 10;
/// Default log filter when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Everything the job needs for one run, loaded once from the environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Mail relay hostname.
    pub smtp_host: String,
    /// Mail relay submission port.
    pub smtp_port: u16,
    /// Relay login name.
    pub smtp_user: String,
    /// Relay password.
    pub smtp_pass: String,
    /// Sender address; falls back to `smtp_user` when unset.
    pub from_email: String,
    /// Recipient addresses, parsed from a comma-separated list.
    pub to_emails: Vec<String>,
    /// Number of rows per exchange table.
    pub top_n: usize,
    /// Whether the market-hours gate is enforced.
    pub enforce_market_hours: bool,
    /// Log filter string, e.g. `INFO` or `debug`.
    pub log_level: String,
}

impl RunConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixture map so
    /// they never touch the process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let smtp_host = get("SMTP_HOST").unwrap_or_default();
        let smtp_port = match get("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| JobError::Config(format!("SMTP_PORT is not a valid port: {}", e)))?,
            None => DEFAULT_SMTP_PORT,
        };
        let smtp_user = get("SMTP_USER").unwrap_or_default();
        let smtp_pass = get("SMTP_PASS").unwrap_or_default();
        let from_email = get("FROM_EMAIL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| smtp_user.clone());
        let to_emails = split_addresses(&get("TO_EMAILS").unwrap_or_default());
        let top_n = match get("TOP_N") {
            Some(raw) => {
                let n = raw.trim().parse::<usize>().map_err(|e| {
                    JobError::Config(format!("TOP_N is not a valid count: {}", e))
                })?;
                if n == 0 {
                    return Err(JobError::Config("TOP_N must be positive".to_string()));
                }
                n
            }
            None => DEFAULT_TOP_N,
        };
        let enforce_market_hours = get("ENFORCE_MARKET_HOURS")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(true);
        let log_level = get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(RunConfig {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            from_email,
            to_emails,
            top_n,
            enforce_market_hours,
            log_level,
        })
    }
}

/// Split a comma-separated address list, trimming whitespace and dropping empties.
fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepted truthy forms: `1`, `true`, `yes`, `y` (case-insensitive).
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}
