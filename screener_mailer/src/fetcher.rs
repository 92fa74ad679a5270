//! Screener fetch with bounded retry.
//!
//! One POST per attempt against the Yahoo screener endpoint, asking for the
//! most-active equities in the Indian region sorted by day volume. Failed
//! attempts back off linearly (1.5s, 3.0s, ...). Exhausting all retries is
//! not an error: the fetcher degrades to an empty quote list and leaves the
//! "nothing to report" decision to the caller.
use std::thread;
use std::time::Duration;

use log::warn;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header;
use serde_json::{Value, json};

use screener_common::{JobError, Result};

use crate::model::quote::{RawQuote, ScreenerResponse};

/// Screener endpoint URL.
const SCREENER_URL: &str = "https://query1.finance.yahoo.com/v1/finance/screener";
/// User agent sent with each request; the endpoint rejects the default one.
const USER_AGENT: &str = "Mozilla/5.0";
/// Base delay of the linear backoff; attempt `n` sleeps `n` times this.
const BACKOFF_STEP: Duration = Duration::from_millis(1500);
/// Length of the response body prefix kept in warning logs.
const BODY_LOG_LIMIT: usize = 200;

/// Blocking HTTP client for the screener endpoint.
pub struct ScreenerClient {
    http: Client,
    max_retries: u32,
}

impl ScreenerClient {
    /// Build a client with a fixed per-attempt timeout and retry budget.
    pub fn new(max_retries: u32, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http, max_retries })
    }

    /// Fetch up to `size` most-active equity quotes.
    ///
    /// Returns an empty vec after exhausting retries; never an error.
    pub fn fetch_most_active(&self, size: usize) -> Vec<RawQuote> {
        fetch_with_retry(
            self.max_retries,
            |_| self.attempt(size),
            thread::sleep,
        )
    }

    /// One POST attempt. Non-200 statuses and undecodable bodies are errors;
    /// a well-formed body with a missing quote path is a successful empty page.
    fn attempt(&self, size: usize) -> Result<Vec<RawQuote>> {
        let response = self
            .http
            .post(SCREENER_URL)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/json, text/plain, */*")
            .json(&screener_payload(size))
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(JobError::Status(format!(
                "HTTP {}: {}",
                status,
                body_prefix(&body)
            )));
        }

        let decoded: ScreenerResponse = response.json()?;
        Ok(decoded.into_quotes())
    }
}

/// Request body for the most-active screen: page of `size` equities in the
/// Indian region, sorted by day volume descending.
fn screener_payload(size: usize) -> Value {
    json!({
        "offset": 0,
        "size": size,
        "sortField": "dayvolume",
        "sortType": "DESC",
        "quoteType": "EQUITY",
        "query": {
            "operator": "AND",
            "operands": [
                { "operator": "eq", "operands": ["region", "in"] }
            ]
        }
    })
}

/// Run `attempt_fn` up to `max_retries` times, sleeping a linearly growing
/// delay between attempts via `sleep_fn`.
///
/// The first successful attempt wins. Exhaustion returns an empty vec, which
/// callers must treat as "nothing to report" rather than a fault. Both
/// closures are injected so tests can count attempts and record delays.
fn fetch_with_retry<A, S>(max_retries: u32, mut attempt_fn: A, mut sleep_fn: S) -> Vec<RawQuote>
where
    A: FnMut(u32) -> Result<Vec<RawQuote>>,
    S: FnMut(Duration),
{
    for attempt in 1..=max_retries {
        match attempt_fn(attempt) {
            Ok(quotes) => return quotes,
            Err(e) => warn!("Screener attempt {} failed: {}", attempt, e),
        }
        if attempt < max_retries {
            sleep_fn(BACKOFF_STEP * attempt);
        }
    }
    Vec::new()
}

/// Truncate a response body for logging.
fn body_prefix(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(BODY_LOG_LIMIT)
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    &body[..end]
}
