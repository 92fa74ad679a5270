//! Screener Mailer — a one-shot batch job that emails the most-active NSE and
//! BSE stocks ranked by traded volume.
//!
//! One invocation performs one linear run, each stage gating the next:
//!
//! 1. Market-hours gate — current UTC time translated to IST (fixed +05:30
//!    offset); outside Mon-Fri 09:15-15:30 the run logs and exits cleanly.
//! 2. Fetch — one page of most-active Indian equities from the Yahoo
//!    screener, with bounded linear-backoff retries. Exhaustion degrades to
//!    "nothing to report", never an error.
//! 3. Rank — the page is partitioned by ticker suffix (`.NS` / `.BO`), each
//!    partition sorted by volume descending and truncated to the top N.
//! 4. Render — both rankings become one fixed HTML document.
//! 5. Dispatch — the document is submitted over an authenticated STARTTLS
//!    SMTP session. This is the only stage whose failure fails the run.
//!
//! All configuration comes from the environment (`SMTP_*`, `FROM_EMAIL`,
//! `TO_EMAILS`, `TOP_N`, `ENFORCE_MARKET_HOURS`, `LOG_LEVEL`), loaded once
//! into an immutable `RunConfig` and passed explicitly to each stage.
//!
//! Usage example (CLI):
//! ```bash
//! SMTP_HOST=smtp.example.com SMTP_USER=bot@example.com SMTP_PASS=... \
//! TO_EMAILS=alerts@example.com screener_mailer
//! ```
//!
//! `--dry-run` prints the rendered HTML to stdout instead of sending mail.
//!
//! Known limitation: two overlapping invocations can send duplicate emails;
//! serializing runs is the external scheduler's responsibility.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod mailer;
mod market_hours;
mod model;
mod ranker;
mod report;

use clap::Parser;
use log::{info, warn};
use screener_common::{Exchange, JobError, Result, RunConfig};

use crate::args::Args;
use crate::fetcher::ScreenerClient;

/// Retry budget for the screener fetch.
const FETCH_RETRIES: u32 = 3;
/// Per-attempt HTTP timeout in seconds.
const FETCH_TIMEOUT_SECS: u64 = 15;
/// Floor for the screener page size, so per-exchange filtering still leaves
/// enough candidates.
const MIN_FETCH_SIZE: usize = 60;

fn main() -> Result<(), JobError> {
    let args = Args::parse();
    let config = RunConfig::from_env()?;
    init_logger(&config.log_level);

    let now = market_hours::now_ist();
    let ist_label = now.format("%Y-%m-%d %H:%M").to_string();
    if config.enforce_market_hours && !market_hours::is_market_open(now) {
        info!(
            "Outside Indian market hours. Skipping send. Now IST: {}",
            ist_label
        );
        return Ok(());
    }

    let client = ScreenerClient::new(FETCH_RETRIES, FETCH_TIMEOUT_SECS)?;
    let size = (config.top_n * 6).max(MIN_FETCH_SIZE);
    let quotes = client.fetch_most_active(size);
    if quotes.is_empty() {
        warn!("No quotes fetched; aborting email.");
        return Ok(());
    }

    let nse = ranker::select_top(&quotes, Exchange::Nse, config.top_n);
    let bse = ranker::select_top(&quotes, Exchange::Bse, config.top_n);

    let html = report::render(&ist_label, &nse, &bse);
    let subject = report::subject(config.top_n, &ist_label);

    if args.dry_run {
        info!("Dry run; printing the report instead of sending.");
        println!("{}", html);
        return Ok(());
    }

    mailer::send_report(&config, &subject, &html)
}

/// Initialize env_logger with the configured level; `RUST_LOG` still wins.
fn init_logger(level: &str) {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_filters(level)
        .parse_default_env()
        .init();
}
