//!
//! Common types shared by the screener mail job.
//!
//! This crate aggregates:
//! - `error` — unified error type `JobError` used across the workspace.
//! - `result` — handy `Result<T, JobError>` alias.
//! - `config` — immutable run configuration loaded from the environment.
//! - `exchange` — exchange identifiers and their ticker suffixes.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod exchange;
pub mod result;

pub use config::RunConfig;
pub use error::JobError;
pub use exchange::Exchange;
pub use result::Result;
