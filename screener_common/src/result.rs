//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `JobError`, so functions can simply return `Result<T>`.
use crate::error::JobError;

/// Workspace-wide `Result` alias with `JobError` as the default error.
pub type Result<T, E = JobError> = std::result::Result<T, E>;
