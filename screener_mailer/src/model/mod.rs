//! Data models for screener responses and ranked report rows.
pub mod quote;
