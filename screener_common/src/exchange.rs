//! Exchange identifiers and their ticker suffixes.
//!
//! The screener returns one mixed list; quotes are attributed to an exchange
//! by the suffix of their ticker symbol (`RELIANCE.NS`, `RELIANCE.BO`).
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Exchanges covered by the report.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Exchange {
    /// National Stock Exchange of India.
    #[strum(serialize = "NSE")]
    Nse,
    /// Bombay Stock Exchange.
    #[strum(serialize = "BSE")]
    Bse,
}

impl Exchange {
    /// Ticker suffix identifying the exchange (case-sensitive match).
    pub fn suffix(&self) -> &'static str {
        match self {
            Exchange::Nse => ".NS",
            Exchange::Bse => ".BO",
        }
    }

    /// Table title used in the rendered report, e.g. `NSE (.NS)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self, self.suffix())
    }
}
