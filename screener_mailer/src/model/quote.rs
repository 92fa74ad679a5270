//! Screener response models and the ranked row type.
//!
//! The screener endpoint wraps its payload as `finance.result[0].quotes`; any
//! missing level of that path decodes to "no quotes" rather than an error.
//! Numeric quote fields are decoded leniently: a value of the wrong JSON type
//! becomes `None` instead of failing the whole response.
use serde::{Deserialize, Deserializer};

/// One raw quote record as returned by the screener.
///
/// Every field is optional; the provider omits fields freely and occasionally
/// changes their types, so nothing here is allowed to fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Ticker symbol including the exchange suffix (e.g. `TCS.NS`).
    #[serde(default)]
    pub symbol: Option<String>,
    /// Short display name.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Long display name, used when the short name is absent.
    #[serde(default)]
    pub long_name: Option<String>,
    /// Volume traded in the current session.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub regular_market_volume: Option<f64>,
    /// Three-month average daily volume, the fallback volume source.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_daily_volume3_month: Option<f64>,
    /// Last traded price.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub regular_market_price: Option<f64>,
    /// Absolute price change for the session.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub regular_market_change: Option<f64>,
    /// Percentage price change for the session.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub regular_market_change_percent: Option<f64>,
}

/// Top-level screener response wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct ScreenerResponse {
    /// The `finance` envelope; absent on malformed responses.
    #[serde(default)]
    pub finance: Option<Finance>,
}

/// The `finance` envelope holding result pages.
#[derive(Debug, Default, Deserialize)]
pub struct Finance {
    /// Result pages; the job only ever requests one.
    #[serde(default)]
    pub result: Option<Vec<ScreenerResult>>,
}

/// One result page with its quote list.
#[derive(Debug, Default, Deserialize)]
pub struct ScreenerResult {
    /// The quote records of this page.
    #[serde(default)]
    pub quotes: Option<Vec<RawQuote>>,
}

impl ScreenerResponse {
    /// Extract `finance.result[0].quotes`, degrading to an empty vec when any
    /// level of the path is missing.
    pub fn into_quotes(self) -> Vec<RawQuote> {
        self.finance
            .and_then(|finance| finance.result)
            .and_then(|mut pages| {
                if pages.is_empty() {
                    None
                } else {
                    Some(pages.swap_remove(0))
                }
            })
            .and_then(|page| page.quotes)
            .unwrap_or_default()
    }
}

/// One row of a per-exchange ranking, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedQuote {
    /// Ticker symbol including the exchange suffix.
    pub symbol: String,
    /// Display name resolved from short name, long name, or the symbol.
    pub name: String,
    /// Computed session volume; 0 when the provider reports none.
    pub volume: u64,
    /// Last traded price; `None` means "no data", not zero.
    pub price: Option<f64>,
    /// Absolute price change; `None` means "no data", not zero.
    pub change: Option<f64>,
    /// Percentage price change; `None` means "no data", not zero.
    pub change_pct: Option<f64>,
}

/// Decode any JSON value, keeping it only if it is numeric.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_path_yields_quotes() {
        let body = r#"{
            "finance": { "result": [ { "quotes": [
                { "symbol": "TCS.NS", "regularMarketVolume": 500 }
            ] } ] }
        }"#;
        let response: ScreenerResponse = serde_json::from_str(body).unwrap();
        let quotes = response.into_quotes();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol.as_deref(), Some("TCS.NS"));
        assert_eq!(quotes[0].regular_market_volume, Some(500.0));
    }

    #[test]
    fn missing_path_levels_degrade_to_empty() {
        for body in [
            "{}",
            r#"{ "finance": null }"#,
            r#"{ "finance": {} }"#,
            r#"{ "finance": { "result": [] } }"#,
            r#"{ "finance": { "result": [ {} ] } }"#,
        ] {
            let response: ScreenerResponse = serde_json::from_str(body).unwrap();
            assert!(response.into_quotes().is_empty(), "body: {}", body);
        }
    }

    #[test]
    fn non_numeric_fields_become_none() {
        let body = r#"{
            "symbol": "INFY.NS",
            "regularMarketVolume": "a lot",
            "regularMarketPrice": null,
            "regularMarketChange": {"raw": 1.0}
        }"#;
        let quote: RawQuote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.regular_market_volume, None);
        assert_eq!(quote.regular_market_price, None);
        assert_eq!(quote.regular_market_change, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{ "symbol": "X.BO", "marketCap": 123, "currency": "INR" }"#;
        let quote: RawQuote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.symbol.as_deref(), Some("X.BO"));
    }
}
