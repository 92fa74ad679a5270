//! Per-exchange filter, rank, and truncate.
//!
//! Pure transformation from the raw screener page to a `RankedQuote` list for
//! one exchange. Quotes keep their fetch order on volume ties (stable sort),
//! and "no data" price fields stay absent instead of collapsing to zero.
use screener_common::Exchange;

use crate::model::quote::{RankedQuote, RawQuote};

/// Keep quotes with the exchange's ticker suffix, rank them by computed
/// volume descending, and truncate to `top_n` rows.
pub fn select_top(quotes: &[RawQuote], exchange: Exchange, top_n: usize) -> Vec<RankedQuote> {
    let suffix = exchange.suffix();
    let mut rows: Vec<RankedQuote> = quotes
        .iter()
        .filter_map(|quote| {
            let symbol = quote.symbol.as_deref().unwrap_or("");
            if symbol.is_empty() || !symbol.ends_with(suffix) {
                return None;
            }
            Some(RankedQuote {
                symbol: symbol.to_string(),
                name: display_name(quote, symbol),
                volume: computed_volume(quote),
                price: quote.regular_market_price,
                change: quote.regular_market_change,
                change_pct: quote.regular_market_change_percent,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.volume.cmp(&a.volume));
    rows.truncate(top_n);
    rows
}

/// Session volume, falling back to the 3-month average, then 0.
fn computed_volume(quote: &RawQuote) -> u64 {
    quote
        .regular_market_volume
        .or(quote.average_daily_volume3_month)
        .map(|v| if v.is_finite() && v > 0.0 { v as u64 } else { 0 })
        .unwrap_or(0)
}

/// Short name, else long name, else the symbol itself.
fn display_name(quote: &RawQuote, symbol: &str) -> String {
    quote
        .short_name
        .clone()
        .or_else(|| quote.long_name.clone())
        .unwrap_or_else(|| symbol.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, volume: Option<f64>) -> RawQuote {
        RawQuote {
            symbol: Some(symbol.to_string()),
            regular_market_volume: volume,
            ..RawQuote::default()
        }
    }

    #[test]
    fn splits_exchanges_and_ranks_by_volume() {
        let quotes = vec![
            quote("TCS.NS", Some(500.0)),
            quote("INFY.NS", Some(900.0)),
            quote("X.BO", Some(100.0)),
        ];

        let nse = select_top(&quotes, Exchange::Nse, 2);
        assert_eq!(nse.len(), 2);
        assert_eq!(nse[0].symbol, "INFY.NS");
        assert_eq!(nse[0].volume, 900);
        assert_eq!(nse[1].symbol, "TCS.NS");
        assert_eq!(nse[1].volume, 500);

        let bse = select_top(&quotes, Exchange::Bse, 2);
        assert_eq!(bse.len(), 1);
        assert_eq!(bse[0].symbol, "X.BO");
        assert_eq!(bse[0].volume, 100);
    }

    #[test]
    fn truncates_to_top_n() {
        let quotes: Vec<RawQuote> = (0..20)
            .map(|i| quote(&format!("S{}.NS", i), Some(f64::from(i))))
            .collect();
        let ranked = select_top(&quotes, Exchange::Nse, 5);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn output_is_non_increasing_by_volume() {
        let quotes = vec![
            quote("A.NS", Some(10.0)),
            quote("B.NS", Some(700.0)),
            quote("C.NS", None),
            quote("D.NS", Some(700.0)),
            quote("E.NS", Some(40.0)),
        ];
        let ranked = select_top(&quotes, Exchange::Nse, 10);
        for pair in ranked.windows(2) {
            assert!(pair[0].volume >= pair[1].volume);
        }
        // Stable sort keeps fetch order on ties.
        assert_eq!(ranked[0].symbol, "B.NS");
        assert_eq!(ranked[1].symbol, "D.NS");
    }

    #[test]
    fn wrong_suffix_never_appears() {
        let quotes = vec![
            quote("TCS.NS", Some(500.0)),
            quote("X.BO", Some(900.0)),
            quote("AAPL", Some(9000.0)),
        ];
        let nse = select_top(&quotes, Exchange::Nse, 10);
        assert_eq!(nse.len(), 1);
        assert_eq!(nse[0].symbol, "TCS.NS");
    }

    #[test]
    fn missing_symbol_is_dropped() {
        let quotes = vec![
            RawQuote::default(),
            RawQuote {
                symbol: Some(String::new()),
                ..RawQuote::default()
            },
        ];
        assert!(select_top(&quotes, Exchange::Nse, 10).is_empty());
    }

    #[test]
    fn volume_falls_back_to_three_month_average_then_zero() {
        let with_average = RawQuote {
            symbol: Some("A.NS".to_string()),
            average_daily_volume3_month: Some(1234.0),
            ..RawQuote::default()
        };
        let with_neither = quote("B.NS", None);

        let ranked = select_top(&[with_average, with_neither], Exchange::Nse, 10);
        assert_eq!(ranked[0].volume, 1234);
        assert_eq!(ranked[1].volume, 0);
    }

    #[test]
    fn session_volume_wins_over_average() {
        let both = RawQuote {
            symbol: Some("A.NS".to_string()),
            regular_market_volume: Some(50.0),
            average_daily_volume3_month: Some(9999.0),
            ..RawQuote::default()
        };
        let ranked = select_top(&[both], Exchange::Nse, 10);
        assert_eq!(ranked[0].volume, 50);
    }

    #[test]
    fn name_falls_back_to_long_name_then_symbol() {
        let with_short = RawQuote {
            symbol: Some("A.NS".to_string()),
            short_name: Some("Alpha".to_string()),
            long_name: Some("Alpha Industries Ltd".to_string()),
            ..RawQuote::default()
        };
        let with_long = RawQuote {
            symbol: Some("B.NS".to_string()),
            long_name: Some("Beta Industries Ltd".to_string()),
            ..RawQuote::default()
        };
        let bare = quote("C.NS", Some(1.0));

        let ranked = select_top(&[with_short, with_long, bare], Exchange::Nse, 10);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"Alpha"));
        assert!(names.contains(&"Beta Industries Ltd"));
        assert!(names.contains(&"C.NS"));
    }

    #[test]
    fn absent_price_fields_stay_absent() {
        let ranked = select_top(&[quote("A.NS", Some(1.0))], Exchange::Nse, 10);
        assert_eq!(ranked[0].price, None);
        assert_eq!(ranked[0].change, None);
        assert_eq!(ranked[0].change_pct, None);
    }
}
