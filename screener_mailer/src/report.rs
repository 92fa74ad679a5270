//! HTML report rendering.
//!
//! Pure string building; no I/O. The layout is a fixed template: a header
//! with the IST run timestamp, one numbered table per exchange, and an
//! attribution footer. An empty ranking renders a "no data" notice instead of
//! an empty table.
use std::fmt::Write;

use screener_common::Exchange;

use crate::model::quote::RankedQuote;

/// Subject line embedding the run timestamp and the top-N count.
pub fn subject(top_n: usize, ist_label: &str) -> String {
    format!(
        "India Most-Active (Vol) — NSE/BSE Top {} @ {} IST",
        top_n, ist_label
    )
}

/// Render the full HTML document for one run.
pub fn render(ist_label: &str, nse: &[RankedQuote], bse: &[RankedQuote]) -> String {
    format!(
        "<html><body>\
         <p><strong>Top {} Most Active (by volume) — NSE</strong><br/>\
         <em>Run at {} IST</em></p>\
         {}\
         <br/>\
         <p><strong>Top {} Most Active (by volume) — BSE</strong></p>\
         {}\
         <p style=\"color:#666;font-size:12px;\">Source: Yahoo Finance Screener (unofficial).</p>\
         </body></html>",
        nse.len(),
        ist_label,
        table(nse, &Exchange::Nse.title()),
        bse.len(),
        table(bse, &Exchange::Bse.title()),
    )
}

/// One exchange table, or a "no data" notice when the ranking is empty.
fn table(rows: &[RankedQuote], title: &str) -> String {
    if rows.is_empty() {
        return format!("<p>No data for {}.</p>", title);
    }

    let mut out = String::new();
    let _ = write!(
        out,
        "<h3>{}</h3><table border='1' cellspacing='0' cellpadding='6'>",
        title
    );
    out.push_str("<tr><th>#</th><th>Symbol</th><th>Name</th><th>Price</th><th>Δ</th><th>Δ%</th><th>Volume</th></tr>");
    for (index, row) in rows.iter().enumerate() {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            index + 1,
            row.symbol,
            row.name,
            decimal_or_dash(row.price),
            decimal_or_dash(row.change),
            decimal_or_dash(row.change_pct),
            group_thousands(row.volume),
        );
    }
    out.push_str("</table>");
    out
}

/// Two decimal places, or `-` for "no data".
fn decimal_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Group digits with commas: 1234567 -> "1,234,567".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
