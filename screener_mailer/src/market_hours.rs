//! Market-hours gate for Indian exchanges.
//!
//! Local time is a fixed UTC+05:30 offset; India has neither daylight saving
//! nor historical offset changes, so no timezone database is involved. The
//! session window is Mon-Fri, 09:15-15:30 inclusive, with no holiday calendar.
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Utc, Weekday};

/// IST offset from UTC, in seconds.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed IST offset.
pub fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is within +-24h")
}

/// Current instant translated to IST.
pub fn now_ist() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist_offset())
}

/// Whether the given IST instant falls inside the trading session.
///
/// Pure function of its argument; the enforcement flag is handled by the
/// caller, not here.
pub fn is_market_open(local: DateTime<FixedOffset>) -> bool {
    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let open = NaiveTime::from_hms_opt(9, 15, 0).expect("valid session open time");
    let close = NaiveTime::from_hms_opt(15, 30, 0).expect("valid session close time");
    let time_of_day = local.time();
    time_of_day >= open && time_of_day <= close
}
