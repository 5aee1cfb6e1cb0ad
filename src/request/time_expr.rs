//! Human-readable time expressions.
//!
//! Range parameters (`startTime`, `endTime`) accept the forms below and are
//! converted to epoch milliseconds. Everything is interpreted in UTC.
//!
//! | Form                         | Example                     |
//! |------------------------------|-----------------------------|
//! | keyword                      | `now`, `today`, `yesterday` |
//! | relative past                | `3 days ago`, `15 min ago`  |
//! | relative future              | `in 2 hours`                |
//! | RFC 3339                     | `2023-06-25T18:59:33+09:00` |
//! | date / date-time             | `2023-06-25`, `2023-06-25 18:59:33` |
//! | day, short month, year       | `25 Jun 2023`               |
//! | epoch seconds / milliseconds | `1687690000`, `1687690000000` |

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

use crate::error::ClientError;

/// Bare integers with at most this many digits are epoch seconds.
const MAX_EPOCH_SECONDS_DIGITS: usize = 10;

/// Parse a time expression into epoch milliseconds.
///
/// `now_millis` anchors the relative forms.
///
/// # Errors
///
/// `InvalidTimeFormat` if the expression is empty or matches none of the
/// supported forms.
///
/// # Example
///
/// ```rust
/// use binance_futures_client::request::parse_time_expression;
///
/// let now = 1_687_690_000_000;
/// assert_eq!(parse_time_expression("1 hour ago", now).unwrap(), now as i64 - 3_600_000);
/// assert_eq!(parse_time_expression("2023-06-25", now).unwrap(), 1_687_651_200_000);
/// assert!(parse_time_expression("", now).is_err());
/// ```
pub fn parse_time_expression(expr: &str, now_millis: u64) -> Result<i64, ClientError> {
    let invalid = || ClientError::InvalidTimeFormat(expr.to_string());

    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(millis) = parse_epoch(trimmed) {
        return Ok(millis);
    }

    let now = OffsetDateTime::from_unix_timestamp_nanos(i128::from(now_millis) * 1_000_000)
        .map_err(|_| invalid())?;
    let lower = trimmed.to_ascii_lowercase();

    let parsed = parse_keyword(&lower, now)
        .or_else(|| parse_relative(&lower, now))
        .or_else(|| parse_absolute(trimmed))
        .ok_or_else(invalid)?;

    i64::try_from(parsed.unix_timestamp_nanos() / 1_000_000).map_err(|_| invalid())
}

fn parse_epoch(expr: &str) -> Option<i64> {
    if !expr.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = expr.parse().ok()?;
    if expr.len() <= MAX_EPOCH_SECONDS_DIGITS {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

fn parse_keyword(expr: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
    match expr {
        "now" | "today" => Some(now),
        "yesterday" => now.checked_sub(Duration::DAY),
        "tomorrow" => now.checked_add(Duration::DAY),
        _ => None,
    }
}

fn parse_relative(expr: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let (amount, unit, past) = match tokens.as_slice() {
        [amount, unit, "ago"] => (*amount, *unit, true),
        ["in", amount, unit] => (*amount, *unit, false),
        _ => return None,
    };

    let amount = i64::from(amount.parse::<u32>().ok()?);
    let offset = Duration::seconds(amount.checked_mul(unit_seconds(unit)?)?);
    if past {
        now.checked_sub(offset)
    } else {
        now.checked_add(offset)
    }
}

fn unit_seconds(unit: &str) -> Option<i64> {
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(60),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(3_600),
        "d" | "day" | "days" => Some(86_400),
        "w" | "wk" | "wks" | "week" | "weeks" => Some(604_800),
        _ => None,
    }
}

fn parse_absolute(expr: &str) -> Option<OffsetDateTime> {
    if let Ok(datetime) = OffsetDateTime::parse(expr, &Rfc3339) {
        return Some(datetime);
    }

    let datetime_formats = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ];
    for format in datetime_formats {
        if let Ok(datetime) = PrimitiveDateTime::parse(expr, format) {
            return Some(datetime.assume_utc());
        }
    }

    let date_formats = [
        format_description!("[year]-[month]-[day]"),
        format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]"),
    ];
    for format in date_formats {
        if let Ok(date) = Date::parse(expr, format) {
            return Some(date.midnight().assume_utc());
        }
    }

    None
}
