use crate::utils::error::{Result, UtilsError};
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// 年份必須是四位數字
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\z").expect("valid date regex"));

/// Parse a `YYYY-MM-DD` string. The year must have exactly four digits;
/// single-digit months and days are accepted.
pub fn parse_date(date_string: &str) -> Result<NaiveDate> {
    let format_error = || UtilsError::DateFormatError {
        value: date_string.to_string(),
    };

    if !DATE_SHAPE_RE.is_match(date_string) {
        return Err(format_error());
    }
    NaiveDate::parse_from_str(date_string, DATE_FORMAT).map_err(|_| format_error())
}

/// Determine whether the given string is a valid date.
///
/// Returns `Ok(true)` for a valid date and `Err(DateFormatError)` otherwise;
/// it never yields `Ok(false)`. Use [`is_valid_date`] to branch on a plain
/// boolean instead.
pub fn valid_date(date_string: &str) -> Result<bool> {
    parse_date(date_string)?;
    Ok(true)
}

pub fn is_valid_date(date_string: &str) -> bool {
    parse_date(date_string).is_ok()
}

/// Subtract `ndays` days from a `YYYY-MM-DD` date. Negative counts add days.
///
/// ```
/// use alpha_utils::subtract_days;
///
/// assert_eq!(subtract_days("2017-11-10", 31).unwrap(), "2017-10-10");
/// ```
pub fn subtract_days(date_string: &str, ndays: i64) -> Result<String> {
    let date = parse_date(date_string)?;

    let days = Days::new(ndays.unsigned_abs());
    let shifted = if ndays >= 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };

    shifted
        .map(|d| d.format(DATE_FORMAT).to_string())
        .ok_or_else(|| UtilsError::DateOutOfRange {
            date: date_string.to_string(),
            ndays,
        })
}

/// clap value parser: validates a date argument and normalizes it to
/// zero-padded `YYYY-MM-DD`.
pub fn date_arg(s: &str) -> Result<String> {
    Ok(parse_date(s)?.format(DATE_FORMAT).to_string())
}
