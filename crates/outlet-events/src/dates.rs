//! Date-range resolution for spreadsheet rows.
//!
//! Rows carry either explicit ISO dates (columns C/D) or a free-text period
//! such as `"12.20(토) ~ 01.05(일)"`. Periods have no year, so the year is
//! inferred from the distance between the parsed month and the current month.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// A month more than this many months away from the current month is assumed
/// to belong to the adjacent year.
const YEAR_INFERENCE_WINDOW_MONTHS: i32 = 6;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid annotation regex"));

/// An inclusive start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The day after `end`, for consumers that treat range ends as exclusive.
    #[must_use]
    pub fn end_exclusive(&self) -> NaiveDate {
        self.end.succ_opt().unwrap_or(self.end)
    }
}

/// Resolves a row's dates.
///
/// Explicit ISO fields win when both match `YYYY-MM-DD`; otherwise the period
/// text must split on `~` into exactly two `M.D` sides. When the inferred
/// start lands after the inferred end the promotion wraps the new year, so the
/// end moves forward one year.
///
/// Returns `None` when either side cannot be parsed into a real calendar date,
/// or when explicit ISO fields are given in reverse order.
#[must_use]
pub fn resolve_range(
    period: &str,
    iso_start: Option<&str>,
    iso_end: Option<&str>,
    today: NaiveDate,
) -> Option<DateRange> {
    let iso_start = iso_start.map(str::trim).filter(|s| ISO_DATE.is_match(s));
    let iso_end = iso_end.map(str::trim).filter(|s| ISO_DATE.is_match(s));

    if let (Some(start), Some(end)) = (iso_start, iso_end) {
        let (start, end) = (parse_iso(start)?, parse_iso(end)?);
        return (start <= end).then_some(DateRange { start, end });
    }

    let (left, right) = split_period(period)?;

    let start = match iso_start {
        Some(s) => parse_iso(s)?,
        None => parse_month_day(left, today)?,
    };
    let mut end = match iso_end {
        Some(s) => parse_iso(s)?,
        None => parse_month_day(right, today)?,
    };

    if start > end {
        let adjusted = end.with_year(end.year() + 1)?;
        tracing::info!(
            period,
            %start,
            from = %end,
            to = %adjusted,
            "period wraps the year boundary; moving end forward one year"
        );
        end = adjusted;
    }

    Some(DateRange { start, end })
}

/// Splits `"A ~ B"` into its two sides. Anything other than exactly one `~`
/// is rejected.
fn split_period(period: &str) -> Option<(&str, &str)> {
    let mut parts = period.split('~');
    let left = parts.next()?;
    let right = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((left, right))
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses `"M.D"` (with any parenthesised annotation removed) and assigns a
/// year via [`infer_year`].
fn parse_month_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let clean = ANNOTATION.replace_all(text, "");
    let clean = clean.trim();
    let (month, rest) = clean.split_once('.')?;
    let day = rest.split('.').next().unwrap_or(rest);

    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;

    let year = infer_year(month, today);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Picks the year for a month written without one.
///
/// A month more than six ahead of the current month is last year's (a
/// January view of a July promotion); more than six behind is next year's
/// (a December view of a January promotion); anything else is this year.
#[must_use]
pub fn infer_year(month: u32, today: NaiveDate) -> i32 {
    let current_year = today.year();
    let current_month = i32::try_from(today.month()).unwrap_or(1);
    let month = i32::try_from(month).unwrap_or(current_month);

    if month > current_month + YEAR_INFERENCE_WINDOW_MONTHS {
        current_year - 1
    } else if month < current_month - YEAR_INFERENCE_WINDOW_MONTHS {
        current_year + 1
    } else {
        current_year
    }
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
