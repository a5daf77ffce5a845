//! Calendar-aware time bucketing.
//!
//! Bucket construction is independent of data presence: every bucket of the
//! requested period appears in the output, zero-filled, and attribution
//! results are merged in afterwards. All rules are evaluated against a
//! caller-supplied `as_of` instant so truncation is testable.

use core::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use vendora_core::{EngineError, EngineResult};
use vendora_orders::Order;

/// Requested granularity for ad hoc trend queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }
}

impl core::fmt::Display for Granularity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            other => Err(EngineError::calendar_input(format!(
                "unknown period '{other}'"
            ))),
        }
    }
}

/// A contiguous half-open time interval: start inclusive, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Bucket {
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn day_bucket(date: NaiveDate) -> Option<Bucket> {
    let next = date.succ_opt()?;
    Some(Bucket {
        label: date.format("%b %d").to_string(),
        start: day_start(date),
        end: day_start(next),
    })
}

fn month_buckets(year: i32, through_month: u32) -> Vec<Bucket> {
    (1..=through_month)
        .filter_map(|month| {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            let end = start.checked_add_months(Months::new(1))?;
            Some(Bucket {
                label: start.format("%b").to_string(),
                start: day_start(start),
                end: day_start(end),
            })
        })
        .collect()
}

fn daily_buckets(year: i32, as_of: DateTime<Utc>) -> Vec<Bucket> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let last = if year == as_of.year() {
        as_of.date_naive()
    } else {
        match NaiveDate::from_ymd_opt(year, 12, 31) {
            Some(date) => date,
            None => return Vec::new(),
        }
    };

    let mut buckets = Vec::new();
    let mut day = first;
    while day <= last {
        let Some(bucket) = day_bucket(day) else { break };
        let next = bucket.end.date_naive();
        buckets.push(bucket);
        day = next;
    }
    buckets
}

/// ISO-8601 weeks of `year`: week 1 contains the year's first Thursday, and
/// the week count (52 or 53) is the ISO week number of December 28.
fn weekly_buckets(year: i32, as_of: DateTime<Utc>) -> Vec<Bucket> {
    let Some(dec_28) = NaiveDate::from_ymd_opt(year, 12, 28) else {
        return Vec::new();
    };
    let weeks = dec_28.iso_week().week();

    let mut buckets = Vec::new();
    for week in 1..=weeks {
        let Some(start) = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon) else {
            continue;
        };
        if year == as_of.year() && day_start(start) > as_of {
            break;
        }
        let Some(end) = start.checked_add_days(Days::new(7)) else {
            continue;
        };
        buckets.push(Bucket {
            label: format!("W{week:02}"),
            start: day_start(start),
            end: day_start(end),
        });
    }
    buckets
}

fn year_bucket(year: i32) -> Vec<Bucket> {
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let Some(end) = NaiveDate::from_ymd_opt(year + 1, 1, 1) else {
        return Vec::new();
    };
    vec![Bucket {
        label: year.to_string(),
        start: day_start(start),
        end: day_start(end),
    }]
}

/// Default dashboard time axis for a selected year.
///
/// - current year, still January: one bucket per elapsed day of January
///   (a month-level view of a single partial month is meaningless, so daily
///   granularity is forced)
/// - current year otherwise: months January through the month of `as_of`
/// - past year: all twelve months
/// - future year: empty (an empty trend is a valid answer)
pub fn dashboard_buckets(year: i32, as_of: DateTime<Utc>) -> Vec<Bucket> {
    if year > as_of.year() {
        return Vec::new();
    }
    if year == as_of.year() {
        if as_of.month() == 1 {
            return daily_buckets(year, as_of);
        }
        return month_buckets(year, as_of.month());
    }
    month_buckets(year, 12)
}

/// Time axis for an ad hoc trend query with an explicit granularity.
///
/// Explicit requests bypass the dashboard's forced-daily January rule but
/// keep the truncation rules: the current year is cut at `as_of`, a future
/// year yields no buckets.
pub fn trend_buckets(year: i32, granularity: Granularity, as_of: DateTime<Utc>) -> Vec<Bucket> {
    if year > as_of.year() {
        return Vec::new();
    }
    match granularity {
        Granularity::Daily => daily_buckets(year, as_of),
        Granularity::Weekly => weekly_buckets(year, as_of),
        Granularity::Monthly => {
            if year == as_of.year() {
                month_buckets(year, as_of.month())
            } else {
                month_buckets(year, 12)
            }
        }
        Granularity::Yearly => year_bucket(year),
    }
}

/// Years selectable on the dashboard: the distinct years present among the
/// orders, unioned with the current year and the four preceding it, sorted
/// descending.
pub fn available_years(orders: &[Order], as_of: DateTime<Utc>) -> Vec<i32> {
    let current = as_of.year();
    let mut years: std::collections::BTreeSet<i32> =
        orders.iter().map(|order| order.created_at.year()).collect();
    years.extend(current - 4..=current);
    years.into_iter().rev().collect()
}
