//! Calendar month periods and the date window around a reference instant
//!
//! `MonthPeriod` identifies a calendar month and knows its boundaries.
//! `MonthWindow` is the month containing a given "now" together with the
//! elapsed/remaining day counts that budget pacing works from.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    /// Create a monthly period; months outside 1..=12 are clamped
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The month containing the given instant
    pub fn containing(instant: NaiveDateTime) -> Self {
        Self::new(instant.year(), instant.month())
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// First instant of the month (midnight on the first)
    pub fn start(&self) -> NaiveDateTime {
        self.start_date().and_time(NaiveTime::MIN)
    }

    /// Last instant of the month (23:59:59.999 on the last day)
    pub fn end(&self) -> NaiveDateTime {
        self.next().start() - Duration::milliseconds(1)
    }

    /// Number of days in this month
    pub fn days(&self) -> u32 {
        self.end_date().day()
    }

    /// Check if an instant falls within this month (both ends inclusive)
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start() && instant <= self.end()
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Step back `count` months
    pub fn months_back(&self, count: u32) -> Self {
        (0..count).fold(*self, |period, _| period.prev())
    }

    /// Short month name ("Jan", "Feb", ...)
    pub fn short_label(&self) -> String {
        self.start_date().format("%b").to_string()
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Day counts of a month relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Total days in the month
    pub in_month: u32,
    /// Days elapsed, including the reference day
    pub passed: u32,
    /// `in_month - passed`
    pub remaining: u32,
}

impl DayCounts {
    pub fn new(in_month: u32, passed: u32) -> Self {
        Self {
            in_month,
            passed,
            remaining: in_month.saturating_sub(passed),
        }
    }
}

/// The calendar month containing a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    now: NaiveDateTime,
    period: MonthPeriod,
}

impl MonthWindow {
    pub fn containing(now: NaiveDateTime) -> Self {
        Self {
            now,
            period: MonthPeriod::containing(now),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn period(&self) -> MonthPeriod {
        self.period
    }

    /// First instant of the month
    pub fn start(&self) -> NaiveDateTime {
        self.period.start()
    }

    /// Last instant of the month
    pub fn end(&self) -> NaiveDateTime {
        self.period.end()
    }

    pub fn days_in_month(&self) -> u32 {
        self.period.days()
    }

    /// Days elapsed including today
    pub fn days_passed(&self) -> u32 {
        self.now.day()
    }

    pub fn days_remaining(&self) -> u32 {
        self.days_in_month().saturating_sub(self.days_passed())
    }

    pub fn day_counts(&self) -> DayCounts {
        DayCounts::new(self.days_in_month(), self.days_passed())
    }

    /// Anywhere in the calendar month, future days included
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.period.contains(instant)
    }

    /// From the first of the month up to and including "now"
    pub fn contains_to_date(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start() && instant <= self.now
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
