// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The alien timestamp.
//!
//! [`AlienTimestamp`] is a broken-down date/time on the alien calendar.
//! Every field other than `year` is kept within its modulus: values can
//! only be built through [`AlienTimestamp::new`], which validates against
//! the tables in [`calendar`](crate::calendar), or produced by the
//! conversion functions, which are total.
//!
//! Ordering is lexicographic on `(year, month, day, hour, minute, second)`,
//! which coincides with chronological order.

use crate::calendar::{
    days_in_month, HOURS_IN_DAY, MINUTES_IN_HOUR, MONTHS_IN_YEAR, SECONDS_IN_MINUTE,
};
use crate::error::ValidationError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A validated point on the alien calendar.
///
/// Field order matters: the derived `Ord` compares `year` first and
/// `second` last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlienTimestamp {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl AlienTimestamp {
    // ── constructors ──────────────────────────────────────────────────

    /// Build a timestamp, checking every field against the calendar bounds.
    ///
    /// `year` is unconstrained. Fields are checked in the order month, day,
    /// hour, minute, second and the first violation is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use xenochron::AlienTimestamp;
    ///
    /// let ts = AlienTimestamp::new(2804, 18, 38, 35, 89, 89).unwrap();
    /// assert_eq!(ts.formatted_time(), "35:89:89");
    ///
    /// assert!(AlienTimestamp::new(2804, 18, 39, 0, 0, 0).is_err());
    /// ```
    pub fn new(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValidationError> {
        let month = check_month(month)?;
        let day = check_day(month, day)?;
        let hour = check_hour(hour)?;
        let minute = check_minute(minute)?;
        let second = check_second(second)?;
        Ok(Self::from_parts_unchecked(year, month, day, hour, minute, second))
    }

    /// Build without validation. Only used for constants and for values
    /// produced by the conversion arithmetic, which is range-preserving.
    #[inline]
    pub(crate) const fn from_parts_unchecked(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// 1-based month (`1..=18`).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// 1-based day of month.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Alien seconds elapsed since the start of the day.
    #[inline]
    pub const fn second_of_day(&self) -> i64 {
        (self.hour as i64 * MINUTES_IN_HOUR as i64 + self.minute as i64) * SECONDS_IN_MINUTE as i64
            + self.second as i64
    }

    // ── derived views ─────────────────────────────────────────────────

    /// `HH:MM:SS`, zero-padded. Fields are base 36/90/90, not 24/60/60.
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// `Year {year}, Month {month}, Day {day}`.
    pub fn formatted_date(&self) -> String {
        format!("Year {}, Month {}, Day {}", self.year, self.month, self.day)
    }

    /// Length of this timestamp's month.
    pub fn days_in_current_month(&self) -> u8 {
        // month is always within 1..=18 here
        days_in_month(self.month).unwrap_or(0)
    }
}

impl fmt::Display for AlienTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year {}, Month {}, Day {} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ── validation helpers ───────────────────────────────────────────────────

fn check_month(value: u32) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(month) if (1..=MONTHS_IN_YEAR).contains(&month) => Ok(month),
        _ => Err(ValidationError::Month {
            value,
            min: 1,
            max: MONTHS_IN_YEAR,
        }),
    }
}

fn check_day(month: u8, value: u32) -> Result<u8, ValidationError> {
    let max = days_in_month(month).unwrap_or(0);
    match u8::try_from(value) {
        Ok(day) if (1..=max).contains(&day) => Ok(day),
        _ => Err(ValidationError::Day {
            value,
            month,
            min: 1,
            max,
        }),
    }
}

pub(crate) fn check_hour(value: u32) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(hour) if hour < HOURS_IN_DAY => Ok(hour),
        _ => Err(ValidationError::Hour {
            value,
            min: 0,
            max: HOURS_IN_DAY - 1,
        }),
    }
}

pub(crate) fn check_minute(value: u32) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(minute) if minute < MINUTES_IN_HOUR => Ok(minute),
        _ => Err(ValidationError::Minute {
            value,
            min: 0,
            max: MINUTES_IN_HOUR - 1,
        }),
    }
}

pub(crate) fn check_second(value: u32) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(second) if second < SECONDS_IN_MINUTE => Ok(second),
        _ => Err(ValidationError::Second {
            value,
            min: 0,
            max: SECONDS_IN_MINUTE - 1,
        }),
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AlienTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i64,
            month: u32,
            day: u32,
            hour: u32,
            minute: u32,
            second: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
            .map_err(serde::de::Error::custom)
    }
}
