// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth-side time values.
//!
//! - [`EarthInstant`]: milliseconds since 1970-01-01T00:00:00Z, the input of
//!   every alien conversion.
//! - [`TimeOffset`]: signed millisecond shift applied to the host clock in
//!   automatic mode.
//! - [`EarthReading`]: broken-down UTC wall-clock values for display.
//!
//! All Earth values are UTC; no timezone handling is done here.

use chrono::{DateTime, Datelike, Month, NaiveDate, Timelike, Utc};
use qtty::Seconds;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// EarthInstant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the Earth time line, in milliseconds since the Unix epoch.
///
/// Negative values lie before the epoch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct EarthInstant(i64);

impl EarthInstant {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(crate::calendar::EARTH_EPOCH_MS);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Read the host clock.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Build from a `chrono::DateTime<Utc>`, truncating to the millisecond.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for EarthInstant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl Add<TimeOffset> for EarthInstant {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TimeOffset) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub<TimeOffset> for EarthInstant {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TimeOffset) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sub for EarthInstant {
    type Output = TimeOffset;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        TimeOffset(self.0.saturating_sub(rhs.0))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeOffset
// ═══════════════════════════════════════════════════════════════════════════

/// Signed millisecond delta applied to the real-time source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TimeOffset(i64);

impl TimeOffset {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Build from a quantity in seconds, rounded to the nearest millisecond.
    ///
    /// Non-finite input maps to zero; out-of-range input saturates.
    pub fn from_seconds(seconds: Seconds) -> Self {
        let millis = (seconds.value() * 1_000.0).round();
        if millis.is_finite() {
            Self(millis as i64)
        } else {
            Self::ZERO
        }
    }

    /// The offset as a quantity in seconds.
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.0 as f64 / 1_000.0)
    }
}

impl Add for TimeOffset {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Neg for TimeOffset {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl From<Seconds> for TimeOffset {
    #[inline]
    fn from(seconds: Seconds) -> Self {
        Self::from_seconds(seconds)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EarthReading
// ═══════════════════════════════════════════════════════════════════════════

/// UTC wall-clock reading of an Earth instant, for display next to the
/// alien clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EarthReading {
    datetime: DateTime<Utc>,
}

impl EarthReading {
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self { datetime }
    }

    /// Read the host clock.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Reading for `instant`, or `None` outside chrono's range.
    pub fn from_instant(instant: EarthInstant) -> Option<Self> {
        instant.to_utc().map(Self::from_utc)
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        self.datetime.format("%H:%M:%S").to_string()
    }

    /// `YYYY-MM-DD`.
    pub fn formatted_date(&self) -> String {
        self.datetime.format("%Y-%m-%d").to_string()
    }

    /// English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    /// Gregorian length of the current month.
    pub fn days_in_current_month(&self) -> u32 {
        let (year, month) = (self.year(), self.month());
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        match (
            NaiveDate::from_ymd_opt(year, month, 1),
            NaiveDate::from_ymd_opt(next_year, next_month, 1),
        ) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 0,
        }
    }
}
