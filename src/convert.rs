// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth → alien conversion and manual ticking.
//!
//! [`convert`] maps an Earth instant (plus offset) onto the alien calendar.
//! It is a pure function:
//!
//! ```text
//! total_ms       = instant + offset
//! alien_seconds  = floor(total_ms / 500)
//! (s, m, h, d)   = alien_seconds split by 90, 90, 36   (Euclidean)
//! timestamp      = ALIEN_EPOCH + (d, h, m, s) with carries
//! ```
//!
//! Whole days are added through the cumulative month table rather than a
//! day-by-day walk; every year has the same 770 days, so a day count maps
//! to `(year, month, day)` with one division and a table lookup. Instants
//! before the Unix epoch walk backwards through the same table.
//!
//! [`tick_manual`] advances a timestamp by exactly one alien second.

use crate::calendar::{
    day_of_year, days_in_month, month_day_from_ordinal, ALIEN_EPOCH, DAYS_IN_YEAR,
    EARTH_MS_PER_ALIEN_SECOND, HOURS_IN_DAY, MINUTES_IN_HOUR, MONTHS_IN_YEAR, SECONDS_IN_DAY,
    SECONDS_IN_MINUTE,
};
use crate::earth::{EarthInstant, TimeOffset};
use crate::timestamp::AlienTimestamp;

const SECS: i64 = SECONDS_IN_MINUTE as i64;
const MINS: i64 = MINUTES_IN_HOUR as i64;
const HOURS: i64 = HOURS_IN_DAY as i64;

/// Convert an Earth instant, shifted by `offset`, to the alien calendar.
///
/// # Examples
///
/// ```
/// use xenochron::{convert, EarthInstant, TimeOffset, ALIEN_EPOCH};
///
/// assert_eq!(convert(EarthInstant::EPOCH, TimeOffset::ZERO), ALIEN_EPOCH);
///
/// // Half a second later the alien clock has moved one second.
/// let next = convert(EarthInstant::from_millis(500), TimeOffset::ZERO);
/// assert_eq!(next.formatted_time(), "02:02:89");
/// ```
pub fn convert(instant: EarthInstant, offset: TimeOffset) -> AlienTimestamp {
    let total_ms = i128::from(instant.millis()) + i128::from(offset.millis());
    // |total_ms| <= 2^64, so the quotient always fits in i64.
    let alien_seconds = total_ms.div_euclid(i128::from(EARTH_MS_PER_ALIEN_SECOND)) as i64;
    from_epoch_seconds(alien_seconds)
}

/// Alien timestamp `alien_seconds` after (or before, if negative) [`ALIEN_EPOCH`].
pub fn from_epoch_seconds(alien_seconds: i64) -> AlienTimestamp {
    let second = alien_seconds.rem_euclid(SECS);
    let minutes = alien_seconds.div_euclid(SECS);
    let minute = minutes.rem_euclid(MINS);
    let hours = minutes.div_euclid(MINS);
    let hour = hours.rem_euclid(HOURS);
    let days = hours.div_euclid(HOURS);

    let epoch = ALIEN_EPOCH;
    let (second, carry) = divmod(i64::from(epoch.second()) + second, SECS);
    let (minute, carry) = divmod(i64::from(epoch.minute()) + minute + carry, MINS);
    let (hour, carry) = divmod(i64::from(epoch.hour()) + hour + carry, HOURS);

    let day_number = i128::from(epoch.year()) * i128::from(DAYS_IN_YEAR)
        + i128::from(day_of_year(epoch.month(), epoch.day()))
        + i128::from(days)
        + i128::from(carry);
    let ordinal = day_number.rem_euclid(i128::from(DAYS_IN_YEAR)) as i64;
    // |days| < 2^64 / (500 · 291 600), so the year stays far inside i64.
    let year = day_number.div_euclid(i128::from(DAYS_IN_YEAR)) as i64;
    let (month, day) = month_day_from_ordinal(ordinal);

    AlienTimestamp::from_parts_unchecked(year, month, day, hour as u8, minute as u8, second as u8)
}

/// Signed alien seconds from [`ALIEN_EPOCH`] to `timestamp`.
///
/// Inverse of [`from_epoch_seconds`].
pub fn epoch_seconds(timestamp: &AlienTimestamp) -> i128 {
    let epoch = ALIEN_EPOCH;
    let day_number = |ts: &AlienTimestamp| {
        i128::from(ts.year()) * i128::from(DAYS_IN_YEAR)
            + i128::from(day_of_year(ts.month(), ts.day()))
    };
    (day_number(timestamp) - day_number(&epoch)) * i128::from(SECONDS_IN_DAY)
        + i128::from(timestamp.second_of_day() - epoch.second_of_day())
}

/// First Earth instant (with zero offset) that converts to `timestamp`.
///
/// Saturates at the ends of the `i64` millisecond range.
pub fn to_earth_instant(timestamp: &AlienTimestamp) -> EarthInstant {
    let millis = epoch_seconds(timestamp) * i128::from(EARTH_MS_PER_ALIEN_SECOND);
    let millis = millis.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
    EarthInstant::from_millis(millis)
}

/// Advance `current` by exactly one alien second.
///
/// Carries cascade second → minute → hour → day → month → year. The last
/// second of year `i64::MAX` has no successor and is returned unchanged.
pub fn tick_manual(current: AlienTimestamp) -> AlienTimestamp {
    let mut year = current.year();
    let mut month = current.month();
    let mut day = current.day();
    let mut hour = current.hour();
    let mut minute = current.minute();
    let mut second = current.second() + 1;

    if second >= SECONDS_IN_MINUTE {
        second = 0;
        minute += 1;
    }
    if minute >= MINUTES_IN_HOUR {
        minute = 0;
        hour += 1;
    }
    if hour >= HOURS_IN_DAY {
        hour = 0;
        day += 1;
    }
    if day > days_in_month(month).unwrap_or(0) {
        day = 1;
        month += 1;
    }
    if month > MONTHS_IN_YEAR {
        let Some(next_year) = year.checked_add(1) else {
            return current;
        };
        month = 1;
        year = next_year;
    }

    AlienTimestamp::from_parts_unchecked(year, month, day, hour, minute, second)
}

#[inline]
fn divmod(value: i64, base: i64) -> (i64, i64) {
    (value.rem_euclid(base), value.div_euclid(base))
}
