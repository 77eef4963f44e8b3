// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar constants for the alien clock.
//!
//! The alien calendar uses non-decimal unit bases and an irregular month
//! table:
//!
//! | Unit | Base |
//! |------|------|
//! | second → minute | 90 |
//! | minute → hour | 90 |
//! | hour → day | 36 |
//! | day → month | see [`DAYS_IN_MONTH`] |
//! | month → year | 18 |
//!
//! One alien second lasts [`EARTH_MS_PER_ALIEN_SECOND`] Earth milliseconds,
//! and the Unix epoch (1970-01-01T00:00:00Z) corresponds exactly to
//! [`ALIEN_EPOCH`].

use crate::timestamp::AlienTimestamp;

// ---------------------------------------------------------------------------
// Unit bases
// ---------------------------------------------------------------------------

/// Seconds in one alien minute.
pub const SECONDS_IN_MINUTE: u8 = 90;

/// Minutes in one alien hour.
pub const MINUTES_IN_HOUR: u8 = 90;

/// Hours in one alien day.
pub const HOURS_IN_DAY: u8 = 36;

/// Months in one alien year.
pub const MONTHS_IN_YEAR: u8 = 18;

/// Earth milliseconds elapsed per alien second (the alien clock runs twice as fast).
pub const EARTH_MS_PER_ALIEN_SECOND: i64 = 500;

/// Alien seconds in one alien day (`90 × 90 × 36`).
pub const SECONDS_IN_DAY: i64 =
    SECONDS_IN_MINUTE as i64 * MINUTES_IN_HOUR as i64 * HOURS_IN_DAY as i64;

/// Days per month, indexed by `month - 1`.
#[rustfmt::skip]
pub const DAYS_IN_MONTH: [u8; MONTHS_IN_YEAR as usize] = [
    44, 42, 48, 40, 48, 44, 40, 44, 42,
    40, 40, 42, 44, 48, 42, 40, 44, 38,
];

/// Days before the first day of each month, indexed by `month - 1`.
pub const DAYS_BEFORE_MONTH: [u16; MONTHS_IN_YEAR as usize] = cumulative_days();

/// Days in one alien year. Every year has the same length.
pub const DAYS_IN_YEAR: i64 = DAYS_BEFORE_MONTH[MONTHS_IN_YEAR as usize - 1] as i64
    + DAYS_IN_MONTH[MONTHS_IN_YEAR as usize - 1] as i64;

const fn cumulative_days() -> [u16; MONTHS_IN_YEAR as usize] {
    let mut table = [0u16; MONTHS_IN_YEAR as usize];
    let mut i = 1;
    while i < MONTHS_IN_YEAR as usize {
        table[i] = table[i - 1] + DAYS_IN_MONTH[i - 1] as u16;
        i += 1;
    }
    table
}

// ---------------------------------------------------------------------------
// Epoch
// ---------------------------------------------------------------------------

/// Earth epoch in milliseconds since 1970-01-01T00:00:00Z.
pub const EARTH_EPOCH_MS: i64 = 0;

/// The alien timestamp that coincides with [`EARTH_EPOCH_MS`].
pub const ALIEN_EPOCH: AlienTimestamp =
    AlienTimestamp::from_parts_unchecked(2804, 18, 31, 2, 2, 88);

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Number of days in a 1-based `month`, or `None` outside `1..=18`.
#[inline]
pub const fn days_in_month(month: u8) -> Option<u8> {
    if month >= 1 && month <= MONTHS_IN_YEAR {
        Some(DAYS_IN_MONTH[month as usize - 1])
    } else {
        None
    }
}

/// Zero-based ordinal of `(month, day)` within its year.
///
/// Callers must pass an already validated month and day.
#[inline]
pub(crate) const fn day_of_year(month: u8, day: u8) -> i64 {
    DAYS_BEFORE_MONTH[month as usize - 1] as i64 + day as i64 - 1
}

/// Inverse of [`day_of_year`]: maps `0..DAYS_IN_YEAR` to a 1-based `(month, day)`.
pub(crate) fn month_day_from_ordinal(ordinal: i64) -> (u8, u8) {
    let ordinal = ordinal.rem_euclid(DAYS_IN_YEAR);
    let index = DAYS_BEFORE_MONTH
        .iter()
        .rposition(|&before| i64::from(before) <= ordinal)
        .unwrap_or(0);
    let day = ordinal - i64::from(DAYS_BEFORE_MONTH[index]) + 1;
    (index as u8 + 1, day as u8)
}
