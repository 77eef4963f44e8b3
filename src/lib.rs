// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Alien Clock
//!
//! Converts Earth instants into a fictional alien calendar and keeps an
//! alien clock running in automatic or manual mode.
//!
//! # Core types
//!
//! - [`AlienTimestamp`] — validated alien date/time.
//! - [`AlienClock`] — engine holding mode, offset and the current timestamp.
//! - [`EarthInstant`] / [`TimeOffset`] — Earth milliseconds and shifts.
//! - [`Ticker`] — idempotent periodic trigger.
//! - [`AlarmBook`] — alarms matched against the alien time of day.
//! - [`ClockSession`] — clock, alarms and tickers wired together.
//!
//! # Calendar
//!
//! | Unit | Base |
//! |------|------|
//! | second | 90 per minute |
//! | minute | 90 per hour |
//! | hour | 36 per day |
//! | day | 38–48 per month |
//! | month | 18 per year |
//!
//! One alien second lasts 500 Earth milliseconds. 1970-01-01T00:00:00Z is
//! Year 2804, Month 18, Day 31, 02:02:88.
//!
//! ```
//! use xenochron::{AlienClock, EarthInstant};
//!
//! let mut clock = AlienClock::new(EarthInstant::EPOCH);
//! assert_eq!(clock.formatted_date(), "Year 2804, Month 18, Day 31");
//!
//! clock.set_manual(1, 1, 44, 35, 89, 89).unwrap();
//! clock.advance(EarthInstant::EPOCH);
//! assert_eq!(clock.formatted_date(), "Year 1, Month 2, Day 1");
//! assert_eq!(clock.formatted_time(), "00:00:00");
//! ```

mod alarm;
pub mod calendar;
mod clock;
mod config;
mod convert;
mod earth;
mod error;
mod session;
mod ticker;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use alarm::{Alarm, AlarmBook};
pub use calendar::{ALIEN_EPOCH, EARTH_MS_PER_ALIEN_SECOND};
pub use clock::{AlienClock, ClockMode};
pub use config::ClockConfig;
pub use convert::{convert, epoch_seconds, from_epoch_seconds, tick_manual, to_earth_instant};
pub use earth::{EarthInstant, EarthReading, TimeOffset};
pub use error::ValidationError;
pub use session::{ClockSession, TimeSource};
pub use ticker::{Ticker, MIN_INTERVAL};
pub use timestamp::AlienTimestamp;
