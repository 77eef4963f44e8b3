// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The alien clock engine.
//!
//! [`AlienClock`] owns the clock state (mode, offset, current timestamp).
//! It never reads the host clock itself: every operation that needs "now"
//! takes an [`EarthInstant`], so the engine stays deterministic and the
//! caller decides where time comes from.

use crate::convert::{convert, tick_manual};
use crate::earth::{EarthInstant, TimeOffset};
use crate::error::ValidationError;
use crate::timestamp::AlienTimestamp;
use std::fmt;
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the current timestamp is produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockMode {
    /// Derived from the real-time clock plus the offset on every advance.
    #[default]
    Automatic,
    /// Advanced by one alien second per tick, independent of real time.
    Manual,
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => f.write_str("automatic"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// Alien clock state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienClock {
    mode: ClockMode,
    offset: TimeOffset,
    current: AlienTimestamp,
}

impl AlienClock {
    /// Start in automatic mode with a zero offset.
    pub fn new(now: EarthInstant) -> Self {
        Self::with_offset(now, TimeOffset::ZERO)
    }

    /// Start in automatic mode with the given offset.
    pub fn with_offset(now: EarthInstant, offset: TimeOffset) -> Self {
        Self {
            mode: ClockMode::Automatic,
            offset,
            current: convert(now, offset),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    #[inline]
    pub fn offset(&self) -> TimeOffset {
        self.offset
    }

    #[inline]
    pub fn current(&self) -> AlienTimestamp {
        self.current
    }

    pub fn formatted_time(&self) -> String {
        self.current.formatted_time()
    }

    pub fn formatted_date(&self) -> String {
        self.current.formatted_date()
    }

    pub fn days_in_current_month(&self) -> u8 {
        self.current.days_in_current_month()
    }

    // ── operations ────────────────────────────────────────────────────

    /// Timer entry point.
    ///
    /// In automatic mode the timestamp is recomputed from `now`; in manual
    /// mode `now` is ignored and the timestamp moves one second forward.
    pub fn advance(&mut self, now: EarthInstant) -> AlienTimestamp {
        self.current = match self.mode {
            ClockMode::Automatic => convert(now, self.offset),
            ClockMode::Manual => tick_manual(self.current),
        };
        trace!(mode = %self.mode, time = %self.current, "alien clock advanced");
        self.current
    }

    /// Switch to manual mode at the given alien time.
    ///
    /// Nothing changes if any field is out of range.
    pub fn set_manual(
        &mut self,
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<AlienTimestamp, ValidationError> {
        let timestamp = AlienTimestamp::new(year, month, day, hour, minute, second).map_err(|err| {
            warn!(%err, "rejected manual alien time");
            err
        })?;
        Ok(self.set_manual_timestamp(timestamp))
    }

    /// Switch to manual mode at an already validated timestamp.
    pub fn set_manual_timestamp(&mut self, timestamp: AlienTimestamp) -> AlienTimestamp {
        self.mode = ClockMode::Manual;
        self.current = timestamp;
        debug!(time = %timestamp, "alien clock set manually");
        self.current
    }

    /// Return to automatic mode, keeping the current offset.
    pub fn set_automatic(&mut self, now: EarthInstant) -> AlienTimestamp {
        self.mode = ClockMode::Automatic;
        self.current = convert(now, self.offset);
        debug!(offset_ms = self.offset.millis(), "alien clock back to automatic");
        self.current
    }

    /// Clear the offset and return to automatic mode.
    pub fn reset_offset(&mut self, now: EarthInstant) -> AlienTimestamp {
        self.offset = TimeOffset::ZERO;
        self.set_automatic(now)
    }

    /// Replace the offset. Recomputes immediately in automatic mode; a
    /// manual clock keeps its timestamp and picks the offset up on the
    /// next switch back.
    pub fn set_offset(&mut self, offset: TimeOffset, now: EarthInstant) -> AlienTimestamp {
        self.offset = offset;
        debug!(offset_ms = offset.millis(), mode = %self.mode, "alien clock offset changed");
        if self.mode == ClockMode::Automatic {
            self.current = convert(now, offset);
        }
        self.current
    }
}
