// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Session configuration.
//!
//! With the `serde` feature enabled, [`ClockConfig`] (de)serializes with
//! every interval expressed in milliseconds, and missing fields fall back
//! to their defaults:
//!
//! ```json
//! { "alien_tick_ms": 500, "earth_tick_ms": 1000, "alarm_poll_ms": 500, "initial_offset_ms": 0 }
//! ```

use crate::calendar::EARTH_MS_PER_ALIEN_SECOND;
use crate::earth::TimeOffset;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cadences and starting offset for a [`ClockSession`](crate::ClockSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ClockConfig {
    /// Alien clock advance interval; one alien second by default.
    #[cfg_attr(feature = "serde", serde(rename = "alien_tick_ms", with = "duration_ms"))]
    pub alien_tick: Duration,

    /// Earth display refresh interval.
    #[cfg_attr(feature = "serde", serde(rename = "earth_tick_ms", with = "duration_ms"))]
    pub earth_tick: Duration,

    /// Alarm polling interval.
    #[cfg_attr(feature = "serde", serde(rename = "alarm_poll_ms", with = "duration_ms"))]
    pub alarm_poll: Duration,

    /// Offset the alien clock starts with.
    #[cfg_attr(feature = "serde", serde(rename = "initial_offset_ms"))]
    pub initial_offset: TimeOffset,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            alien_tick: Duration::from_millis(EARTH_MS_PER_ALIEN_SECOND as u64),
            earth_tick: Duration::from_millis(1_000),
            alarm_poll: Duration::from_millis(500),
            initial_offset: TimeOffset::ZERO,
        }
    }
}

impl ClockConfig {
    pub fn with_alien_tick(mut self, interval: Duration) -> Self {
        self.alien_tick = interval;
        self
    }

    pub fn with_earth_tick(mut self, interval: Duration) -> Self {
        self.earth_tick = interval;
        self
    }

    pub fn with_alarm_poll(mut self, interval: Duration) -> Self {
        self.alarm_poll = interval;
        self
    }

    pub fn with_initial_offset(mut self, offset: TimeOffset) -> Self {
        self.initial_offset = offset;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_clock_cadences() {
        let cfg = ClockConfig::default();
        assert_eq!(cfg.alien_tick, Duration::from_millis(500));
        assert_eq!(cfg.earth_tick, Duration::from_secs(1));
        assert_eq!(cfg.alarm_poll, Duration::from_millis(500));
        assert!(cfg.initial_offset.is_zero());
    }

    #[test]
    fn builder_overrides() {
        let cfg = ClockConfig::default()
            .with_alien_tick(Duration::from_millis(10))
            .with_earth_tick(Duration::from_millis(20))
            .with_alarm_poll(Duration::from_millis(30))
            .with_initial_offset(TimeOffset::from_millis(-40));
        assert_eq!(cfg.alien_tick.as_millis(), 10);
        assert_eq!(cfg.earth_tick.as_millis(), 20);
        assert_eq!(cfg.alarm_poll.as_millis(), 30);
        assert_eq!(cfg.initial_offset.millis(), -40);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_millisecond_fields() {
        let json = serde_json::to_string(&ClockConfig::default()).unwrap();
        assert!(json.contains("\"alien_tick_ms\":500"));
        assert!(json.contains("\"initial_offset_ms\":0"));

        let cfg: ClockConfig = serde_json::from_str(r#"{"alarm_poll_ms": 250}"#).unwrap();
        assert_eq!(cfg.alarm_poll, Duration::from_millis(250));
        assert_eq!(cfg.alien_tick, Duration::from_millis(500));
    }
}
