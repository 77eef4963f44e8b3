// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Running clock session.
//!
//! [`ClockSession`] wires an [`AlienClock`] and an [`AlarmBook`] to three
//! [`Ticker`]s (alien advance, alarm polling, Earth display refresh). The
//! clock and alarm book sit behind `parking_lot` mutexes so the tick
//! threads and the caller can share them; a lock is never held across
//! another lock.

use crate::alarm::AlarmBook;
use crate::clock::AlienClock;
use crate::config::ClockConfig;
use crate::earth::{EarthInstant, EarthReading};
use crate::error::ValidationError;
use crate::ticker::Ticker;
use crate::timestamp::AlienTimestamp;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::info;

/// Source of "now" for a session.
pub type TimeSource = Arc<dyn Fn() -> EarthInstant + Send + Sync>;

/// Alien clock, alarms and Earth reading driven by background tickers.
pub struct ClockSession {
    config: ClockConfig,
    source: TimeSource,
    clock: Arc<Mutex<AlienClock>>,
    alarms: Arc<Mutex<AlarmBook>>,
    earth: Arc<Mutex<Option<EarthReading>>>,
    alien_ticker: Ticker,
    alarm_ticker: Ticker,
    earth_ticker: Ticker,
}

impl ClockSession {
    /// Session on the host clock.
    pub fn new(config: ClockConfig) -> Self {
        Self::with_source(config, Arc::new(EarthInstant::now))
    }

    /// Session reading "now" from `source`.
    pub fn with_source(config: ClockConfig, source: TimeSource) -> Self {
        let now = source();
        Self {
            config,
            clock: Arc::new(Mutex::new(AlienClock::with_offset(now, config.initial_offset))),
            alarms: Arc::new(Mutex::new(AlarmBook::new())),
            earth: Arc::new(Mutex::new(EarthReading::from_instant(now))),
            source,
            alien_ticker: Ticker::new("alien-clock"),
            alarm_ticker: Ticker::new("alarm-monitor"),
            earth_ticker: Ticker::new("earth-clock"),
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Current Earth instant according to the session's time source.
    pub fn now(&self) -> EarthInstant {
        (self.source)()
    }

    /// Locked access to the alien clock.
    pub fn clock(&self) -> MutexGuard<'_, AlienClock> {
        self.clock.lock()
    }

    /// Locked access to the alarm book.
    pub fn alarms(&self) -> MutexGuard<'_, AlarmBook> {
        self.alarms.lock()
    }

    /// Snapshot of the current alien time.
    pub fn alien_time(&self) -> AlienTimestamp {
        self.clock.lock().current()
    }

    /// Last Earth reading, refreshed by the Earth ticker.
    pub fn earth(&self) -> Option<EarthReading> {
        *self.earth.lock()
    }

    pub fn set_manual(
        &self,
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<AlienTimestamp, ValidationError> {
        self.clock.lock().set_manual(year, month, day, hour, minute, second)
    }

    pub fn set_automatic(&self) -> AlienTimestamp {
        let now = self.now();
        self.clock.lock().set_automatic(now)
    }

    pub fn reset_offset(&self) -> AlienTimestamp {
        let now = self.now();
        self.clock.lock().reset_offset(now)
    }

    pub fn is_running(&self) -> bool {
        self.alien_ticker.is_running()
    }

    /// Start all tickers. Returns `false` if the session was already running.
    pub fn start(&mut self) -> bool {
        let clock = Arc::clone(&self.clock);
        let source = Arc::clone(&self.source);
        let started = self.alien_ticker.start(self.config.alien_tick, move || {
            let now = source();
            clock.lock().advance(now);
        });

        let clock = Arc::clone(&self.clock);
        let alarms = Arc::clone(&self.alarms);
        self.alarm_ticker.start(self.config.alarm_poll, move || {
            let current = clock.lock().current();
            alarms.lock().check(&current);
        });

        let earth = Arc::clone(&self.earth);
        let source = Arc::clone(&self.source);
        self.earth_ticker.start(self.config.earth_tick, move || {
            *earth.lock() = EarthReading::from_instant(source());
        });

        if started {
            info!("clock session started");
        }
        started
    }

    /// Stop all tickers. Returns `false` if the session was not running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.alien_ticker.stop();
        self.alarm_ticker.stop();
        self.earth_ticker.stop();
        if stopped {
            info!("clock session stopped");
        }
        stopped
    }
}

impl Drop for ClockSession {
    fn drop(&mut self) {
        self.stop();
    }
}
