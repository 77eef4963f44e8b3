// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Periodic trigger.
//!
//! A [`Ticker`] runs a callback on a background thread: once right away,
//! then every `interval` until stopped. Starting a running ticker and
//! stopping a stopped one are both no-ops. [`Ticker::stop`] joins the
//! thread, so no callback is in flight once it returns. Intervals shorter
//! than [`MIN_INTERVAL`] are raised to it.

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Shortest interval a ticker will run at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct Running {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
    interval: Duration,
}

/// Start/stop handle for one periodic callback.
#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    running: Option<Running>,
}

impl Ticker {
    /// Create a stopped ticker. `name` labels log events and the thread.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            running: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Interval of the active trigger, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.running.as_ref().map(|r| r.interval)
    }

    /// Start calling `callback` every `interval`.
    ///
    /// Returns `false`, and drops `callback` unused, if the ticker is
    /// already running or its thread cannot be spawned.
    pub fn start<F>(&mut self, interval: Duration, mut callback: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        if self.running.is_some() {
            debug!(ticker = self.name, "ticker already running");
            return false;
        }

        let interval = interval.max(MIN_INTERVAL);
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let spawned = thread::Builder::new()
            .name(self.name.to_owned())
            .spawn(move || {
                callback();
                // Any outcome other than a timeout (stop signal or dropped
                // sender) ends the loop.
                while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(interval) {
                    callback();
                }
            });
        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                warn!(ticker = self.name, %err, "failed to spawn ticker thread");
                return false;
            }
        };

        debug!(
            ticker = self.name,
            interval_ms = interval.as_millis() as u64,
            "ticker started"
        );
        self.running = Some(Running {
            stop_tx,
            handle,
            interval,
        });
        true
    }

    /// Stop the trigger. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        let Some(running) = self.running.take() else {
            return false;
        };
        // The receiver only disappears if the thread already exited.
        let _ = running.stop_tx.send(());
        if running.handle.join().is_err() {
            warn!(ticker = self.name, "ticker callback panicked");
        }
        debug!(ticker = self.name, "ticker stopped");
        true
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn fires_immediately_then_periodically() {
        let (count, cb) = counter();
        let mut ticker = Ticker::new("test");
        assert!(ticker.start(Duration::from_millis(5), cb));
        thread::sleep(Duration::from_millis(60));
        assert!(ticker.stop());
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn double_start_keeps_one_trigger() {
        let (first, cb1) = counter();
        let (second, cb2) = counter();
        let mut ticker = Ticker::new("test");
        assert!(ticker.start(Duration::from_millis(5), cb1));
        assert!(!ticker.start(Duration::from_millis(1), cb2));
        assert_eq!(ticker.interval(), Some(Duration::from_millis(5)));
        thread::sleep(Duration::from_millis(30));
        ticker.stop();
        assert!(first.load(Ordering::SeqCst) >= 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut ticker = Ticker::new("test");
        assert!(!ticker.stop());
        let (_, cb) = counter();
        ticker.start(Duration::from_millis(5), cb);
        assert!(ticker.stop());
        assert!(!ticker.stop());
        assert!(!ticker.is_running());
    }

    #[test]
    fn no_ticks_after_stop() {
        let (count, cb) = counter();
        let mut ticker = Ticker::new("test");
        ticker.start(Duration::from_millis(2), cb);
        thread::sleep(Duration::from_millis(20));
        ticker.stop();
        let frozen = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }

    #[test]
    fn restart_after_stop() {
        let (count, cb) = counter();
        let mut ticker = Ticker::new("test");
        ticker.start(Duration::from_secs(60), cb);
        ticker.stop();
        let (again, cb) = counter();
        assert!(ticker.start(Duration::from_secs(60), cb));
        ticker.stop();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(again.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let (count, cb) = counter();
        let mut ticker = Ticker::new("test");
        assert!(ticker.start(Duration::ZERO, cb));
        assert_eq!(ticker.interval(), Some(MIN_INTERVAL));
        thread::sleep(Duration::from_millis(20));
        ticker.stop();
        // a busy loop would run far more often than once per millisecond
        assert!(count.load(Ordering::SeqCst) <= 25);
    }

    #[test]
    fn thread_carries_ticker_name() {
        let name = Arc::new(parking_lot::Mutex::new(None));
        let seen = Arc::clone(&name);
        let mut ticker = Ticker::new("alien-clock");
        ticker.start(Duration::from_secs(60), move || {
            *seen.lock() = thread::current().name().map(str::to_owned);
        });
        ticker.stop();
        assert_eq!(name.lock().as_deref(), Some("alien-clock"));
    }

    #[test]
    fn drop_stops_thread() {
        let (count, cb) = counter();
        {
            let mut ticker = Ticker::new("test");
            ticker.start(Duration::from_millis(2), cb);
            thread::sleep(Duration::from_millis(10));
        }
        let frozen = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }
}
