// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Alarms keyed to the alien time of day.

use crate::error::ValidationError;
use crate::timestamp::{check_hour, check_minute, check_second, AlienTimestamp};
use tracing::{debug, info};

/// An alarm at an alien `(hour, minute, second)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Alarm {
    hour: u8,
    minute: u8,
    second: u8,
    enabled: bool,
}

impl Alarm {
    /// Enabled alarm at the given time of day.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            hour: check_hour(hour)?,
            minute: check_minute(minute)?,
            second: check_second(second)?,
            enabled: true,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Enabled and matching the time of day of `now`.
    pub fn matches(&self, now: &AlienTimestamp) -> bool {
        self.enabled
            && self.hour == now.hour()
            && self.minute == now.minute()
            && self.second == now.second()
    }
}

/// Ordered, in-memory alarm list plus the "triggered" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmBook {
    alarms: Vec<Alarm>,
    triggered: bool,
}

impl AlarmBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alarm; returns its index.
    pub fn add(&mut self, alarm: Alarm) -> usize {
        self.alarms.push(alarm);
        debug!(alarm = %alarm.formatted_time(), "alarm added");
        self.alarms.len() - 1
    }

    /// Flip the enabled flag; returns the new state, or `None` for a bad index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let alarm = self.alarms.get_mut(index)?;
        alarm.enabled = !alarm.enabled;
        Some(alarm.enabled)
    }

    /// Remove and return the alarm at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Alarm> {
        (index < self.alarms.len()).then(|| self.alarms.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Alarm> {
        self.alarms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alarm> {
        self.alarms.iter()
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn dismiss(&mut self) {
        self.triggered = false;
    }

    /// Compare `now` against the alarms in list order.
    ///
    /// The first enabled match raises the triggered flag and its index is
    /// returned. A raised flag stays up until [`dismiss`](Self::dismiss).
    pub fn check(&mut self, now: &AlienTimestamp) -> Option<usize> {
        let index = self.alarms.iter().position(|a| a.matches(now))?;
        if !self.triggered {
            info!(alarm = %self.alarms[index].formatted_time(), "alarm triggered");
        }
        self.triggered = true;
        Some(index)
    }
}

impl<'a> IntoIterator for &'a AlarmBook {
    type Item = &'a Alarm;
    type IntoIter = std::slice::Iter<'a, Alarm>;

    fn into_iter(self) -> Self::IntoIter {
        self.alarms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> AlienTimestamp {
        AlienTimestamp::new(2804, 1, 1, hour, minute, second).unwrap()
    }

    #[test]
    fn alarm_validation() {
        assert!(Alarm::new(35, 89, 89).is_ok());
        assert_eq!(Alarm::new(36, 0, 0).unwrap_err().field(), "hour");
        assert_eq!(Alarm::new(0, 90, 0).unwrap_err().field(), "minute");
        assert_eq!(Alarm::new(0, 0, 90).unwrap_err().field(), "second");
    }

    #[test]
    fn alarm_format() {
        assert_eq!(Alarm::new(3, 4, 5).unwrap().formatted_time(), "03:04:05");
    }

    #[test]
    fn check_triggers_on_match() {
        let mut book = AlarmBook::new();
        book.add(Alarm::new(1, 2, 3).unwrap());
        assert_eq!(book.check(&at(1, 2, 4)), None);
        assert!(!book.is_triggered());
        assert_eq!(book.check(&at(1, 2, 3)), Some(0));
        assert!(book.is_triggered());
        book.dismiss();
        assert!(!book.is_triggered());
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let mut book = AlarmBook::new();
        book.add(Alarm::new(9, 9, 9).unwrap());
        book.add(Alarm::new(1, 2, 3).unwrap());
        book.add(Alarm::new(1, 2, 3).unwrap());
        assert_eq!(book.check(&at(1, 2, 3)), Some(1));
    }

    #[test]
    fn disabled_alarms_never_fire() {
        let mut book = AlarmBook::new();
        let i = book.add(Alarm::new(1, 2, 3).unwrap());
        assert_eq!(book.toggle(i), Some(false));
        assert_eq!(book.check(&at(1, 2, 3)), None);
        assert_eq!(book.toggle(i), Some(true));
        assert_eq!(book.check(&at(1, 2, 3)), Some(0));
    }

    #[test]
    fn bad_indices_are_ignored() {
        let mut book = AlarmBook::new();
        assert_eq!(book.toggle(0), None);
        assert_eq!(book.remove(3), None);
        book.add(Alarm::new(0, 0, 0).unwrap());
        assert_eq!(book.remove(0), Some(Alarm::new(0, 0, 0).unwrap()));
        assert!(book.is_empty());
    }

    #[test]
    fn date_is_not_compared() {
        let mut book = AlarmBook::new();
        book.add(Alarm::new(5, 5, 5).unwrap());
        let other_day = AlienTimestamp::new(-3, 17, 44, 5, 5, 5).unwrap();
        assert_eq!(book.check(&other_day), Some(0));
    }

    #[test]
    fn iteration_preserves_order() {
        let mut book = AlarmBook::new();
        book.add(Alarm::new(2, 0, 0).unwrap());
        book.add(Alarm::new(1, 0, 0).unwrap());
        let hours: Vec<u8> = book.iter().map(Alarm::hour).collect();
        assert_eq!(hours, vec![2, 1]);
        assert_eq!((&book).into_iter().count(), book.len());
        assert_eq!(book.get(1).map(Alarm::hour), Some(1));
    }
}
