// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// A timestamp field fell outside the alien calendar's bounds.
///
/// Each variant carries the rejected value and the inclusive range it had
/// to fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("month {value} is out of range {min}..={max}")]
    Month { value: u32, min: u8, max: u8 },

    #[error("day {value} is out of range {min}..={max} for month {month}")]
    Day {
        value: u32,
        month: u8,
        min: u8,
        max: u8,
    },

    #[error("hour {value} is out of range {min}..={max}")]
    Hour { value: u32, min: u8, max: u8 },

    #[error("minute {value} is out of range {min}..={max}")]
    Minute { value: u32, min: u8, max: u8 },

    #[error("second {value} is out of range {min}..={max}")]
    Second { value: u32, min: u8, max: u8 },
}

impl ValidationError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Month { .. } => "month",
            Self::Day { .. } => "day",
            Self::Hour { .. } => "hour",
            Self::Minute { .. } => "minute",
            Self::Second { .. } => "second",
        }
    }

    /// Inclusive range the field must fall into.
    pub const fn bounds(&self) -> (u8, u8) {
        match *self {
            Self::Month { min, max, .. }
            | Self::Day { min, max, .. }
            | Self::Hour { min, max, .. }
            | Self::Minute { min, max, .. }
            | Self::Second { min, max, .. } => (min, max),
        }
    }
}
