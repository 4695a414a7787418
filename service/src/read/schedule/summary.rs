//! [`Summary`] of resolved [`Day`]s.
//!
//! Every [`Day`] is counted in exactly one of [`Summary::default_days`],
//! [`Summary::override_days`] and [`Summary::off_days`].

use super::{Day, Source};

/// Counts of resolved [`Day`]s.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Total number of [`Day`]s.
    pub total_days: u16,

    /// Number of working [`Day`]s.
    pub working_days: u16,

    /// Number of working [`Day`]s resolved by an `Override`.
    pub override_days: u16,

    /// Number of working [`Day`]s resolved by a `DefaultWeekly` entry.
    pub default_days: u16,

    /// Number of [`Day`]s off, including the ones set by an `Override`.
    pub off_days: u16,
}

impl Summary {
    /// Counts the provided [`Day`]s.
    #[must_use]
    pub fn of<'d>(days: impl IntoIterator<Item = &'d Day>) -> Self {
        days.into_iter().fold(Self::default(), |mut s, day| {
            s.total_days += 1;
            if day.is_off() {
                s.off_days += 1;
                return s;
            }
            s.working_days += 1;
            match day.source {
                Source::Override => s.override_days += 1,
                Source::Default => s.default_days += 1,
                Source::None => {}
            }
            s
        })
    }
}
