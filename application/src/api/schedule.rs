//! [`Schedule`]-related definitions.

use common::{Amount, Date, Month};
use derive_more::From;
use juniper::{graphql_object, GraphQLEnum};
use service::{domain::doctor, query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// A doctor's schedule resolved for a whole month.
#[derive(Clone, Debug, From)]
pub struct Schedule(read::Schedule);

impl Schedule {
    /// Resolves the [`Schedule`] of the specified doctor for the month
    /// denoted by the provided `year` and `month` number.
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the provided `year` and `month` don't denote a valid [`Month`];
    /// - the clinic backend fails to respond.
    pub(crate) async fn fetch(
        doctor_id: doctor::Id,
        year: i32,
        month: i32,
        ctx: &Context,
    ) -> Result<Self, Error> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::new(year, m))
            .ok_or_else(|| MonthError::Invalid.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::DoctorSchedule { doctor_id, month })
            .await
            .map(Self)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}

/// A doctor's schedule resolved for a whole month.
#[graphql_object(context = Context)]
impl Schedule {
    /// Year of the resolved month.
    pub fn year(&self) -> i32 {
        self.0.month.year()
    }

    /// Number of the resolved month, starting from `1` for January.
    pub fn month(&self) -> i32 {
        i32::from(self.0.month.number())
    }

    /// Resolved days of the month, in calendar order.
    pub fn days(&self) -> Vec<Day> {
        self.0.days.iter().cloned().map(Day).collect()
    }

    /// Summary of the resolved days.
    pub fn summary(&self) -> Summary {
        Summary(self.0.summary)
    }
}

/// A single resolved day of a `Schedule`.
#[derive(Clone, Debug, From)]
pub struct Day(read::schedule::Day);

/// A single resolved day of a `Schedule`.
#[graphql_object(name = "ScheduleDay", context = Context)]
impl Day {
    /// Calendar date of this day.
    pub fn date(&self) -> Date {
        self.0.date
    }

    /// Indicates whether the doctor is off on this day.
    pub fn is_off(&self) -> bool {
        self.0.is_off()
    }

    /// Rule this day was resolved by.
    pub fn source(&self) -> Source {
        self.0.source.into()
    }

    /// ID of the branch the doctor works at on this day, as provided by the
    /// matched rule.
    ///
    /// Present even if the branch itself is unknown.
    pub fn branch_id(&self) -> Option<api::branch::Id> {
        self.0.branch_id().map(Into::into)
    }

    /// Branch the doctor works at on this day, if it's known.
    pub fn branch(&self) -> Option<api::Branch> {
        self.0.branch().cloned().map(Into::into)
    }

    /// Revenue expected on this day, if it's estimated.
    pub fn expected_revenue(&self) -> Option<Amount> {
        self.0.expected_revenue()
    }
}

/// Summary of a `Schedule`.
#[derive(Clone, Debug, From)]
pub struct Summary(read::schedule::Summary);

/// Summary of a `Schedule`.
#[graphql_object(name = "ScheduleSummary", context = Context)]
impl Summary {
    /// Number of days in the month.
    pub fn total_days(&self) -> i32 {
        i32::from(self.0.total_days)
    }

    /// Number of working days.
    pub fn working_days(&self) -> i32 {
        i32::from(self.0.working_days)
    }

    /// Number of working days resolved by an override.
    pub fn override_days(&self) -> i32 {
        i32::from(self.0.override_days)
    }

    /// Number of working days resolved by the default weekly schedule.
    pub fn default_days(&self) -> i32 {
        i32::from(self.0.default_days)
    }

    /// Number of days off, including the ones set by an override.
    pub fn off_days(&self) -> i32 {
        i32::from(self.0.off_days)
    }
}

/// Rule a `ScheduleDay` was resolved by.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ScheduleSource")]
pub enum Source {
    /// Date-specific override.
    Override,

    /// Default weekly schedule.
    Default,

    /// No rule matched, so the day is off.
    None,
}

impl From<read::schedule::Source> for Source {
    fn from(source: read::schedule::Source) -> Self {
        use read::schedule::Source as S;

        match source {
            S::Override => Self::Override,
            S::Default => Self::Default,
            S::None => Self::None,
        }
    }
}

define_error! {
    enum MonthError {
        #[code = "INVALID_MONTH"]
        #[status = BAD_REQUEST]
        #[message = "`year` and `month` must denote a valid month"]
        Invalid,
    }
}

#[cfg(test)]
mod spec {
    use service::read::schedule::Source as ReadSource;

    use super::Source;

    #[test]
    fn maps_every_source() {
        assert_eq!(Source::from(ReadSource::Override), Source::Override);
        assert_eq!(Source::from(ReadSource::Default), Source::Default);
        assert_eq!(Source::from(ReadSource::None), Source::None);
    }
}
