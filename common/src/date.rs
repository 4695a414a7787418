//! Calendar date utilities.

use std::{fmt, iter, str::FromStr};

use derive_more::{Display, Error};
use time::{
    format_description::StaticFormatDescription, macros::format_description,
};

use crate::define_kind;

/// `YYYY-MM-DD` format of a [`Date`].
const FORMAT: StaticFormatDescription =
    format_description!("[year]-[month]-[day]");

/// Calendar date without a time of day or an offset.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] out of the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Parses a new [`Date`] from the provided [ISO 8601] extended calendar
    /// `YYYY-MM-DD` string.
    ///
    /// Ordinal, week-based and basic (without separators) forms are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601
    pub fn parse_iso(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, FORMAT)
            .map(Self)
            .map_err(ParseError)
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month of this [`Date`] in `1..=12` range.
    #[must_use]
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    /// Returns the day of the month of this [`Date`] in `1..=31` range.
    #[must_use]
    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Returns the [`Weekday`] of this [`Date`].
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday().into()
    }

    /// Returns the [`Date`] following this one, if representable.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

/// Calendar month of a specific year.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month {
    /// First day of this [`Month`].
    first: time::Date,
}

impl Month {
    /// Creates a new [`Month`] of the provided `year` and `month` number in
    /// `1..=12` range.
    ///
    /// [`None`] is returned if the `month` is out of range or the `year` is not
    /// representable.
    #[must_use]
    pub fn new(year: i32, month: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        let first = time::Date::from_calendar_date(year, month, 1).ok()?;
        Some(Self { first })
    }

    /// Returns the year of this [`Month`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the number of this [`Month`] in `1..=12` range.
    #[must_use]
    pub fn number(self) -> u8 {
        self.first.month().into()
    }

    /// Returns the first day of this [`Month`].
    #[must_use]
    pub fn first_day(self) -> Date {
        Date(self.first)
    }

    /// Returns the last day of this [`Month`].
    #[must_use]
    pub fn last_day(self) -> Date {
        self.days().last().unwrap_or(Date(self.first))
    }

    /// Indicates whether the provided [`Date`] falls into this [`Month`].
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.number()
    }

    /// Iterates over all the days of this [`Month`] in order.
    pub fn days(self) -> impl Iterator<Item = Date> {
        iter::successors(Some(Date(self.first)), move |d| {
            d.next().filter(|next| self.contains(*next))
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.number())
    }
}

define_kind! {
    #[doc = "Day of a week, numbered from Sunday."]
    enum Weekday {
        #[doc = "Sunday."]
        Sunday = 0,

        #[doc = "Monday."]
        Monday = 1,

        #[doc = "Tuesday."]
        Tuesday = 2,

        #[doc = "Wednesday."]
        Wednesday = 3,

        #[doc = "Thursday."]
        Thursday = 4,

        #[doc = "Friday."]
        Friday = 5,

        #[doc = "Saturday."]
        Saturday = 6,
    }
}

impl From<time::Weekday> for Weekday {
    fn from(day: time::Weekday) -> Self {
        match day {
            time::Weekday::Sunday => Self::Sunday,
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{
        de::Error, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Date;

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            ser.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            let s = String::deserialize(de)?;
            Self::from_str(&s).map_err(D::Error::custom)
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in a `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = super::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::parse_iso(s).map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}
