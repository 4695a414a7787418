//! Resolved [`Schedule`] read model definitions.

mod resolver;
mod summary;

use common::{define_kind, Amount, Date, Month};

use crate::domain::{branch, Assignment, Branch, DefaultWeekly, Override};

pub use self::{resolver::Resolver, summary::Summary};

/// Immutable snapshot of the backend entries a [`Schedule`] is resolved from.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// [`DefaultWeekly`] entries.
    pub defaults: Vec<DefaultWeekly>,

    /// [`Override`]s of the resolved period.
    pub overrides: Vec<Override>,

    /// [`Assignment`]s of the resolved period.
    pub assignments: Vec<Assignment>,

    /// Known [`Branch`]es to look the scheduled ones up in.
    pub branches: Vec<Branch>,
}

/// Doctor's schedule resolved for a whole [`Month`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    /// Resolved [`Month`].
    pub month: Month,

    /// Resolved [`Day`]s of the [`Month`], in order.
    pub days: Vec<Day>,

    /// [`Summary`] of the [`Day`]s.
    pub summary: Summary,
}

/// Single resolved day of a [`Schedule`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Day {
    /// [`Date`] of this [`Day`].
    pub date: Date,

    /// [`Source`] rule this [`Day`] was resolved by.
    pub source: Source,

    /// Resolved [`Status`] of this [`Day`].
    pub status: Status,
}

impl Day {
    /// Creates a new day off resolved by the provided [`Source`].
    #[must_use]
    pub fn off(date: Date, source: Source) -> Self {
        Self {
            date,
            source,
            status: Status::Off,
        }
    }

    /// Indicates whether this [`Day`] is a day off.
    #[must_use]
    pub fn is_off(&self) -> bool {
        matches!(self.status, Status::Off)
    }

    /// Returns the [`Working`] details of this [`Day`], if it's a working one.
    #[must_use]
    pub fn working(&self) -> Option<&Working> {
        match &self.status {
            Status::Working(w) => Some(w),
            Status::Off => None,
        }
    }

    /// Returns the scheduled [`Branch`] ID as provided by the matched rule,
    /// whether it's known or not.
    #[must_use]
    pub fn branch_id(&self) -> Option<branch::Id> {
        self.working().and_then(|w| w.branch_id)
    }

    /// Returns the scheduled [`Branch`], if it's known.
    #[must_use]
    pub fn branch(&self) -> Option<&Branch> {
        self.working().and_then(|w| w.branch.as_ref())
    }

    /// Returns the revenue expected on this [`Day`], if any.
    #[must_use]
    pub fn expected_revenue(&self) -> Option<Amount> {
        self.working().and_then(|w| w.expected_revenue)
    }
}

/// Status of a resolved [`Day`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// Day off.
    Off,

    /// [`Working`] day.
    Working(Working),
}

/// Details of a working [`Day`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Working {
    /// Raw ID of the scheduled [`Branch`], if the matched rule has one.
    pub branch_id: Option<branch::Id>,

    /// Scheduled [`Branch`], if its ID resolves to a known one.
    pub branch: Option<Branch>,

    /// Revenue expected from the [`Assignment`] on this day, if any.
    pub expected_revenue: Option<Amount>,
}

define_kind! {
    #[doc = "Rule a [`Day`] was resolved by."]
    enum Source {
        #[doc = "Date-specific `Override`."]
        Override = 1,

        #[doc = "`DefaultWeekly` entry of the day's weekday."]
        Default = 2,

        #[doc = "No rule matched, so the day is off."]
        None = 3,
    }
}
