//! Schedule entries definitions.
//!
//! These entries are owned by the clinic backend and only read here: a
//! [`DefaultWeekly`] entry describes where a [`Doctor`] works on a given
//! [`Weekday`], an [`Override`] replaces it for a single [`Date`], and an
//! [`Assignment`] carries the expected revenue of a confirmed working day.
//!
//! [`Doctor`]: crate::domain::Doctor

use common::{Amount, Date, Month, Weekday};

use crate::domain::{branch, doctor};

/// Recurring weekday entry of a [`Doctor`]'s default schedule.
///
/// Absence of an entry for a [`Weekday`] means the [`Doctor`] is off on that
/// day by default.
///
/// [`Doctor`]: crate::domain::Doctor
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DefaultWeekly {
    /// ID of the [`Doctor`] this entry belongs to.
    ///
    /// [`Doctor`]: crate::domain::Doctor
    pub doctor_id: doctor::Id,

    /// [`Weekday`] this entry applies to.
    pub weekday: Weekday,

    /// ID of the [`Branch`] the [`Doctor`] works at, if any.
    ///
    /// [`Branch`]: crate::domain::Branch
    /// [`Doctor`]: crate::domain::Doctor
    pub branch_id: Option<branch::Id>,
}

/// Exception superseding the [`DefaultWeekly`] schedule for a single [`Date`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Override {
    /// ID of the [`Doctor`] this [`Override`] belongs to.
    ///
    /// [`Doctor`]: crate::domain::Doctor
    pub doctor_id: doctor::Id,

    /// [`Date`] this [`Override`] applies to.
    pub date: Date,

    /// [`OverrideKind`] of this [`Override`].
    pub kind: OverrideKind,
}

/// Kind of an [`Override`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverrideKind {
    /// Working day at the [`Branch`] with the provided ID.
    ///
    /// [`Branch`]: crate::domain::Branch
    Working(branch::Id),

    /// Day off.
    Off,
}

/// Confirmed assignment of a [`Doctor`] to a [`Branch`] on a [`Date`].
///
/// [`Branch`]: crate::domain::Branch
/// [`Doctor`]: crate::domain::Doctor
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    /// ID of the assigned [`Doctor`].
    ///
    /// [`Doctor`]: crate::domain::Doctor
    pub doctor_id: doctor::Id,

    /// [`Date`] of this [`Assignment`].
    pub date: Date,

    /// ID of the [`Branch`] the [`Doctor`] is assigned to.
    ///
    /// [`Branch`]: crate::domain::Branch
    /// [`Doctor`]: crate::domain::Doctor
    pub branch_id: branch::Id,

    /// Revenue expected from this [`Assignment`], if estimated.
    pub expected_revenue: Option<Amount>,
}

/// [`Month`] of a specific [`Doctor`]'s schedule.
///
/// [`Doctor`]: crate::domain::Doctor
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Period {
    /// ID of the [`Doctor`].
    ///
    /// [`Doctor`]: crate::domain::Doctor
    pub doctor_id: doctor::Id,

    /// Scheduled [`Month`].
    pub month: Month,
}
