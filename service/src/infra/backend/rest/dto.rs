//! Wire representations of the clinic backend entries.

use common::{Amount, Date, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing as log;

use crate::domain::{self, branch, doctor, schedule::OverrideKind};

/// Converts the provided wire `entries` into domain ones, skipping and
/// reporting the malformed ones.
pub(super) fn convert<D, T>(entries: Vec<D>) -> Vec<T>
where
    T: TryFrom<D, Error = String>,
{
    entries
        .into_iter()
        .filter_map(|e| {
            T::try_from(e)
                .map_err(|e| log::warn!("malformed backend entry skipped: {e}"))
                .ok()
        })
        .collect()
}

/// [`domain::Branch`] on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct Branch {
    /// ID of the branch.
    id: branch::Id,

    /// Name of the branch.
    name: String,
}

impl TryFrom<Branch> for domain::Branch {
    type Error = String;

    fn try_from(Branch { id, name }: Branch) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: branch::Name::new(name)
                .ok_or_else(|| format!("invalid name of `Branch({id})`"))?,
        })
    }
}

/// [`domain::Doctor`] on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct Doctor {
    /// ID of the doctor.
    id: doctor::Id,

    /// Name of the doctor.
    name: String,
}

impl TryFrom<Doctor> for domain::Doctor {
    type Error = String;

    fn try_from(Doctor { id, name }: Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: doctor::Name::new(name)
                .ok_or_else(|| format!("invalid name of `Doctor({id})`"))?,
        })
    }
}

/// [`domain::DefaultWeekly`] entry on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct DefaultWeekly {
    /// ID of the doctor.
    doctor_id: doctor::Id,

    /// Day of the week, where `0` is Sunday.
    day_of_week: u8,

    /// ID of the branch, if any.
    #[serde(default)]
    branch_id: Option<branch::Id>,
}

impl TryFrom<DefaultWeekly> for domain::DefaultWeekly {
    type Error = String;

    fn try_from(dto: DefaultWeekly) -> Result<Self, Self::Error> {
        let DefaultWeekly {
            doctor_id,
            day_of_week,
            branch_id,
        } = dto;

        Ok(Self {
            doctor_id,
            weekday: Weekday::from_u8(day_of_week).ok_or_else(|| {
                format!(
                    "`day_of_week` of `Doctor({doctor_id})` is out of range: \
                     {day_of_week}",
                )
            })?,
            branch_id,
        })
    }
}

/// Type of an [`Override`].
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OverrideType {
    /// Working day.
    Working,

    /// Day off.
    Off,

    /// Type unknown to this client.
    #[serde(other)]
    Unknown,
}

/// [`domain::Override`] on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct Override {
    /// ID of the doctor.
    doctor_id: doctor::Id,

    /// Overridden date.
    date: Date,

    /// Type of this override.
    #[serde(rename = "type")]
    kind: OverrideType,

    /// ID of the branch, required for a working day.
    #[serde(default)]
    branch_id: Option<branch::Id>,
}

impl TryFrom<Override> for domain::Override {
    type Error = String;

    fn try_from(dto: Override) -> Result<Self, Self::Error> {
        let Override {
            doctor_id,
            date,
            kind,
            branch_id,
        } = dto;

        let kind = match (kind, branch_id) {
            (OverrideType::Working, Some(id)) => OverrideKind::Working(id),
            (OverrideType::Working, None) => {
                return Err(format!(
                    "working `Override` of `Doctor({doctor_id})` on {date} \
                     has no `branch_id`",
                ));
            }
            (OverrideType::Off, _) => OverrideKind::Off,
            (OverrideType::Unknown, _) => {
                return Err(format!(
                    "`Override` of `Doctor({doctor_id})` on {date} has \
                     unknown `type`",
                ));
            }
        };

        Ok(Self {
            doctor_id,
            date,
            kind,
        })
    }
}

/// [`domain::Assignment`] on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct Assignment {
    /// ID of the doctor.
    doctor_id: doctor::Id,

    /// Assigned date.
    date: Date,

    /// ID of the branch.
    branch_id: branch::Id,

    /// Expected revenue, if estimated.
    #[serde(default)]
    expected_revenue: Option<Decimal>,
}

impl TryFrom<Assignment> for domain::Assignment {
    type Error = String;

    fn try_from(dto: Assignment) -> Result<Self, Self::Error> {
        let Assignment {
            doctor_id,
            date,
            branch_id,
            expected_revenue,
        } = dto;

        Ok(Self {
            doctor_id,
            date,
            branch_id,
            expected_revenue: expected_revenue
                .map(|r| {
                    Amount::new(r).ok_or_else(|| {
                        format!(
                            "negative `expected_revenue` of \
                             `Doctor({doctor_id})` on {date}: {r}",
                        )
                    })
                })
                .transpose()?,
        })
    }
}
