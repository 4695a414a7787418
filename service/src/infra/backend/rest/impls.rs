//! [`Backend`] implementations of the [`Rest`] client.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        doctor, schedule::Period, Assignment, Branch, DefaultWeekly, Doctor,
        Override,
    },
    infra::{backend, Backend},
};

use super::{dto, Rest};

/// Query parameters selecting the whole month of the provided [`Period`].
fn month_range(period: Period) -> [(&'static str, String); 2] {
    [
        ("from", period.month.first_day().to_string()),
        ("to", period.month.last_day().to_string()),
    ]
}

impl Backend<Select<By<Vec<Branch>, ()>>> for Rest {
    type Ok = Vec<Branch>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Branch>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get::<Vec<dto::Branch>>("branches", &[])
            .await
            .map_err(tracerr::wrap!())
            .map(dto::convert)
    }
}

impl Backend<Select<By<Vec<Doctor>, ()>>> for Rest {
    type Ok = Vec<Doctor>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Doctor>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get::<Vec<dto::Doctor>>("doctors", &[])
            .await
            .map_err(tracerr::wrap!())
            .map(dto::convert)
    }
}

impl Backend<Select<By<Option<Doctor>, doctor::Id>>> for Rest {
    type Ok = Option<Doctor>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Doctor>, doctor::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .get_opt::<dto::Doctor>(&format!("doctors/{id}"), &[])
            .await
            .map_err(tracerr::wrap!())?
            .and_then(|d| dto::convert(vec![d]).pop()))
    }
}

impl Backend<Select<By<Vec<DefaultWeekly>, doctor::Id>>> for Rest {
    type Ok = Vec<DefaultWeekly>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<DefaultWeekly>, doctor::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.get::<Vec<dto::DefaultWeekly>>(
            &format!("doctors/{id}/default-schedules"),
            &[],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(dto::convert)
    }
}

impl Backend<Select<By<Vec<Override>, Period>>> for Rest {
    type Ok = Vec<Override>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Override>, Period>>,
    ) -> Result<Self::Ok, Self::Err> {
        let period = by.into_inner();
        let overrides: Vec<Override> = self
            .get::<Vec<dto::Override>>(
                &format!("doctors/{}/schedule-overrides", period.doctor_id),
                &month_range(period),
            )
            .await
            .map_err(tracerr::wrap!())
            .map(dto::convert)?;

        Ok(overrides
            .into_iter()
            .filter(|o| period.month.contains(o.date))
            .collect())
    }
}

impl Backend<Select<By<Vec<Assignment>, Period>>> for Rest {
    type Ok = Vec<Assignment>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Assignment>, Period>>,
    ) -> Result<Self::Ok, Self::Err> {
        let period = by.into_inner();
        let assignments: Vec<Assignment> = self
            .get::<Vec<dto::Assignment>>(
                &format!("doctors/{}/assignments", period.doctor_id),
                &month_range(period),
            )
            .await
            .map_err(tracerr::wrap!())
            .map(dto::convert)?;

        Ok(assignments
            .into_iter()
            .filter(|a| period.month.contains(a.date))
            .collect())
    }
}
