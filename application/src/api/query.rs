//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns all the clinic `Branch`es.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `UPSTREAM_UNAVAILABLE` - the clinic backend failed to respond.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "branches",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn branches(ctx: &Context) -> Result<Vec<api::Branch>, Error> {
        ctx.service()
            .execute(query::branches::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|branches| branches.into_iter().map(Into::into).collect())
    }

    /// Returns all the clinic `Doctor`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `UPSTREAM_UNAVAILABLE` - the clinic backend failed to respond.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "doctors",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn doctors(ctx: &Context) -> Result<Vec<api::Doctor>, Error> {
        ctx.service()
            .execute(query::doctors::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|doctors| doctors.into_iter().map(Into::into).collect())
    }

    /// Returns the `Doctor` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DOCTOR_NOT_EXISTS` - the `Doctor` with the specified ID does not
    ///                         exist;
    /// - `UPSTREAM_UNAVAILABLE` - the clinic backend failed to respond.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "doctor",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn doctor(
        id: api::doctor::Id,
        ctx: &Context,
    ) -> Result<api::Doctor, Error> {
        ctx.service()
            .execute(query::doctor::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| DoctorError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Schedule` of the `Doctor` with the specified ID resolved
    /// for the specified month.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_MONTH` - the specified `year` and `month` don't denote a
    ///                     valid month;
    /// - `UPSTREAM_UNAVAILABLE` - the clinic backend failed to respond.
    #[tracing::instrument(
        skip_all,
        fields(
            doctor.id = %doctor_id,
            year = year,
            month = month,
            gql.name = "doctorSchedule",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn doctor_schedule(
        doctor_id: api::doctor::Id,
        year: i32,
        month: i32,
        ctx: &Context,
    ) -> Result<api::Schedule, Error> {
        api::Schedule::fetch(doctor_id.into(), year, month, ctx).await
    }
}

define_error! {
    enum DoctorError {
        #[code = "DOCTOR_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Doctor` with the specified ID does not exist"]
        NotExists,
    }
}
