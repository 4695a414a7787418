//! [`Doctor`]-related definitions.

use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context, Error};

/// A clinic doctor.
#[derive(Clone, Debug, From)]
pub struct Doctor(domain::Doctor);

/// A clinic doctor.
#[graphql_object(context = Context)]
impl Doctor {
    /// Unique identifier of this `Doctor`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Doctor.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Full name of this `Doctor`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Doctor.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Resolved `Schedule` of this `Doctor` for the specified month.
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
            doctor.id = %self.0.id,
            year = year,
            month = month,
            gql.name = "Doctor.schedule",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn schedule(
        &self,
        year: i32,
        month: i32,
        ctx: &Context,
    ) -> Result<api::Schedule, Error> {
        api::Schedule::fetch(self.0.id, year, month, ctx).await
    }
}

/// Unique identifier of a `Doctor`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::doctor::Id)]
#[into(domain::doctor::Id)]
#[graphql(name = "DoctorId", transparent)]
pub struct Id(Uuid);

/// Full name of a `Doctor`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "DoctorName", with = scalar::Via::<domain::doctor::Name>)]
pub struct Name(domain::doctor::Name);
