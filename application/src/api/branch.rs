//! [`Branch`]-related definitions.

use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// A clinic branch.
#[derive(Clone, Debug, From)]
pub struct Branch(domain::Branch);

/// A clinic branch.
#[graphql_object(context = Context)]
impl Branch {
    /// Unique identifier of this `Branch`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Branch.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of this `Branch`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Branch.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }
}

/// Unique identifier of a `Branch`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::branch::Id)]
#[into(domain::branch::Id)]
#[graphql(name = "BranchId", transparent)]
pub struct Id(Uuid);

/// Name of a `Branch`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "BranchName", with = scalar::Via::<domain::branch::Name>)]
pub struct Name(domain::branch::Name);
