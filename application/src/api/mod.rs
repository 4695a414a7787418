//! GraphQL API definitions.

pub mod branch;
pub mod doctor;
mod query;
pub mod scalar;
pub mod schedule;

use juniper::{EmptyMutation, EmptySubscription};

use crate::Context;

pub use self::{
    branch::Branch,
    doctor::Doctor,
    query::Query,
    schedule::Schedule,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    EmptyMutation<Context>,
    EmptySubscription<Context>,
>;

/// Creates a new read-only [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}
