//! [`Query`] collection related to the multiple [`Branch`]es.

use common::operations::By;

use crate::domain::Branch;
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries all the known [`Branch`]es.
pub type List = BackendQuery<By<Vec<Branch>, ()>>;
