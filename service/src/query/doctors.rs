//! [`Query`] collection related to the multiple [`Doctor`]s.

use common::operations::By;

use crate::domain::Doctor;
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries all the known [`Doctor`]s.
pub type List = BackendQuery<By<Vec<Doctor>, ()>>;
