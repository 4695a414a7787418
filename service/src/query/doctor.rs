//! [`Query`] collection related to a single [`Doctor`].

use common::operations::By;

use crate::domain::{doctor, Doctor};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries a [`Doctor`] by its [`doctor::Id`].
pub type ById = BackendQuery<By<Option<Doctor>, doctor::Id>>;
