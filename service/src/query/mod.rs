//! [`Query`] definition.

pub mod branches;
pub mod doctor;
pub mod doctors;
pub mod schedule;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{infra::Backend, Service};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

pub use self::schedule::DoctorSchedule;

/// [`Query`] [`Select`]ing a `T`ype from a [`Backend`] as is.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct BackendQuery<T>(T);

impl<W, B> BackendQuery<By<W, B>> {
    /// Creates a new [`BackendQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Bk, W, B, E> Query<BackendQuery<By<W, B>>> for Service<Bk>
where
    Bk: Backend<Select<By<W, B>>, Ok = W, Err = Traced<E>>,
{
    type Ok = W;
    type Err = Traced<E>;

    async fn execute(
        &self,
        BackendQuery(by): BackendQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.backend()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!(=> E))
    }
}
