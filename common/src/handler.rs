//! [`Handler`] abstractions.
//!
//! Queries, backend requests and other operations are all expressed as a
//! [`Handler`] parametrized by the type of its arguments, so a single value
//! (like a `Service` or a backend client) may handle many operations.

use std::future::Future;

/// Asynchronous handler of `Args`.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
