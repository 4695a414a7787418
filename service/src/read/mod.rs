//! Read entities definitions.

pub mod schedule;

pub use self::schedule::Schedule;
