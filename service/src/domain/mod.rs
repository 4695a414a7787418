//! Domain definitions.

pub mod branch;
pub mod doctor;
pub mod schedule;

pub use self::{
    branch::Branch,
    doctor::Doctor,
    schedule::{Assignment, DefaultWeekly, Override},
};
