#![doc = include_str!("../README.md")]

pub mod algorithm;
pub mod config;
pub mod direction;
pub mod generator;
pub mod input;
pub mod report;
pub mod schedulers;
pub mod simulation;
pub mod trace;

pub use algorithm::Algorithm;
pub use direction::Direction;
pub use input::{InputError, RawInput, Workload};
pub use simulation::{compare, compare_selected, simulate, Comparison, SimulationResult};
pub use trace::{ScheduleResult, Track};

#[cfg(test)]
mod tests;
