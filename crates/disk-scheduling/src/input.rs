//! Input collection and validation.
//!
//! The scheduling algorithms assume that every request and the initial head lie within the disk.
//! This module turns user-supplied values into a [`Workload`] which upholds that assumption.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;

use crate::direction::Direction;
use crate::trace::Track;

/// An error caused by invalid user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Request list contains no requests.
    EmptyRequestSet,
    /// A request lies outside of `[0, disk_size)`.
    OutOfRangeRequest { request: i64, disk_size: i64 },
    /// Initial head position lies outside of `[0, disk_size)`.
    OutOfRangeHead { head: i64, disk_size: i64 },
    /// A field value is not an integer.
    NonIntegerInput { field: &'static str, value: String },
    /// Disk size is not positive.
    InvalidDiskSize(i64),
    UnknownDirection(String),
    UnknownAlgorithm(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::EmptyRequestSet => write!(f, "No requests provided"),
            InputError::OutOfRangeRequest { request, disk_size } => write!(
                f,
                "All requests must be between 0 and {} (got {})",
                disk_size - 1,
                request
            ),
            InputError::OutOfRangeHead { head, disk_size } => write!(
                f,
                "Initial head position must be between 0 and {} (got {})",
                disk_size - 1,
                head
            ),
            InputError::NonIntegerInput { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            InputError::InvalidDiskSize(size) => write!(f, "Disk size must be positive (got {})", size),
            InputError::UnknownDirection(direction) => {
                write!(f, "Unknown direction '{}', expected left or right", direction)
            }
            InputError::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{}', expected one of FCFS, SSTF, SCAN, C-SCAN", name)
            }
        }
    }
}

impl Error for InputError {}

/// Parses an integer field.
///
/// Integers which do not fit into `i64` saturate, so that they are reported by the range checks
/// of [`Workload::new`] rather than as non-integers.
fn parse_integer(field: &'static str, value: &str) -> Result<i64, InputError> {
    let value = value.trim();
    value.parse().or_else(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InputError::NonIntegerInput {
            field,
            value: value.to_string(),
        }),
    })
}

/// Parses a comma-separated list of integers.
///
/// Whitespace around items is ignored, as are empty items (e.g. a trailing comma).
/// An empty list is not an error here, it is rejected when the [`Workload`] is built.
pub fn parse_requests(text: &str) -> Result<Vec<i64>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_integer("request", item))
        .collect()
}

/// Simulation parameters as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub requests: String,
    pub initial_head: String,
    pub disk_size: String,
    pub direction: String,
}

impl Default for RawInput {
    /// Textbook example: eight requests, head at track 53 on a 200-track disk.
    fn default() -> Self {
        Self {
            requests: "98,183,37,122,14,124,65,67".to_string(),
            initial_head: "53".to_string(),
            disk_size: "200".to_string(),
            direction: "right".to_string(),
        }
    }
}

impl RawInput {
    /// Parses and validates the parameters.
    pub fn parse(&self) -> Result<Workload, InputError> {
        let initial_head = parse_integer("initial head position", &self.initial_head)?;
        let disk_size = parse_integer("disk size", &self.disk_size)?;
        let requests = parse_requests(&self.requests)?;
        let direction = self.direction.parse()?;
        Workload::new(requests, initial_head, disk_size, direction)
    }
}

/// A validated set of simulation parameters.
///
/// Holds non-empty list of requests, with every request and the initial head within `[0, disk_size)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    requests: Vec<Track>,
    initial_head: Track,
    disk_size: Track,
    direction: Direction,
}

impl Workload {
    /// Creates workload from given values.
    ///
    /// Checks are performed in order: disk size, request list emptiness, requests range, head range.
    /// The first failed check determines the returned error.
    pub fn new(
        requests: Vec<i64>,
        initial_head: i64,
        disk_size: i64,
        direction: Direction,
    ) -> Result<Self, InputError> {
        if disk_size <= 0 {
            return Err(InputError::InvalidDiskSize(disk_size));
        }
        if requests.is_empty() {
            return Err(InputError::EmptyRequestSet);
        }
        let in_range = |value: i64| (0..disk_size).contains(&value);
        if let Some(&request) = requests.iter().find(|&&request| !in_range(request)) {
            return Err(InputError::OutOfRangeRequest { request, disk_size });
        }
        if !in_range(initial_head) {
            return Err(InputError::OutOfRangeHead {
                head: initial_head,
                disk_size,
            });
        }
        Ok(Self {
            requests: requests.into_iter().map(|request| request as Track).collect(),
            initial_head: initial_head as Track,
            disk_size: disk_size as Track,
            direction,
        })
    }

    pub fn requests(&self) -> &[Track] {
        &self.requests
    }

    pub fn initial_head(&self) -> Track {
        self.initial_head
    }

    pub fn disk_size(&self) -> Track {
        self.disk_size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a copy of the workload with another SCAN direction.
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }
}
