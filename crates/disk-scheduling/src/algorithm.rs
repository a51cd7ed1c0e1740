//! Algorithm selection.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_iterator::IntoEnumIterator;
use serde::Serialize;

use crate::input::{InputError, Workload};
use crate::schedulers::{cscan, fcfs, scan, sstf};
use crate::trace::ScheduleResult;

/// Supported disk scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoEnumIterator)]
pub enum Algorithm {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SSTF")]
    Sstf,
    #[serde(rename = "SCAN")]
    Scan,
    #[serde(rename = "C-SCAN")]
    CScan,
}

impl Algorithm {
    /// Returns all algorithms in the order they appear in comparisons.
    pub fn all() -> Vec<Algorithm> {
        Algorithm::into_enum_iter().collect()
    }

    /// Runs the algorithm on the workload.
    pub fn run(&self, workload: &Workload) -> ScheduleResult {
        let requests = workload.requests();
        let head = workload.initial_head();
        match self {
            Algorithm::Fcfs => fcfs(requests, head),
            Algorithm::Sstf => sstf(requests, head),
            Algorithm::Scan => scan(requests, head, workload.disk_size(), workload.direction()),
            Algorithm::CScan => cscan(requests, head, workload.disk_size()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SSTF" => Ok(Algorithm::Sstf),
            "SCAN" => Ok(Algorithm::Scan),
            "C-SCAN" | "CSCAN" | "C_SCAN" => Ok(Algorithm::CScan),
            _ => Err(InputError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        };
        write!(f, "{}", name)
    }
}
