//! Running algorithms on workloads.

use log::info;
use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::input::Workload;
use crate::trace::Track;

/// Result of running a single algorithm on a workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    /// Head positions over time, starting with the initial head position.
    pub sequence: Vec<Track>,
    /// Total seek distance.
    pub seek_time: u64,
    /// Total seek distance divided by the number of requests.
    pub average_seek_time: f64,
    pub request_count: usize,
}

/// Runs the algorithm on the workload.
pub fn simulate(workload: &Workload, algorithm: Algorithm) -> SimulationResult {
    let schedule = algorithm.run(workload);
    let request_count = workload.requests().len();
    // workload always contains at least one request
    let average_seek_time = schedule.average_seek_time(request_count).unwrap_or(0.);
    info!(
        "{}: total seek time {}, average {:.2}",
        algorithm, schedule.seek_time, average_seek_time
    );
    SimulationResult {
        algorithm,
        sequence: schedule.sequence,
        seek_time: schedule.seek_time,
        average_seek_time,
        request_count,
    }
}

/// Results of several algorithms on the same workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub workload: Workload,
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// Returns the result with the lowest total seek time.
    ///
    /// On a tie the result of the algorithm that was run first wins.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.results.iter().min_by_key(|result| result.seek_time)
    }

    /// Returns the result of the given algorithm if it was run.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SimulationResult> {
        self.results.iter().find(|result| result.algorithm == algorithm)
    }
}

/// Runs all algorithms on the workload in the order FCFS, SSTF, SCAN, C-SCAN.
pub fn compare(workload: &Workload) -> Comparison {
    compare_selected(workload, &Algorithm::all())
}

/// Runs the given algorithms on the workload in the given order.
pub fn compare_selected(workload: &Workload, algorithms: &[Algorithm]) -> Comparison {
    Comparison {
        workload: workload.clone(),
        results: algorithms
            .iter()
            .map(|&algorithm| simulate(workload, algorithm))
            .collect(),
    }
}
