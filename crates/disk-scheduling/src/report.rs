//! Text reports for simulation results.

use itertools::Itertools;

use crate::simulation::{Comparison, SimulationResult};
use crate::trace::Track;

/// Formats head positions as `53 -> 65 -> 67`.
pub fn format_sequence(sequence: &[Track]) -> String {
    sequence.iter().join(" -> ")
}

/// Renders the report for a single algorithm.
pub fn format_result(result: &SimulationResult) -> String {
    let mut output = format!("=== {} Algorithm Results ===\n", result.algorithm);
    output += &format!("Sequence: {}\n", format_sequence(&result.sequence));
    output += &format!("Total Seek Time: {}\n", result.seek_time);
    output += &format!("Average Seek Time: {:.2}\n", result.average_seek_time);
    // counts visited positions, including moves to the disk edge
    output += &format!("Number of Requests: {}\n", result.sequence.len() - 1);
    output
}

/// Renders the report comparing several algorithms and naming the best one.
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = String::from("=== Algorithm Comparison ===\n\n");
    for result in &comparison.results {
        output += &format!("{}:\n", result.algorithm);
        output += &format!("  Total Seek Time: {}\n", result.seek_time);
        output += &format!("  Average Seek Time: {:.2}\n", result.average_seek_time);
        output += &format!("  Sequence: {}\n\n", format_sequence(&result.sequence));
    }
    if let Some(best) = comparison.best() {
        output += &format!(
            "Best Algorithm: {} (Lowest total seek time: {})\n",
            best.algorithm, best.seek_time
        );
    }
    output
}
