//! Circular SCAN algorithm.

use log::debug;

use crate::schedulers::split_at_head;
use crate::trace::{HeadTrace, ScheduleResult, Track};

/// Sweeps towards higher tracks only.
///
/// After servicing the requests at or above the head, the head travels to the last track
/// and returns to track 0 before servicing the remaining requests in ascending order.
/// The return costs `disk_size - 1` and is included in the seek time.
/// The edge move and the return happen only if there are requests on both sides of the head.
pub fn cscan(requests: &[Track], initial_head: Track, disk_size: Track) -> ScheduleResult {
    let (left, right) = split_at_head(requests, initial_head);

    let mut trace = HeadTrace::new(initial_head, requests.len() + 2);
    trace.visit_all(&right);
    if !left.is_empty() && !right.is_empty() {
        trace.move_to(disk_size - 1);
        trace.move_to(0);
    }
    trace.visit_all(&left);

    let result = trace.finish();
    debug!("C-SCAN: {} requests, seek time {}", requests.len(), result.seek_time);
    result
}
