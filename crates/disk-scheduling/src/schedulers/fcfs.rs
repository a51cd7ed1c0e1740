//! First Come First Serve.

use log::debug;

use crate::trace::{HeadTrace, ScheduleResult, Track};

/// Services requests in the order they were submitted.
pub fn fcfs(requests: &[Track], initial_head: Track) -> ScheduleResult {
    let mut trace = HeadTrace::new(initial_head, requests.len());
    trace.visit_all(requests);
    let result = trace.finish();
    debug!("FCFS: {} requests, seek time {}", requests.len(), result.seek_time);
    result
}
