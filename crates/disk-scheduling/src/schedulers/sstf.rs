//! Shortest Seek Time First.

use log::debug;

use crate::trace::{HeadTrace, ScheduleResult, Track};

/// Repeatedly services the pending request closest to the current head position.
///
/// Pending requests keep their submission order, so on a tie the earliest submitted request wins.
/// Runs in quadratic time.
pub fn sstf(requests: &[Track], initial_head: Track) -> ScheduleResult {
    let mut trace = HeadTrace::new(initial_head, requests.len());
    let mut pending = requests.to_vec();

    while !pending.is_empty() {
        let head = trace.head();
        let mut closest = 0;
        for (i, &track) in pending.iter().enumerate().skip(1) {
            if track.abs_diff(head) < pending[closest].abs_diff(head) {
                closest = i;
            }
        }
        trace.move_to(pending.remove(closest));
    }

    let result = trace.finish();
    debug!("SSTF: {} requests, seek time {}", requests.len(), result.seek_time);
    result
}
