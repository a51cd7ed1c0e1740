//! SCAN (elevator) algorithm.

use log::debug;

use crate::direction::Direction;
use crate::schedulers::split_at_head;
use crate::trace::{HeadTrace, ScheduleResult, Track};

/// Sweeps in the given direction servicing requests, then reverses.
///
/// Requests at the head position belong to the right side. The head travels to the disk edge
/// (track 0 or `disk_size - 1`) before reversing only if there are requests on both sides.
pub fn scan(requests: &[Track], initial_head: Track, disk_size: Track, direction: Direction) -> ScheduleResult {
    let (mut left, right) = split_at_head(requests, initial_head);
    // nearest to the head first
    left.reverse();

    let mut trace = HeadTrace::new(initial_head, requests.len() + 1);
    let reverses = !left.is_empty() && !right.is_empty();
    match direction {
        Direction::Right => {
            trace.visit_all(&right);
            if reverses {
                trace.move_to(disk_size - 1);
            }
            trace.visit_all(&left);
        }
        Direction::Left => {
            trace.visit_all(&left);
            if reverses {
                trace.move_to(0);
            }
            trace.visit_all(&right);
        }
    }

    let result = trace.finish();
    debug!(
        "SCAN ({}): {} requests, seek time {}",
        direction,
        requests.len(),
        result.seek_time
    );
    result
}
