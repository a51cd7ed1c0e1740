//! Head movement bookkeeping shared by all scheduling algorithms.

use log::trace;
use serde::Serialize;

/// Track number on a disk.
pub type Track = u64;

/// Outcome of a single scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// Head positions over time, starting with the initial head position.
    pub sequence: Vec<Track>,
    /// Sum of absolute distances between consecutive positions in `sequence`.
    pub seek_time: u64,
}

impl ScheduleResult {
    /// Returns the number of positions in the sequence which do not correspond to serviced requests,
    /// i.e. moves to the disk edge and returns to track 0.
    pub fn boundary_hops(&self, request_count: usize) -> usize {
        self.sequence.len().saturating_sub(1 + request_count)
    }

    /// Returns the seek time per serviced request or `None` if there were no requests.
    pub fn average_seek_time(&self, request_count: usize) -> Option<f64> {
        if request_count == 0 {
            return None;
        }
        Some(self.seek_time as f64 / request_count as f64)
    }
}

/// Records head moves and accumulates seek distance.
pub(crate) struct HeadTrace {
    head: Track,
    sequence: Vec<Track>,
    seek_time: u64,
}

impl HeadTrace {
    pub fn new(initial_head: Track, expected_moves: usize) -> Self {
        let mut sequence = Vec::with_capacity(expected_moves + 1);
        sequence.push(initial_head);
        Self {
            head: initial_head,
            sequence,
            seek_time: 0,
        }
    }

    pub fn head(&self) -> Track {
        self.head
    }

    /// Moves the head to the given track.
    pub fn move_to(&mut self, track: Track) {
        let distance = self.head.abs_diff(track);
        trace!("head {} -> {} (distance {})", self.head, track, distance);
        self.seek_time += distance;
        self.head = track;
        self.sequence.push(track);
    }

    /// Visits tracks in the given order.
    pub fn visit_all<'a, I: IntoIterator<Item = &'a Track>>(&mut self, tracks: I) {
        for &track in tracks {
            self.move_to(track);
        }
    }

    pub fn finish(self) -> ScheduleResult {
        ScheduleResult {
            sequence: self.sequence,
            seek_time: self.seek_time,
        }
    }
}
