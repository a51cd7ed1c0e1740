//! Disk scheduling algorithms.
//!
//! Every algorithm is a pure function from pending requests and the initial head position to a
//! [`ScheduleResult`](crate::trace::ScheduleResult). The functions do not validate their input:
//! requests and the head are expected to lie within `[0, disk_size)`, see [`Workload`](crate::input::Workload).

pub mod cscan;
pub mod fcfs;
pub mod scan;
pub mod sstf;

pub use cscan::cscan;
pub use fcfs::fcfs;
pub use scan::scan;
pub use sstf::sstf;

use crate::trace::Track;

/// Splits requests into those strictly below the head and those at or above it.
///
/// Both parts are sorted ascending.
pub(crate) fn split_at_head(requests: &[Track], head: Track) -> (Vec<Track>, Vec<Track>) {
    let (mut left, mut right): (Vec<Track>, Vec<Track>) = requests.iter().partition(|&&track| track < head);
    left.sort_unstable();
    right.sort_unstable();
    (left, right)
}
