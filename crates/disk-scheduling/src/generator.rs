//! Random workload generation.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::trace::Track;

/// Generates `count` requests uniformly distributed over `[0, disk_size)`.
///
/// The same seed always produces the same requests. `disk_size` must be positive.
pub fn generate_requests(count: usize, disk_size: Track, seed: u64) -> Vec<Track> {
    let mut rand = Pcg64::seed_from_u64(seed);
    (0..count).map(|_| rand.gen_range(0..disk_size)).collect()
}
