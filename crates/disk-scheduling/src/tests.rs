use crate::algorithm::Algorithm;
use crate::direction::Direction;
use crate::schedulers::{cscan, fcfs, scan, sstf};
use crate::trace::Track;

///////////////////////////////////////////////////////////////////////////////

const REQUESTS: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];
const INITIAL_HEAD: Track = 53;
const DISK_SIZE: Track = 200;

fn seek_distance(sequence: &[Track]) -> u64 {
    sequence.windows(2).map(|w| w[0].abs_diff(w[1])).sum()
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn fcfs_textbook() {
    let result = fcfs(&REQUESTS, INITIAL_HEAD);
    assert_eq!(result.sequence, vec![53, 98, 183, 37, 122, 14, 124, 65, 67]);
    assert_eq!(result.seek_time, 640);
}

#[test]
fn sstf_textbook() {
    let result = sstf(&REQUESTS, INITIAL_HEAD);
    assert_eq!(result.sequence, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
    assert_eq!(result.seek_time, 236);
}

#[test]
fn scan_right_textbook() {
    let result = scan(&REQUESTS, INITIAL_HEAD, DISK_SIZE, Direction::Right);
    assert_eq!(result.sequence, vec![53, 65, 67, 98, 122, 124, 183, 199, 37, 14]);
    assert_eq!(result.seek_time, 331);
    assert_eq!(result.boundary_hops(REQUESTS.len()), 1);
}

#[test]
fn scan_left_textbook() {
    let result = scan(&REQUESTS, INITIAL_HEAD, DISK_SIZE, Direction::Left);
    assert_eq!(result.sequence, vec![53, 37, 14, 0, 65, 67, 98, 122, 124, 183]);
    assert_eq!(result.seek_time, 236);
}

#[test]
fn cscan_textbook() {
    let result = cscan(&REQUESTS, INITIAL_HEAD, DISK_SIZE);
    assert_eq!(result.sequence, vec![53, 65, 67, 98, 122, 124, 183, 199, 0, 14, 37]);
    assert_eq!(result.seek_time, 382);
    assert_eq!(result.boundary_hops(REQUESTS.len()), 2);
}

#[test]
fn seek_time_matches_sequence() {
    let results = vec![
        fcfs(&REQUESTS, INITIAL_HEAD),
        sstf(&REQUESTS, INITIAL_HEAD),
        scan(&REQUESTS, INITIAL_HEAD, DISK_SIZE, Direction::Right),
        scan(&REQUESTS, INITIAL_HEAD, DISK_SIZE, Direction::Left),
        cscan(&REQUESTS, INITIAL_HEAD, DISK_SIZE),
    ];
    for result in results {
        assert_eq!(result.seek_time, seek_distance(&result.sequence));
    }
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn empty_requests() {
    let results = vec![
        fcfs(&[], INITIAL_HEAD),
        sstf(&[], INITIAL_HEAD),
        scan(&[], INITIAL_HEAD, DISK_SIZE, Direction::Right),
        scan(&[], INITIAL_HEAD, DISK_SIZE, Direction::Left),
        cscan(&[], INITIAL_HEAD, DISK_SIZE),
    ];
    for result in results {
        assert_eq!(result.sequence, vec![INITIAL_HEAD]);
        assert_eq!(result.seek_time, 0);
        assert_eq!(result.average_seek_time(0), None);
    }
}

#[test]
fn single_request_at_head() {
    let requests = [INITIAL_HEAD];
    let results = vec![
        fcfs(&requests, INITIAL_HEAD),
        sstf(&requests, INITIAL_HEAD),
        scan(&requests, INITIAL_HEAD, DISK_SIZE, Direction::Right),
        scan(&requests, INITIAL_HEAD, DISK_SIZE, Direction::Left),
        cscan(&requests, INITIAL_HEAD, DISK_SIZE),
    ];
    for result in results {
        assert_eq!(result.sequence, vec![INITIAL_HEAD, INITIAL_HEAD]);
        assert_eq!(result.seek_time, 0);
    }
}

#[test]
fn sstf_tie_prefers_earlier_request() {
    let result = sstf(&[40, 60], 50);
    assert_eq!(result.sequence, vec![50, 40, 60]);
    assert_eq!(result.seek_time, 30);

    let result = sstf(&[60, 40], 50);
    assert_eq!(result.sequence, vec![50, 60, 40]);
    assert_eq!(result.seek_time, 30);
}

#[test]
fn sstf_duplicates() {
    let result = sstf(&[30, 10, 30], 20);
    assert_eq!(result.sequence, vec![20, 30, 30, 10]);
    assert_eq!(result.seek_time, 30);
}

#[test]
fn fcfs_keeps_duplicates_and_order() {
    let result = fcfs(&[10, 10, 5], 10);
    assert_eq!(result.sequence, vec![10, 10, 10, 5]);
    assert_eq!(result.seek_time, 5);
}

#[test]
fn scan_without_reversal_skips_edge() {
    // only requests below the head, moving right
    let result = scan(&[10, 50], 100, DISK_SIZE, Direction::Right);
    assert_eq!(result.sequence, vec![100, 50, 10]);
    assert_eq!(result.seek_time, 90);

    // only requests above the head, moving left
    let result = scan(&[150, 120], 100, DISK_SIZE, Direction::Left);
    assert_eq!(result.sequence, vec![100, 120, 150]);
    assert_eq!(result.seek_time, 50);
}

#[test]
fn scan_request_at_head_belongs_to_right_side() {
    let result = scan(&[53, 20], 53, DISK_SIZE, Direction::Left);
    assert_eq!(result.sequence, vec![53, 20, 0, 53]);
    assert_eq!(result.seek_time, 106);

    let result = scan(&[53, 20], 53, DISK_SIZE, Direction::Right);
    assert_eq!(result.sequence, vec![53, 53, 199, 20]);
    assert_eq!(result.seek_time, 325);
}

#[test]
fn cscan_single_side() {
    let result = cscan(&[50, 10], 100, DISK_SIZE);
    assert_eq!(result.sequence, vec![100, 10, 50]);
    assert_eq!(result.seek_time, 130);

    let result = cscan(&[50, 20], 10, DISK_SIZE);
    assert_eq!(result.sequence, vec![10, 20, 50]);
    assert_eq!(result.seek_time, 40);
}

#[test]
fn cscan_head_at_last_track() {
    let result = cscan(&[199, 5], 199, DISK_SIZE);
    assert_eq!(result.sequence, vec![199, 199, 199, 0, 5]);
    assert_eq!(result.seek_time, 204);
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn algorithm_names() {
    let names: Vec<String> = Algorithm::all().iter().map(|a| a.to_string()).collect();
    assert_eq!(names, vec!["FCFS", "SSTF", "SCAN", "C-SCAN"]);

    assert_eq!("sstf".parse::<Algorithm>(), Ok(Algorithm::Sstf));
    assert_eq!("c-scan".parse::<Algorithm>(), Ok(Algorithm::CScan));
    assert_eq!("CSCAN".parse::<Algorithm>(), Ok(Algorithm::CScan));
    assert!("LOOK".parse::<Algorithm>().is_err());

    let serialized: Vec<String> = Algorithm::all()
        .iter()
        .map(|a| serde_json::to_string(a).unwrap())
        .collect();
    assert_eq!(serialized, vec!["\"FCFS\"", "\"SSTF\"", "\"SCAN\"", "\"C-SCAN\""]);
}

#[test]
fn direction_names() {
    assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
    assert_eq!(" right ".parse::<Direction>(), Ok(Direction::Right));
    assert!("up".parse::<Direction>().is_err());
    assert_eq!(Direction::Left.to_string(), "left");
    assert_eq!(Direction::default(), Direction::Right);
}
