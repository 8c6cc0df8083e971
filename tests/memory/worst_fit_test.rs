/*!
 * Worst-Fit Placement Tests
 * Selection, tie-breaking, splitting and allocation failures
 */

use partition_sim::memory::{MemoryError, PartitionTable, PartitionView};
use pretty_assertions::assert_eq;

fn view(start: usize, size: usize, allocated: bool) -> PartitionView {
    PartitionView {
        start,
        size,
        allocated,
    }
}

/// Build free holes of the given sizes separated by 1-unit allocated spacers
fn table_with_holes(holes: &[usize]) -> PartitionTable {
    let total = holes.iter().sum::<usize>() + holes.len();
    let mut table = PartitionTable::new(total).unwrap();

    let mut hole_starts = Vec::new();
    for (i, &size) in holes.iter().enumerate() {
        let hole = table.allocate(&format!("hole{}", i), size).unwrap();
        table.allocate(&format!("spacer{}", i), 1).unwrap();
        hole_starts.push(hole.start);
    }
    for start in hole_starts {
        table.free(start).unwrap();
    }

    table
}

#[test]
fn test_largest_eligible_partition_selected() {
    // holes: 50 @ 0, 200 @ 51, 80 @ 252
    let mut table = table_with_holes(&[50, 200, 80]);

    let allocation = table.allocate("P", 60).unwrap();

    assert_eq!(allocation.start, 51);
    assert_eq!(allocation.size, 60);
    assert_eq!(table.snapshot().at(111), Some(&view(111, 140, false)));
}

#[test]
fn test_tie_break_prefers_lower_address() {
    let mut table = table_with_holes(&[120, 40, 120]);

    let allocation = table.allocate("T", 100).unwrap();

    assert_eq!(allocation.start, 0);
    // the second 120 hole is untouched
    assert_eq!(table.snapshot().at(162), Some(&view(162, 120, false)));
}

#[test]
fn test_worst_fit_differs_from_best_fit() {
    let mut table = table_with_holes(&[100, 30]);

    // best fit would choose the 30 hole at 101
    let allocation = table.allocate("W", 25).unwrap();
    assert_eq!(allocation.start, 0);
}

#[test]
fn test_split_from_300() {
    let mut table = PartitionTable::new(1000).unwrap();
    table.allocate("X", 700).unwrap();

    let allocation = table.allocate("D", 230).unwrap();

    assert_eq!(allocation.start, 700);
    assert_eq!(
        table.snapshot().as_slice(),
        &[view(0, 700, true), view(700, 230, true), view(930, 70, false)]
    );
}

#[test]
fn test_exact_fit_keeps_partition_count() {
    let mut table = table_with_holes(&[64, 32]);
    let before = table.len();

    table.allocate("E", 64).unwrap();

    assert_eq!(table.len(), before);
    assert_eq!(table.snapshot().at(0), Some(&view(0, 64, true)));
}

#[test]
fn test_fill_whole_memory_then_fail() {
    let mut table = PartitionTable::new(100).unwrap();
    table.allocate("ALL", 100).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.allocate("MORE", 1).unwrap_err(),
        MemoryError::InsufficientSpace {
            requested: 1,
            largest_free: 0
        }
    );
}

#[test]
fn test_failures_leave_table_unchanged() {
    let mut table = table_with_holes(&[10, 20]);
    let before = table.snapshot();

    assert!(table.allocate("BIG", 21).is_err());
    assert!(table.allocate("ZERO", 0).is_err());
    assert!(table.free(1).is_err());
    assert!(table.free(5).is_err());

    assert_eq!(table.snapshot(), before);
    assert!(table.validate().is_ok());
}
