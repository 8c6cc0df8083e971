/*!
 * Coalescing Tests
 * Merging freed partitions with free neighbours
 */

use partition_sim::memory::{MemoryError, PartitionTable, PartitionView};
use partition_sim::monitoring::{Collector, Payload};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn view(start: usize, size: usize, allocated: bool) -> PartitionView {
    PartitionView {
        start,
        size,
        allocated,
    }
}

#[test]
fn test_free_last_allocation_returns_to_single_partition() {
    let mut table = PartitionTable::new(500).unwrap();
    let a = table.allocate("A", 100).unwrap();

    let release = table.free(a.start).unwrap();

    assert_eq!(release.coalesced, view(0, 500, false));
    assert_eq!(table.snapshot().as_slice(), &[view(0, 500, false)]);
}

#[test]
fn test_free_between_two_free_neighbours() {
    let mut table = PartitionTable::new(300).unwrap();
    let a = table.allocate("A", 100).unwrap();
    let b = table.allocate("B", 100).unwrap();
    let c = table.allocate("C", 100).unwrap();

    table.free(a.start).unwrap();
    table.free(c.start).unwrap();
    assert_eq!(table.len(), 3);

    let release = table.free(b.start).unwrap();

    assert!(release.merged());
    assert_eq!(release.start, 100);
    assert_eq!(release.size, 100);
    assert_eq!(release.coalesced, view(0, 300, false));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_non_adjacent_free_partitions_coexist() {
    let mut table = PartitionTable::new(300).unwrap();
    let a = table.allocate("A", 100).unwrap();
    table.allocate("B", 100).unwrap();
    let c = table.allocate("C", 100).unwrap();

    table.free(a.start).unwrap();
    table.free(c.start).unwrap();

    assert_eq!(
        table.snapshot().as_slice(),
        &[view(0, 100, false), view(100, 100, true), view(200, 100, false)]
    );
}

#[test]
fn test_double_free_rejected() {
    let mut table = PartitionTable::new(100).unwrap();
    let a = table.allocate("A", 40).unwrap();
    table.free(a.start).unwrap();

    assert_eq!(
        table.free(a.start).unwrap_err(),
        MemoryError::NotAllocated(a.start)
    );
}

#[test]
fn test_merge_events_report_absorbed_count() {
    let collector = Arc::new(Collector::new());
    let mut table = PartitionTable::new(300)
        .unwrap()
        .with_collector(collector.clone());

    let a = table.allocate("A", 100).unwrap();
    let b = table.allocate("B", 100).unwrap();
    table.free(a.start).unwrap();
    collector.drain();

    table.free(b.start).unwrap();

    let payloads: Vec<Payload> = collector.drain().into_iter().map(|e| e.payload).collect();
    assert_eq!(
        payloads,
        vec![
            Payload::Freed {
                start: 100,
                size: 100
            },
            Payload::Merged {
                start: 0,
                size: 300,
                absorbed: 2
            },
        ]
    );
}
