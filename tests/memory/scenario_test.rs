/*!
 * Reference Scenario Test
 * The scripted walkthrough over 1000 KB, checked step by step
 */

use partition_sim::memory::{MemoryError, PartitionTable, PartitionView};
use pretty_assertions::assert_eq;

fn layout(table: &PartitionTable) -> Vec<(usize, usize, bool)> {
    table
        .snapshot()
        .iter()
        .map(|p: &PartitionView| (p.start, p.size, p.allocated))
        .collect()
}

#[test]
fn test_reference_sequence() {
    let mut table = PartitionTable::new(1000).unwrap();

    let a = table.allocate("A", 400).unwrap();
    assert_eq!(a.start, 0);
    assert_eq!(layout(&table), vec![(0, 400, true), (400, 600, false)]);

    let b = table.allocate("B", 250).unwrap();
    assert_eq!(b.start, 400);
    assert_eq!(
        layout(&table),
        vec![(0, 400, true), (400, 250, true), (650, 350, false)]
    );

    let c = table.allocate("C", 200).unwrap();
    assert_eq!(c.start, 650);
    assert_eq!(
        layout(&table),
        vec![
            (0, 400, true),
            (400, 250, true),
            (650, 200, true),
            (850, 150, false)
        ]
    );

    let release = table.free(0).unwrap();
    assert!(!release.merged());
    assert_eq!(
        layout(&table),
        vec![
            (0, 400, false),
            (400, 250, true),
            (650, 200, true),
            (850, 150, false)
        ]
    );

    // worst fit compares the 400 hole at 0 against the 150 hole at 850
    let d = table.allocate("D", 230).unwrap();
    assert_eq!(d.start, 0);
    assert_eq!(
        layout(&table),
        vec![
            (0, 230, true),
            (230, 170, false),
            (400, 250, true),
            (650, 200, true),
            (850, 150, false)
        ]
    );

    // 450 KB are free in total, but no single hole holds 300
    let before = table.snapshot();
    assert_eq!(
        table.allocate("E", 300).unwrap_err(),
        MemoryError::InsufficientSpace {
            requested: 300,
            largest_free: 170
        }
    );
    assert_eq!(table.snapshot(), before);

    let release = table.free(400).unwrap();
    assert_eq!(release.coalesced.start, 230);
    assert_eq!(release.coalesced.size, 420);
    assert_eq!(
        layout(&table),
        vec![
            (0, 230, true),
            (230, 420, false),
            (650, 200, true),
            (850, 150, false)
        ]
    );

    let f = table.allocate("F", 220).unwrap();
    assert_eq!(f.start, 230);
    assert_eq!(
        layout(&table),
        vec![
            (0, 230, true),
            (230, 220, true),
            (450, 200, false),
            (650, 200, true),
            (850, 150, false)
        ]
    );

    assert!(table.validate().is_ok());
    assert_eq!(table.used_memory(), 650);
}
