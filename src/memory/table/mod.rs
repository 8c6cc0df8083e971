/*!
 * Partition Table
 *
 * Worst-fit contiguous allocator over a fixed address range `[0, total)`.
 *
 * ## Layout
 *
 * Partitions live in a `Vec` sorted by start address. Together they tile the
 * whole range with no gaps or overlaps, and no two neighbours are both free.
 * Lookups by address use binary search; splits and merges shift the vector,
 * which is O(n) and fine for the table sizes this simulator models.
 *
 * ## Operations
 *
 * - **allocate**: pick the largest free partition that fits (lowest address
 *   wins ties), split off the unused tail as a new free partition
 * - **free**: mark the partition free and merge it with free neighbours
 * - **snapshot**: owned copy of the table for reporting
 *
 * Failed operations leave the table untouched.
 */

mod allocator;
mod coalesce;
mod stats;

use super::traits::{Allocator, MemoryInfo};
use super::types::{
    Allocation, MemoryError, MemoryResult, MemoryStats, Partition, PartitionView, Release,
    Snapshot,
};
use crate::core::types::{Address, Size};
use crate::monitoring::{Collector, Payload};
use std::sync::Arc;
use tracing::info;

/// Worst-fit partition table
#[derive(Debug, Clone)]
pub struct PartitionTable {
    partitions: Vec<Partition>,
    total_memory: Size,
    used_memory: Size,
    // Optional sink for structured outcome events
    collector: Option<Arc<Collector>>,
}

impl PartitionTable {
    /// Create a table holding one free partition that spans `total` units
    pub fn new(total: Size) -> MemoryResult<Self> {
        if total == 0 {
            return Err(MemoryError::InvalidCapacity(total));
        }

        info!(total, "Partition table initialized with worst-fit placement");
        Ok(Self {
            partitions: vec![Partition::free(0, total)],
            total_memory: total,
            used_memory: 0,
            collector: None,
        })
    }

    /// Add event collector
    pub fn with_collector(mut self, collector: Arc<Collector>) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn total_memory(&self) -> Size {
        self.total_memory
    }

    pub fn used_memory(&self) -> Size {
        self.used_memory
    }

    /// Number of partitions currently in the table
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Always false: a table covers its range with at least one partition
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Read-only iteration over the current partitions in address order
    pub fn iter(&self) -> impl Iterator<Item = PartitionView> + '_ {
        self.partitions.iter().map(PartitionView::from)
    }

    /// Owned copy of the table; unaffected by later mutations
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.iter().collect())
    }

    /// Index of the partition starting exactly at `address`
    fn find(&self, address: Address) -> Option<usize> {
        self.partitions
            .binary_search_by_key(&address, |p| p.start)
            .ok()
    }

    fn emit(&self, payload: Payload) {
        if let Some(ref collector) = self.collector {
            collector.emit(payload);
        }
    }

    /// Check every structural invariant of the table
    ///
    /// Returns the first violation found. Operations assert this in debug
    /// builds; tests call it directly.
    pub fn validate(&self) -> MemoryResult<()> {
        let corrupt = |address: Address, reason: &str| MemoryError::CorruptionDetected {
            address,
            reason: reason.to_string(),
        };

        let first = self
            .partitions
            .first()
            .ok_or_else(|| corrupt(0, "table has no partitions"))?;
        if first.start != 0 {
            return Err(corrupt(first.start, "first partition does not start at 0"));
        }

        for p in &self.partitions {
            if p.size == 0 {
                return Err(corrupt(p.start, "zero-sized partition"));
            }
        }

        for pair in self.partitions.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if left.end() != right.start {
                return Err(corrupt(right.start, "gap or overlap between partitions"));
            }
            if left.is_free() && right.is_free() {
                return Err(corrupt(right.start, "adjacent free partitions"));
            }
        }

        // Non-empty checked above
        let last = &self.partitions[self.partitions.len() - 1];
        if last.end() != self.total_memory {
            return Err(corrupt(last.start, "last partition does not end at total"));
        }

        let used: Size = self
            .partitions
            .iter()
            .filter(|p| p.allocated)
            .map(|p| p.size)
            .sum();
        if used != self.used_memory {
            return Err(corrupt(0, "used memory counter out of sync"));
        }

        Ok(())
    }

    /// Build a table from explicit `(size, allocated)` pairs laid out from 0
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &[(Size, bool)]) -> Self {
        let mut start = 0;
        let mut partitions = Vec::with_capacity(layout.len());
        for &(size, allocated) in layout {
            partitions.push(Partition {
                start,
                size,
                allocated,
            });
            start += size;
        }
        let used_memory = partitions
            .iter()
            .filter(|p| p.allocated)
            .map(|p| p.size)
            .sum();
        Self {
            partitions,
            total_memory: start,
            used_memory,
            collector: None,
        }
    }
}

// Implement trait interfaces
impl Allocator for PartitionTable {
    fn allocate(&mut self, label: &str, size: Size) -> MemoryResult<Allocation> {
        PartitionTable::allocate(self, label, size)
    }

    fn free(&mut self, address: Address) -> MemoryResult<Release> {
        PartitionTable::free(self, address)
    }

    fn is_valid(&self, address: Address) -> bool {
        self.find(address)
            .map_or(false, |i| self.partitions[i].allocated)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        self.find(address).map(|i| self.partitions[i].size)
    }
}

impl MemoryInfo for PartitionTable {
    fn stats(&self) -> MemoryStats {
        PartitionTable::stats(self)
    }

    fn snapshot(&self) -> Snapshot {
        PartitionTable::snapshot(self)
    }
}
