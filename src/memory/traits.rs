/*!
 * Memory Traits
 * Partition management abstractions
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Partition allocator interface
pub trait Allocator {
    /// Place a labelled request and return the allocation handle
    fn allocate(&mut self, label: &str, size: Size) -> MemoryResult<Allocation>;

    /// Release the allocated partition starting at `address`
    fn free(&mut self, address: Address) -> MemoryResult<Release>;

    /// Check if an address is the start of an allocated partition
    fn is_valid(&self, address: Address) -> bool;

    /// Get the size of the partition starting at `address`
    fn block_size(&self, address: Address) -> Option<Size>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Point-in-time copy of every partition in address order
    fn snapshot(&self) -> Snapshot;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (stats.total_memory, stats.used_memory, stats.available_memory)
    }
}
