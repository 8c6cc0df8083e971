/*!
 * Table Statistics
 * Usage and fragmentation figures derived from the partition list
 */

use super::super::types::MemoryStats;
use super::PartitionTable;
use crate::core::types::Size;

impl PartitionTable {
    /// Size of the largest free partition, 0 when memory is full
    pub fn largest_free_block(&self) -> Size {
        self.partitions
            .iter()
            .filter(|p| p.is_free())
            .map(|p| p.size)
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> MemoryStats {
        let available = self.total_memory - self.used_memory;
        let largest_free = self.largest_free_block();
        let free_partitions = self.partitions.iter().filter(|p| p.is_free()).count();

        let external_fragmentation = if available == 0 {
            0.0
        } else {
            (available - largest_free) as f64 / available as f64 * 100.0
        };

        MemoryStats {
            total_memory: self.total_memory,
            used_memory: self.used_memory,
            available_memory: available,
            usage_percentage: self.used_memory as f64 / self.total_memory as f64 * 100.0,
            largest_free_block: largest_free,
            allocated_partitions: self.partitions.len() - free_partitions,
            free_partitions,
            external_fragmentation,
        }
    }
}
