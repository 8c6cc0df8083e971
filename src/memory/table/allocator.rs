/*!
 * Worst-Fit Allocation
 * Partition selection and splitting
 */

use super::super::types::{Allocation, MemoryError, MemoryResult, Partition};
use super::PartitionTable;
use crate::core::types::Size;
use crate::monitoring::Payload;
use tracing::{debug, info, instrument, warn};

impl PartitionTable {
    /// Allocate `size` units for `label` from the largest free partition
    ///
    /// The selected partition keeps its start address, which is returned as
    /// the allocation handle. Any unused tail becomes a new free partition
    /// directly after it.
    #[instrument(level = "debug", skip(self))]
    pub fn allocate(&mut self, label: &str, size: Size) -> MemoryResult<Allocation> {
        if size == 0 {
            warn!(label, "Rejected allocation request of size 0");
            self.emit(Payload::AllocationFailed {
                label: label.into(),
                requested: size,
            });
            return Err(MemoryError::InvalidSize(size));
        }

        let Some(index) = self.worst_fit_index(size) else {
            let largest_free = self.largest_free_block();
            warn!(
                label,
                requested = size,
                largest_free,
                "No free partition large enough"
            );
            self.emit(Payload::AllocationFailed {
                label: label.into(),
                requested: size,
            });
            return Err(MemoryError::InsufficientSpace {
                requested: size,
                largest_free,
            });
        };

        let selected = self.partitions[index];

        if selected.size > size {
            let remainder = Partition::free(selected.start + size, selected.size - size);
            self.partitions.insert(index + 1, remainder);
            debug!(
                start = selected.start,
                kept = size,
                remainder_start = remainder.start,
                remainder_size = remainder.size,
                "Split partition"
            );
        }

        let partition = &mut self.partitions[index];
        partition.size = size;
        partition.allocated = true;
        self.used_memory += size;

        info!(
            label,
            start = selected.start,
            size,
            partition_size = selected.size,
            "Allocated partition"
        );
        self.emit(Payload::Allocated {
            label: label.into(),
            start: selected.start,
            size,
            partition_size: selected.size,
        });

        debug_assert!(self.validate().is_ok(), "{:?}", self.validate());

        Ok(Allocation {
            label: label.into(),
            start: selected.start,
            size,
        })
    }

    /// Index of the worst-fit partition for `size`
    ///
    /// Scans in address order and only replaces the candidate on a strictly
    /// larger size, so the lowest address wins among equal maxima.
    pub(super) fn worst_fit_index(&self, size: Size) -> Option<usize> {
        let mut best: Option<(usize, Size)> = None;

        for (index, p) in self.partitions.iter().enumerate() {
            if p.is_free() && p.size >= size && best.map_or(true, |(_, s)| p.size > s) {
                best = Some((index, p.size));
            }
        }

        best.map(|(index, _)| index)
    }
}
