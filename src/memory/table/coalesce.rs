/*!
 * Deallocation and Coalescing
 * Releasing partitions and merging free neighbours
 */

use super::super::types::{MemoryError, MemoryResult, PartitionView, Release};
use super::PartitionTable;
use crate::core::types::Address;
use crate::monitoring::Payload;
use tracing::{debug, info, instrument, warn};

impl PartitionTable {
    /// Free the allocated partition starting at `address`
    ///
    /// Fails with `NotAllocated` when no partition starts there or the one
    /// that does is already free. On success the partition is merged with
    /// every free neighbour, so no two adjacent partitions stay free.
    #[instrument(level = "debug", skip(self))]
    pub fn free(&mut self, address: Address) -> MemoryResult<Release> {
        let index = match self.find(address) {
            Some(index) if self.partitions[index].allocated => index,
            _ => {
                warn!(address, "No allocated partition at address");
                self.emit(Payload::FreeFailed { address });
                return Err(MemoryError::NotAllocated(address));
            }
        };

        let partition = &mut self.partitions[index];
        partition.allocated = false;
        let size = partition.size;
        self.used_memory -= size;

        info!(start = address, size, "Freed partition");
        self.emit(Payload::Freed {
            start: address,
            size,
        });

        let index = self.coalesce_around(index);
        let coalesced = PartitionView::from(&self.partitions[index]);

        debug_assert!(self.validate().is_ok(), "{:?}", self.validate());

        Ok(Release {
            start: address,
            size,
            coalesced,
        })
    }

    /// Merge the free partition at `index` with its free neighbours
    ///
    /// Absorbs following free partitions first, then folds into preceding
    /// ones, repeating until neither neighbour is free. Returns the index of
    /// the surviving partition, which holds the lowest start of the run.
    fn coalesce_around(&mut self, mut index: usize) -> usize {
        let mut absorbed = 0;

        while index + 1 < self.partitions.len() && self.partitions[index + 1].is_free() {
            let next = self.partitions.remove(index + 1);
            self.partitions[index].size += next.size;
            absorbed += 1;
        }

        while index > 0 && self.partitions[index - 1].is_free() {
            let current = self.partitions.remove(index);
            index -= 1;
            self.partitions[index].size += current.size;
            absorbed += 1;
        }

        if absorbed > 0 {
            let survivor = self.partitions[index];
            debug!(
                start = survivor.start,
                size = survivor.size,
                absorbed,
                "Coalesced free partitions"
            );
            self.emit(Payload::Merged {
                start: survivor.start,
                size: survivor.size,
                absorbed,
            });
        }

        index
    }
}
