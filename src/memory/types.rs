/*!
 * Memory Types
 * Common types for partition management
 */

use crate::core::limits::{PRESSURE_CRITICAL, PRESSURE_HIGH, PRESSURE_MEDIUM};
use crate::core::types::{Address, Label, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Invalid memory capacity: total size must be positive, got {0}")]
    #[diagnostic(
        code(memory::invalid_capacity),
        help("Configure a total memory size greater than zero.")
    )]
    InvalidCapacity(Size),

    #[error("Invalid allocation size: requested {0}, size must be positive")]
    #[diagnostic(code(memory::invalid_size))]
    InvalidSize(Size),

    #[error("Insufficient space: requested {requested}, largest free partition is {largest_free}")]
    #[diagnostic(
        code(memory::insufficient_space),
        help("Free an allocated partition or request a smaller size.")
    )]
    InsufficientSpace { requested: Size, largest_free: Size },

    #[error("No allocated partition starts at address {0}")]
    #[diagnostic(code(memory::not_allocated))]
    NotAllocated(Address),

    #[error("Partition table corruption detected at {address}: {reason}")]
    #[diagnostic(code(memory::corruption))]
    CorruptionDetected { address: Address, reason: String },
}

/// One contiguous span of the address space, owned by the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Partition {
    pub start: Address,
    pub size: Size,
    pub allocated: bool,
}

impl Partition {
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            start,
            size,
            allocated: false,
        }
    }

    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        !self.allocated
    }
}

/// Read-only copy of a partition handed out by snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionView {
    pub start: Address,
    pub size: Size,
    pub allocated: bool,
}

impl PartitionView {
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }
}

impl From<&Partition> for PartitionView {
    fn from(p: &Partition) -> Self {
        Self {
            start: p.start,
            size: p.size,
            allocated: p.allocated,
        }
    }
}

/// Ordered point-in-time copy of the partition table
///
/// Owns its data; later mutations of the table never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    partitions: Vec<PartitionView>,
}

impl Snapshot {
    pub fn new(partitions: Vec<PartitionView>) -> Self {
        Self { partitions }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PartitionView> {
        self.partitions.iter()
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn as_slice(&self) -> &[PartitionView] {
        &self.partitions
    }

    /// Partition starting exactly at `start`, if any
    pub fn at(&self, start: Address) -> Option<&PartitionView> {
        self.partitions.iter().find(|p| p.start == start)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a PartitionView;
    type IntoIter = std::slice::Iter<'a, PartitionView>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}

/// Successful placement returned by `allocate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub label: Label,
    pub start: Address,
    pub size: Size,
}

/// Successful release returned by `free`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Start of the partition that was freed
    pub start: Address,
    /// Size of the partition that was freed
    pub size: Size,
    /// Free region the partition ended up in after coalescing
    pub coalesced: PartitionView,
}

impl Release {
    /// Whether coalescing merged the freed partition with a neighbour
    pub fn merged(&self) -> bool {
        self.coalesced.size != self.size
    }
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub largest_free_block: Size,
    pub allocated_partitions: usize,
    pub free_partitions: usize,
    /// Share of free memory outside the largest free block, in percent
    pub external_fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        let ratio = self.usage_percentage / 100.0;
        if ratio >= PRESSURE_CRITICAL {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
