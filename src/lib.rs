/*!
 * Partition Simulator Library
 * Worst-fit contiguous memory allocation exposed as a library
 */

pub mod config;
pub mod core;
pub mod driver;
pub mod memory;
pub mod monitoring;
pub mod report;

// Re-exports
pub use config::{ConfigError, SimConfig};
pub use driver::{Driver, DriverError, Script, Step, StepOutcome};
pub use memory::{
    Allocation, Allocator, MemoryError, MemoryInfo, MemoryResult, MemoryStats, PartitionTable,
    PartitionView, Release, Snapshot,
};
pub use monitoring::{init_tracing, Collector, Event, Payload};
