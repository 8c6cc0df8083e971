/*!
 * Report Rendering
 * Human-readable text for snapshots, events and statistics
 */

use crate::core::limits::SIZE_UNIT;
use crate::memory::{MemoryStats, Snapshot};
use crate::monitoring::{Event, Payload};
use std::fmt::Write;

/// Header printed above every status table
pub const STATUS_HEADER: &str = "<<<Current Partition Status>>>";

/// Render the partition table, one line per partition
pub fn render_status(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(STATUS_HEADER.len() + snapshot.len() * 48);
    out.push_str(STATUS_HEADER);
    out.push('\n');

    for p in snapshot {
        let _ = writeln!(
            out,
            "Partition [Start: {}, Size: {} {} ({})]",
            p.start,
            p.size,
            SIZE_UNIT,
            if p.allocated { "Allocated" } else { "Free" }
        );
    }

    out
}

/// Render a single event as a one-line message
pub fn render_event(event: &Event) -> String {
    match &event.payload {
        Payload::Allocated {
            label,
            start,
            size,
            partition_size,
        } => format!(
            "Allocation of process {label} of size {size} {SIZE_UNIT} to partition starting at {start} with size {partition_size} {SIZE_UNIT}."
        ),
        Payload::AllocationFailed { label, requested } => {
            format!("Process {label} of size {requested} {SIZE_UNIT} cannot be allocated.")
        }
        Payload::Freed { start, size } => {
            format!("Freeing partition starting at {start} with size {size} {SIZE_UNIT}.")
        }
        Payload::Merged {
            start,
            size,
            absorbed,
        } => format!(
            "Merged {absorbed} adjacent free partition(s) into partition starting at {start} with size {size} {SIZE_UNIT}."
        ),
        Payload::FreeFailed { address } => {
            format!("No allocated block found at start address {address}.")
        }
    }
}

/// Render usage statistics as a one-line summary
pub fn render_stats(stats: &MemoryStats) -> String {
    format!(
        "Memory: {used}/{total} {unit} used ({pct:.1}%), {free} free in {parts} partition(s), largest free {largest} {unit}, external fragmentation {frag:.1}%, pressure {pressure}",
        used = stats.used_memory,
        total = stats.total_memory,
        unit = SIZE_UNIT,
        pct = stats.usage_percentage,
        free = stats.available_memory,
        parts = stats.free_partitions,
        largest = stats.largest_free_block,
        frag = stats.external_fragmentation,
        pressure = stats.memory_pressure(),
    )
}
