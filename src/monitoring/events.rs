/*!
 * Event System
 * Strongly-typed partition events emitted by the table
 */

use crate::core::types::{Address, Label, Size};
use serde::{Deserialize, Serialize};

/// Event severity for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
}

/// Unified event type - every table outcome flows through this
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Emission order within one collector
    pub seq: u64,
    pub severity: Severity,
    pub payload: Payload,
}

/// Event payload - one variant per table outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// `partition_size` is the size of the selected partition before splitting
    Allocated {
        label: Label,
        start: Address,
        size: Size,
        partition_size: Size,
    },
    AllocationFailed {
        label: Label,
        requested: Size,
    },
    Freed {
        start: Address,
        size: Size,
    },
    /// `absorbed` partitions were folded into the free run at `start`
    Merged {
        start: Address,
        size: Size,
        absorbed: usize,
    },
    FreeFailed {
        address: Address,
    },
}

impl Payload {
    /// Default severity for this kind of outcome
    pub fn severity(&self) -> Severity {
        match self {
            Payload::Allocated { .. } | Payload::Freed { .. } => Severity::Info,
            Payload::Merged { .. } => Severity::Debug,
            Payload::AllocationFailed { .. } | Payload::FreeFailed { .. } => Severity::Warn,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity() == Severity::Warn
    }
}
