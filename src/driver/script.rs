/*!
 * Driver Scripts
 * Ordered allocate/free steps, built in or loaded from JSON
 */

use crate::core::limits::DEFAULT_TOTAL_MEMORY;
use crate::core::types::{Address, Label, Size};
use serde::{Deserialize, Serialize};

/// One scripted request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Allocate { label: Label, size: Size },
    Free { address: Address },
    /// Free whatever the driver last allocated under `label`
    FreeLabel { label: Label },
}

impl Step {
    pub fn allocate(label: &str, size: Size) -> Self {
        Step::Allocate {
            label: label.into(),
            size,
        }
    }

    pub fn free(address: Address) -> Self {
        Step::Free { address }
    }

    pub fn free_label(label: &str) -> Self {
        Step::FreeLabel {
            label: label.into(),
        }
    }
}

/// Ordered sequence of steps plus an optional memory size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub total_memory: Option<Size>,
    pub steps: Vec<Step>,
}

impl Script {
    /// The reference walkthrough over 1000 KB
    pub fn demo() -> Self {
        Self {
            total_memory: Some(DEFAULT_TOTAL_MEMORY),
            steps: vec![
                Step::allocate("A", 400),
                Step::allocate("B", 250),
                Step::allocate("C", 200),
                Step::free(0),
                Step::allocate("D", 230),
                Step::allocate("E", 300),
                Step::free(400),
                Step::allocate("F", 220),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
