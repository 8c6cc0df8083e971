/*!
 * Script Driver
 *
 * Feeds scripted requests to an allocator in order, remembers which label
 * got which address, and keeps going after recoverable failures.
 */

mod script;

pub use script::{Script, Step};

use crate::core::types::{Address, Label};
use crate::memory::{Allocation, Allocator, MemoryError, MemoryInfo, Release, Snapshot};
use ahash::RandomState;
use miette::Diagnostic;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a scripted step can fail
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum DriverError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("No live allocation is recorded for label {0}")]
    #[diagnostic(code(driver::unknown_label))]
    UnknownLabel(Label),
}

/// Result of running one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Allocated(Allocation),
    Freed(Release),
    Failed(DriverError),
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

/// Sequential request driver over any allocator
#[derive(Debug)]
pub struct Driver<A> {
    allocator: A,
    // label -> start address of its live allocation
    labels: HashMap<Label, Address, RandomState>,
}

impl<A: Allocator + MemoryInfo> Driver<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            labels: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn into_inner(self) -> A {
        self.allocator
    }

    /// Start address of the live allocation made under `label`
    pub fn address_of(&self, label: &str) -> Option<Address> {
        self.labels.get(label).copied()
    }

    /// Run one step against the allocator
    pub fn step(&mut self, step: &Step) -> StepOutcome {
        let result = match step {
            Step::Allocate { label, size } => self.allocate(label, *size),
            Step::Free { address } => self.free(*address),
            Step::FreeLabel { label } => match self.labels.get(label.as_str()).copied() {
                Some(address) => self.free(address),
                None => Err(DriverError::UnknownLabel(label.clone())),
            },
        };

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(?step, error = %err, "Step failed, continuing");
                StepOutcome::Failed(err)
            }
        }
    }

    /// Run every step in order, calling `observer` after each one
    pub fn run<F>(&mut self, script: &Script, mut observer: F) -> Vec<StepOutcome>
    where
        F: FnMut(&Step, &StepOutcome, &Snapshot),
    {
        let mut outcomes = Vec::with_capacity(script.len());
        for step in &script.steps {
            let outcome = self.step(step);
            observer(step, &outcome, &self.allocator.snapshot());
            outcomes.push(outcome);
        }
        outcomes
    }

    fn allocate(&mut self, label: &Label, size: usize) -> Result<StepOutcome, DriverError> {
        let allocation = self.allocator.allocate(label, size)?;
        if let Some(previous) = self.labels.insert(label.clone(), allocation.start) {
            debug!(%label, previous, "Label reassigned to a new allocation");
        }
        Ok(StepOutcome::Allocated(allocation))
    }

    fn free(&mut self, address: Address) -> Result<StepOutcome, DriverError> {
        let release = self.allocator.free(address)?;
        self.labels.retain(|_, start| *start != address);
        Ok(StepOutcome::Freed(release))
    }
}
